use super::input::AppTextArea;
use super::pages::ListPage;
use crate::app::command::ProjectQuery;
use crate::domain::models::{EntityId, Project, Review};

/// Shorter search terms browse instead of asking the title endpoint.
pub const MIN_TITLE_SEARCH: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
}

impl StatusFilter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::InProgress => "In Progress",
            StatusFilter::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Pending,
            StatusFilter::Pending => StatusFilter::InProgress,
            StatusFilter::InProgress => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }
}

/// A comment being written, or an existing one being rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub editing: Option<EntityId>,
    pub text_area: AppTextArea<'static>,
}

impl ReviewDraft {
    #[must_use]
    pub fn new() -> Self {
        Self {
            editing: None,
            text_area: AppTextArea::default(),
        }
    }

    #[must_use]
    pub fn editing(review: &Review) -> Self {
        Self {
            editing: Some(review.id.clone()),
            text_area: AppTextArea::with_text(&review.comment),
        }
    }
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// The comment section of one project, open over the Discover list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewThread {
    pub project: EntityId,
    pub title: String,
    pub items: Vec<Review>,
    pub selected: usize,
    pub loaded: bool,
    pub busy: bool,
    pub draft: Option<ReviewDraft>,
}

impl ReviewThread {
    #[must_use]
    pub fn new(project: &Project) -> Self {
        Self {
            project: project.id.clone(),
            title: project.project_title.clone(),
            items: Vec::new(),
            selected: 0,
            loaded: false,
            busy: false,
            draft: None,
        }
    }

    #[must_use]
    pub fn selected_review(&self) -> Option<&Review> {
        self.items.get(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            self.selected = 0;
            return;
        }
        let len = self.items.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }

    pub fn set_items(&mut self, items: Vec<Review>) {
        self.items = items;
        self.loaded = true;
        self.clamp_selection();
    }

    pub fn remove(&mut self, id: &EntityId) {
        self.items.retain(|review| &review.id != id);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}

/// Everyone's projects, filtered by status or searched by title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoverPage {
    pub list: ListPage<Project>,
    pub status: StatusFilter,
    pub thread: Option<ReviewThread>,
}

impl DiscoverPage {
    /// What to ask the server for: a long enough search term wins over the
    /// status filter.
    #[must_use]
    pub fn query(&self) -> ProjectQuery {
        let term = self.list.query.trim();
        if term.chars().count() >= MIN_TITLE_SEARCH {
            return ProjectQuery::Title(term.to_string());
        }
        match self.status {
            StatusFilter::All => ProjectQuery::All,
            status => ProjectQuery::Status(vec![status.label().to_string()]),
        }
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.list.selected_item()
    }
}
