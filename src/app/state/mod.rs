use super::config::AppConfig;
use super::keymap::KeyMap;
use crate::domain::models::{EntityId, FieldSpec, Listing, Session};
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;

pub mod discover;
pub mod form;
pub mod input;
pub mod login;
pub mod notifications;
pub mod pages;
pub mod scroll;
pub mod voice;

// Re-exports
pub use discover::{DiscoverPage, ReviewDraft, ReviewThread, StatusFilter};
pub use form::{EditForm, FormField};
pub use input::{AppTextArea, InputState};
pub use login::{LoginField, LoginState};
pub use notifications::{Notification, NotificationCenter, NotificationLevel};
pub use pages::{Editing, ListPage, PageControls, ProfilePage};
pub use scroll::ScrollState;
pub use voice::VoiceStatus;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Login,       // No session: credentials form
    Normal,      // A page is mounted
    Search,      // Typing a list filter
    VoicePrompt, // Typing an utterance by hand
    Help,        // Showing the help overlay
    History,     // Showing past notifications
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PageKind {
    MyJobs,
    MyProjects,
    Profile,
    Discover,
}

impl PageKind {
    /// Tab order; position + 1 is the page's number key.
    pub const ALL: [PageKind; 4] = [
        PageKind::MyJobs,
        PageKind::MyProjects,
        PageKind::Profile,
        PageKind::Discover,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            PageKind::MyJobs => "My Jobs",
            PageKind::MyProjects => "My Projects",
            PageKind::Profile => "Profile",
            PageKind::Discover => "Discover Projects",
        }
    }

    /// The word voice commands use for this page's entity.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            PageKind::MyJobs => "job",
            PageKind::MyProjects | PageKind::Discover => "project",
            PageKind::Profile => "profile",
        }
    }

    /// Pages listing the signed-in user's own entities, which can be edited
    /// and deleted.
    #[must_use]
    pub fn owns_entities(self) -> bool {
        !matches!(self, PageKind::Discover)
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            PageKind::MyJobs => PageKind::MyProjects,
            PageKind::MyProjects => PageKind::Profile,
            PageKind::Profile => PageKind::Discover,
            PageKind::Discover => PageKind::MyJobs,
        }
    }
}

/// Identifies one mount of a page. Results tagged with an older id are stale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct MountId(pub u64);

impl MountId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug)]
pub struct AppState {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub session: Option<Session>,
    pub pending_requests: usize,

    // --- Pages ---
    pub page: PageKind,
    pub mount: MountId,
    pub jobs: ListPage<crate::domain::models::Job>,
    pub projects: ListPage<crate::domain::models::Project>,
    pub profile: ProfilePage,
    pub discover: DiscoverPage,

    // --- Input Handling ---
    pub login: LoginState,
    pub input: Option<InputState<'static>>,

    // --- Feedback ---
    pub notifications: NotificationCenter,
    pub voice: VoiceStatus,

    // --- Scrolling & Animation ---
    pub scroll: ScrollState,
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig, session: Option<Session>) -> Self {
        let mode = if session.is_some() {
            AppMode::Normal
        } else {
            AppMode::Login
        };
        Self {
            mode,
            session,
            keymap: Arc::new(KeyMap::from_config(config)),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            notifications: NotificationCenter::new(config.notification_ttl_secs),
            scroll: ScrollState::new(config.scroll_step),
            ..Default::default()
        }
    }

    /// A page is mounted: signed in and past the login screen.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.session.is_some() && self.mode != AppMode::Login
    }

    #[must_use]
    pub fn controls(&self) -> &PageControls {
        match self.page {
            PageKind::MyJobs => &self.jobs.controls,
            PageKind::MyProjects => &self.projects.controls,
            PageKind::Profile => &self.profile.controls,
            PageKind::Discover => &self.discover.list.controls,
        }
    }

    pub fn controls_mut(&mut self) -> &mut PageControls {
        self.controls_for_mut(self.page)
    }

    pub fn controls_for_mut(&mut self, page: PageKind) -> &mut PageControls {
        match page {
            PageKind::MyJobs => &mut self.jobs.controls,
            PageKind::MyProjects => &mut self.projects.controls,
            PageKind::Profile => &mut self.profile.controls,
            PageKind::Discover => &mut self.discover.list.controls,
        }
    }

    /// The entity "edit" and "delete" act on when no id is given. On Discover
    /// this is the project whose comments open.
    #[must_use]
    pub fn selected_id(&self) -> Option<EntityId> {
        match self.page {
            PageKind::MyJobs => self.jobs.selected_item().map(|j| j.id().clone()),
            PageKind::MyProjects => self.projects.selected_item().map(|p| p.id().clone()),
            PageKind::Profile => self.profile.user.as_ref().map(|u| u.id.clone()),
            PageKind::Discover => self.discover.selected_project().map(|p| p.id().clone()),
        }
    }

    /// The comment section open over the Discover list, if any.
    #[must_use]
    pub fn review_thread(&self) -> Option<&ReviewThread> {
        match self.page {
            PageKind::Discover => self.discover.thread.as_ref(),
            _ => None,
        }
    }

    /// Form fields for editing `id` on the current page, if it exists there.
    #[must_use]
    pub fn edit_fields(&self, id: &EntityId) -> Option<Vec<FieldSpec>> {
        match self.page {
            PageKind::MyJobs => self.jobs.find(id).map(Listing::edit_fields),
            PageKind::MyProjects => self.projects.find(id).map(Listing::edit_fields),
            PageKind::Profile => self
                .profile
                .user
                .as_ref()
                .filter(|u| &u.id == id)
                .map(crate::domain::models::User::edit_fields),
            PageKind::Discover => None,
        }
    }

    /// The list page currently shown, if it is one that supports search.
    #[must_use]
    pub fn search_query(&self) -> Option<&str> {
        match self.page {
            PageKind::MyJobs => Some(&self.jobs.query),
            PageKind::MyProjects => Some(&self.projects.query),
            PageKind::Discover => Some(&self.discover.list.query),
            PageKind::Profile => None,
        }
    }

    pub fn set_search_query(&mut self, query: &str) {
        match self.page {
            PageKind::MyJobs => self.jobs.set_query(query),
            PageKind::MyProjects => self.projects.set_query(query),
            PageKind::Discover => self.discover.list.set_query(query),
            PageKind::Profile => {}
        }
    }

    /// Drops everything that belongs to page mounts; used on logout.
    pub fn reset_pages(&mut self) {
        self.jobs = ListPage::default();
        self.projects = ListPage::default();
        self.profile = ProfilePage::default();
        self.discover = DiscoverPage::default();
        self.scroll.reset();
        self.pending_requests = 0;
        self.input = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            should_quit: false,
            mode: AppMode::Login,
            session: None,
            pending_requests: 0,
            page: PageKind::MyJobs,
            mount: MountId::default(),
            jobs: ListPage::default(),
            projects: ListPage::default(),
            profile: ProfilePage::default(),
            discover: DiscoverPage::default(),
            login: LoginState::default(),
            input: None,
            notifications: NotificationCenter::new(config.notification_ttl_secs),
            voice: VoiceStatus::default(),
            scroll: ScrollState::new(config.scroll_step),
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&config)),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
        }
    }
}
