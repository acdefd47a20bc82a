use super::form::EditForm;
use crate::domain::models::{EntityId, Listing, User};

#[derive(Debug, Clone, PartialEq)]
pub struct Editing {
    pub id: EntityId,
    pub form: EditForm,
}

/// The local UI state every page controller owns.
///
/// The confirmation modal has no state of its own: it is shown exactly when
/// `pending_deletion` is set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageControls {
    pub editing: Option<Editing>,
    pub pending_deletion: Option<EntityId>,
    pub deleting: bool,
    pub saving: bool,
}

impl PageControls {
    #[must_use]
    pub fn modal_visible(&self) -> bool {
        self.pending_deletion.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub query: String,
    /// Hide items that are still open (see `Listing::is_open`).
    pub completed_only: bool,
    pub selected: usize,
    pub loaded: bool,
    pub controls: PageControls,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            completed_only: false,
            selected: 0,
            loaded: false,
            controls: PageControls::default(),
        }
    }
}

impl<T: Listing> ListPage<T> {
    /// Items matching the search query, in server order.
    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        let query = self.query.trim();
        self.items
            .iter()
            .filter(|item| !(self.completed_only && item.is_open()))
            .filter(|item| query.is_empty() || item.matches(query))
            .collect()
    }

    pub fn set_completed_only(&mut self, completed_only: bool) {
        self.completed_only = completed_only;
        self.clamp_selection();
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.visible().get(self.selected).copied()
    }

    #[must_use]
    pub fn find(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.loaded = true;
        self.clamp_selection();
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.selected = 0;
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.visible().len();
        self.selected = calculate_new_index(self.selected, delta, len);
    }

    /// Removes the item with `id`, keeping the others in order.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.clamp_selection();
        self.items.len() != before
    }

    /// Swaps in the server's representation of an item.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Row at which the selected card starts, given the current filter.
    /// Both values saturate at `u16::MAX` on very long lists.
    #[must_use]
    pub fn selected_offset(&self) -> (u16, u16) {
        let visible = self.visible();
        let top = stacked_height(visible.iter().take(self.selected).copied());
        let height = visible.get(self.selected).map_or(0, |i| i.card_height());
        (top, height)
    }

    #[must_use]
    pub fn content_height(&self) -> u16 {
        stacked_height(self.visible())
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

fn stacked_height<'a, T: Listing + 'a>(cards: impl IntoIterator<Item = &'a T>) -> u16 {
    cards
        .into_iter()
        .fold(0u16, |total, card| total.saturating_add(card.card_height()))
}

fn calculate_new_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + delta).rem_euclid(len as isize) as usize
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfilePage {
    pub user: Option<User>,
    pub loaded: bool,
    pub controls: PageControls,
}

impl ProfilePage {
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fixtures::job;

    fn page(ids: &[&str]) -> ListPage<crate::domain::models::Job> {
        let mut page = ListPage::default();
        page.set_items(ids.iter().map(|id| job(id)).collect());
        page
    }

    fn ids(page: &ListPage<crate::domain::models::Job>) -> Vec<&str> {
        page.items.iter().map(|j| j.id.0.as_str()).collect()
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut page = page(&["1", "2", "3", "4"]);
        assert!(page.remove(&EntityId::from("2")));
        assert_eq!(ids(&page), vec!["1", "3", "4"]);
        assert!(!page.remove(&EntityId::from("9")));
        assert_eq!(ids(&page), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_remove_clamps_selection() {
        let mut page = page(&["1", "2"]);
        page.selected = 1;
        page.remove(&EntityId::from("2"));
        assert_eq!(page.selected, 0);
        assert_eq!(page.selected_item().map(|j| j.id.0.as_str()), Some("1"));
    }

    #[test]
    fn test_selection_wraps_within_filter() {
        let mut page = page(&["1", "2", "3"]);
        page.items[1].company = "Globex".to_string();
        page.set_query("globex");
        assert_eq!(page.visible().len(), 1);
        page.move_selection(1);
        assert_eq!(page.selected, 0);

        page.set_query("");
        page.move_selection(-1);
        assert_eq!(page.selected, 2);
    }

    #[test]
    fn test_heights_saturate_on_huge_lists() {
        let ids: Vec<String> = (0..7_000).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut page = page(&refs);
        assert_eq!(page.content_height(), u16::MAX);

        page.selected = 6_999;
        let (top, height) = page.selected_offset();
        assert_eq!(top, u16::MAX);
        assert_eq!(height, job("1").card_height());
    }

    #[test]
    fn test_completed_only_hides_open_projects() {
        let mut page: ListPage<crate::domain::models::Project> = ListPage::default();
        let statuses = ["Pending", "Completed", "In Progress", "Completed"];
        page.set_items(
            statuses
                .iter()
                .enumerate()
                .map(|(i, status)| {
                    let mut project = crate::app::fixtures::project(&i.to_string());
                    project.project_status = (*status).to_string();
                    project
                })
                .collect(),
        );
        page.selected = 3;

        page.set_completed_only(true);
        let ids: Vec<&str> = page.visible().iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(page.selected, 1);

        page.set_completed_only(false);
        assert_eq!(page.visible().len(), 4);
    }

    #[test]
    fn test_replace_matches_by_id() {
        let mut page = page(&["1", "2"]);
        let mut updated = job("2");
        updated.position = "Staff Engineer".to_string();
        assert!(page.replace(updated));
        assert_eq!(page.items[1].position, "Staff Engineer");
        assert!(!page.replace(job("7")));
    }
}
