use super::action::Action;
use super::config::AppConfig;
use super::state::PageKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Which binding table applies to a key press on a mounted page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyContext {
    Page,
    Confirm,
    Form,
    /// A comment section open over Discover.
    Reviews,
    /// Writing a comment; unbound keys are typed.
    Draft,
}

#[derive(Debug, PartialEq)]
pub struct KeyMap {
    pub page: HashMap<KeyEvent, Action>,
    pub confirm: HashMap<KeyEvent, Action>,
    pub form: HashMap<KeyEvent, Action>,
    pub reviews: HashMap<KeyEvent, Action>,
    pub draft: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &AppConfig) -> Self {
        let step = config.scroll_step;
        let mut page = HashMap::new();
        let mut confirm = HashMap::new();
        let mut form = HashMap::new();
        let mut reviews = HashMap::new();
        let mut draft = HashMap::new();

        // --- Page shortcuts ---
        page.insert(ch('d'), Action::ScrollDown(step));
        page.insert(ch('D'), Action::ScrollDown(step));
        page.insert(ch('u'), Action::ScrollUp(step));
        page.insert(ch('U'), Action::ScrollUp(step));
        page.insert(key(KeyCode::PageDown), Action::ScrollDown(step));
        page.insert(key(KeyCode::PageUp), Action::ScrollUp(step));
        page.insert(ch('j'), Action::SelectNext);
        page.insert(key(KeyCode::Down), Action::SelectNext);
        page.insert(ch('k'), Action::SelectPrev);
        page.insert(key(KeyCode::Up), Action::SelectPrev);
        page.insert(ch('e'), Action::BeginEdit(None));
        page.insert(ch('x'), Action::ConfirmDelete(None));
        page.insert(ch('/'), Action::EnterSearch);
        page.insert(ch(':'), Action::EnterVoicePrompt);
        page.insert(ch('1'), Action::MountPage(PageKind::MyJobs));
        page.insert(ch('2'), Action::MountPage(PageKind::MyProjects));
        page.insert(ch('3'), Action::MountPage(PageKind::Profile));
        page.insert(ch('4'), Action::MountPage(PageKind::Discover));
        page.insert(key(KeyCode::Tab), Action::NextPage);
        page.insert(ch('r'), Action::Reload);
        page.insert(ch('L'), Action::Logout);
        page.insert(ch('?'), Action::ToggleHelp);
        page.insert(ch('n'), Action::ToggleHistory);
        page.insert(ch('s'), Action::CycleStatus);
        page.insert(ch('c'), Action::ToggleCompleted);
        page.insert(ch('C'), Action::ToggleCompleted);
        page.insert(key(KeyCode::Enter), Action::OpenReviews);
        page.insert(key(KeyCode::Esc), Action::CancelMode);
        page.insert(ch('q'), Action::Quit);

        // --- Confirmation modal ---
        confirm.insert(ch('y'), Action::ProceedDelete);
        confirm.insert(ch('Y'), Action::ProceedDelete);
        confirm.insert(key(KeyCode::Enter), Action::ProceedDelete);
        confirm.insert(ch('n'), Action::CancelDelete);
        confirm.insert(ch('N'), Action::CancelDelete);
        confirm.insert(key(KeyCode::Esc), Action::CancelDelete);

        // --- Edit form (everything else is typed into the field) ---
        form.insert(key(KeyCode::Tab), Action::NextField);
        form.insert(key(KeyCode::Down), Action::NextField);
        form.insert(key(KeyCode::BackTab), Action::PrevField);
        form.insert(key(KeyCode::Up), Action::PrevField);
        form.insert(key(KeyCode::Enter), Action::SaveEdit);
        form.insert(key(KeyCode::Esc), Action::CancelEdit);

        // --- Comment section ---
        reviews.insert(ch('j'), Action::SelectNext);
        reviews.insert(key(KeyCode::Down), Action::SelectNext);
        reviews.insert(ch('k'), Action::SelectPrev);
        reviews.insert(key(KeyCode::Up), Action::SelectPrev);
        reviews.insert(ch('a'), Action::ComposeReview);
        reviews.insert(ch('e'), Action::EditReview);
        reviews.insert(ch('x'), Action::DeleteReview);
        reviews.insert(ch(':'), Action::EnterVoicePrompt);
        reviews.insert(key(KeyCode::Esc), Action::CloseReviews);
        reviews.insert(ch('q'), Action::CloseReviews);

        draft.insert(key(KeyCode::Enter), Action::SubmitReview);
        draft.insert(key(KeyCode::Esc), Action::CancelReviewDraft);

        Self {
            page,
            confirm,
            form,
            reviews,
            draft,
        }
    }

    pub fn get_action(&self, event: KeyEvent, context: KeyContext) -> Option<Action> {
        let table = match context {
            KeyContext::Page => &self.page,
            KeyContext::Confirm => &self.confirm,
            KeyContext::Form => &self.form,
            KeyContext::Reviews => &self.reviews,
            KeyContext::Draft => &self.draft,
        };
        table.get(&normalize_key(event)).cloned()
    }
}

/// Terminals disagree on whether `D` arrives with SHIFT set; the character
/// already carries the case, so SHIFT is dropped for characters.
fn normalize_key(event: KeyEvent) -> KeyEvent {
    let modifiers = match event.code {
        KeyCode::Char(_) | KeyCode::BackTab => event.modifiers - KeyModifiers::SHIFT,
        _ => event.modifiers,
    };
    KeyEvent::new(event.code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}
