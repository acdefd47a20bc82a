use crate::app::command::{ApiOutcome, Command, RequestFailure};
use crate::app::state::{MountId, PageKind};
use crate::domain::models::{EntityId, Session};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation ---
    MountPage(PageKind), // Enter a page: new scope, fresh fetch
    NextPage,            // Cycle Jobs -> Projects -> Profile -> Discover
    SelectNext,
    SelectPrev,
    ScrollDown(u16), // Rows; eased over the following ticks
    ScrollUp(u16),
    Reload,

    // --- Page Controller ---
    // `None` targets the selected entity.
    BeginEdit(Option<EntityId>),
    CancelEdit,
    NextField,
    PrevField,
    SaveEdit,
    ConfirmDelete(Option<EntityId>),
    CancelDelete,
    ProceedDelete,

    // --- Discover ---
    CycleStatus,     // All -> Pending -> In Progress -> Completed
    ToggleCompleted, // Only completed projects, or everything
    OpenReviews,     // Comments of the selected project
    CloseReviews,
    ComposeReview, // New comment
    EditReview,    // Rewrite the selected comment
    SubmitReview,
    CancelReviewDraft,
    DeleteReview, // The selected comment

    // --- UI Mode Transitions ---
    EnterVoicePrompt,                          // Type an utterance (:)
    EnterSearch,                               // Filter the list (/)
    SubmitPrompt,                              // Enter in a prompt
    CancelMode,                                // ESC key
    ToggleHelp,                                // ?
    ToggleHistory,                             // Past notifications
    TextAreaInput(crossterm::event::KeyEvent), // Keys for whichever text field has focus

    // --- Session ---
    LoginNextField,
    SubmitLogin,
    Logout,

    // --- Voice ---
    Utterance(String),        // A finalized utterance, raw
    VoiceUnavailable(String), // The recognizer is gone for good

    // --- Async Results ---
    LoggedIn(Session),
    LoginFailed(String),
    ApiCompleted(MountId, Result<ApiOutcome, RequestFailure>),
}
