pub mod confirm;
pub mod edit_form;
pub mod help;
pub mod helpers;
pub mod history;
pub mod manager;
pub mod notifications;
pub mod reviews;
pub mod text_input;

pub use manager::ModalManager;
