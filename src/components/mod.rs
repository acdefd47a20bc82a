pub mod footer;
pub mod header;
pub mod listing;
pub mod login;
pub mod modals;
pub mod profile;
