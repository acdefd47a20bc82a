pub mod discover;
pub mod handler;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod ui;
pub mod voice;
