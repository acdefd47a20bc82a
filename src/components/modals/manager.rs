use crate::app::state::{AppMode, AppState, PageKind};
use crate::theme::Theme;
use crate::voice::registry_for;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::confirm::ConfirmModal;
use super::edit_form::EditFormModal;
use super::help::HelpModal;
use super::helpers::dim_area;
use super::history::HistoryModal;
use super::notifications::Toasts;
use super::reviews::ReviewsModal;
use super::text_input::TextInputModal;

pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;
        let controls = state.controls();

        // --- Visual Dimming ---
        let is_modal_active = !matches!(state.mode, AppMode::Normal | AppMode::Login)
            || controls.modal_visible()
            || controls.editing.is_some()
            || state.review_thread().is_some();
        if is_modal_active {
            dim_area(buf, area);
        }

        // --- Edit Form ---
        if let Some(editing) = &controls.editing {
            let title = match state.page {
                PageKind::MyJobs => " EDIT JOB ",
                PageKind::MyProjects => " EDIT PROJECT ",
                PageKind::Profile => " EDIT PROFILE ",
                PageKind::Discover => " EDIT ",
            };
            EditFormModal {
                theme: self.theme,
                title,
                form: &editing.form,
                saving: controls.saving,
            }
            .render(area, buf);
        }

        // --- Confirmation (drawn over the form) ---
        if controls.modal_visible() {
            let message = match state.page {
                PageKind::MyJobs => "Are you sure you want to delete this job?",
                PageKind::MyProjects => "Are you sure you want to delete this project?",
                PageKind::Profile => "Are you sure you want to delete your account?",
                PageKind::Discover => "Are you sure?",
            };
            ConfirmModal {
                theme: self.theme,
                message,
                busy: controls.deleting,
            }
            .render(area, buf);
        }

        // --- Comments ---
        if let Some(thread) = state.review_thread() {
            ReviewsModal {
                theme: self.theme,
                thread,
            }
            .render(area, buf);
        }

        // --- Prompts ---
        if let Some(input) = &state.input {
            let (title, hint) = match state.mode {
                AppMode::VoicePrompt if state.page == PageKind::Discover => {
                    (" SAY ", Some("e.g. \"show comments\", \"toggle completed\""))
                }
                AppMode::VoicePrompt => (" SAY ", Some("e.g. \"edit job\", \"delete project\"")),
                _ => (" SEARCH ", None),
            };
            if matches!(state.mode, AppMode::VoicePrompt | AppMode::Search) {
                TextInputModal {
                    theme: self.theme,
                    title,
                    hint,
                    text_area: &input.text_area,
                }
                .render(area, buf);
            }
        }

        if state.mode == AppMode::Help {
            let phrases: Vec<String> = registry_for(state)
                .phrases()
                .iter()
                .map(ToString::to_string)
                .collect();
            HelpModal {
                theme: self.theme,
                phrases: &phrases,
            }
            .render(area, buf);
        }

        if state.mode == AppMode::History {
            HistoryModal {
                theme: self.theme,
                notifications: state.notifications.history(),
            }
            .render(area, buf);
        }

        // --- Toasts stay on top ---
        Toasts {
            theme: self.theme,
            notifications: state.notifications.active(),
        }
        .render(area, buf);
    }
}
