use crate::app::state::ReviewThread;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// The comment section of one Discover project, with the draft at the bottom
/// while one is being written.
pub struct ReviewsModal<'a> {
    pub theme: &'a Theme,
    pub thread: &'a ReviewThread,
}

impl Widget for ReviewsModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(70, 70, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let thread = self.thread;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMENTS ", self.theme.header_active),
                Span::styled(format!(" {} ", thread.title), self.theme.card_heading),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let draft_height = if thread.draft.is_some() { 3 } else { 0 };
        let [list_area, draft_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(draft_height)])
            .areas(inner);

        let mut lines = Vec::new();
        if !thread.loaded {
            lines.push(Line::from(Span::styled(
                " Loading comments...",
                self.theme.status_info,
            )));
        } else if thread.items.is_empty() {
            lines.push(Line::from(Span::styled(
                " No comments yet. Press a to add one.",
                self.theme.dimmed,
            )));
        }
        for (i, review) in thread.items.iter().enumerate() {
            let style = if i == thread.selected {
                self.theme.list_selected
            } else {
                self.theme.list_item
            };
            let marker = if i == thread.selected { "> " } else { "  " };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", review.comment),
                style,
            )));
        }
        // Keep the selection on screen.
        let skip = thread
            .selected
            .saturating_add(1)
            .saturating_sub(usize::from(list_area.height));
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
            .wrap(Wrap { trim: false })
            .render(list_area, buf);

        if let Some(draft) = &thread.draft {
            let title = match (&draft.editing, thread.busy) {
                (_, true) => " Saving... ",
                (Some(_), false) => " Edit comment ",
                (None, false) => " New comment ",
            };
            let draft_block = Block::default()
                .title(Span::styled(title, self.theme.header_item))
                .borders(Borders::TOP)
                .border_style(self.theme.border);
            let text_area = draft_block.inner(draft_area);
            draft_block.render(draft_area, buf);
            Widget::render(&draft.text_area, text_area, buf);
        }
    }
}
