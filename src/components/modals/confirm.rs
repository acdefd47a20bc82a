use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// "Are you sure?" for a pending deletion. Shown only while one is pending.
pub struct ConfirmModal<'a> {
    pub theme: &'a Theme,
    pub message: &'a str,
    pub busy: bool,
}

impl Widget for ConfirmModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(50, 7, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" CONFIRM ", self.theme.status_error),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let answer = if self.busy {
            Line::from(Span::styled("Deleting...", self.theme.status_info))
        } else {
            Line::from(vec![
                Span::styled(" y ", self.theme.footer_segment_key),
                Span::raw(" Yes    "),
                Span::styled(" n ", self.theme.footer_segment_key),
                Span::raw(" No   (or say \"yes\" / \"no\")"),
            ])
        };

        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(self.message, self.theme.list_item)),
            Line::from(""),
            answer,
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(modal_area, buf);
    }
}
