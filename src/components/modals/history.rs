use crate::app::state::{Notification, NotificationLevel};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Notifications that already left the toast stack, newest first.
pub struct HistoryModal<'a, I> {
    pub theme: &'a Theme,
    pub notifications: I,
}

impl<'a, I> Widget for HistoryModal<'a, I>
where
    I: Iterator<Item = &'a Notification>,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(70, 70, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" NOTIFICATIONS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut lines = Vec::new();
        for notification in self.notifications {
            let (glyph, style) = match notification.level {
                NotificationLevel::Success => (glyphs::SUCCESS, self.theme.status_ready),
                NotificationLevel::Error => (glyphs::ERROR, self.theme.status_error),
                NotificationLevel::Info => (glyphs::INFO, self.theme.status_info),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    notification.timestamp.format(" %H:%M:%S ").to_string(),
                    self.theme.dimmed,
                ),
                Span::styled(format!("{glyph} {}", notification.title), style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", notification.body),
                self.theme.list_item,
            )));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                " Nothing yet.",
                self.theme.dimmed,
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(modal_area, buf);
    }
}
