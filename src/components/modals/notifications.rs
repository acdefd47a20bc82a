use crate::app::state::{Notification, NotificationLevel};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;
const MAX_TOASTS: usize = 3;

/// Stacked toasts in the top-right corner, newest on top.
pub struct Toasts<'a> {
    pub theme: &'a Theme,
    pub notifications: &'a [Notification],
}

impl Widget for Toasts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_WIDTH.min(area.width);
        if width < 10 {
            return;
        }
        let x = area.right().saturating_sub(width + 1);
        let mut y = area.y + 1;

        for notification in self.notifications.iter().rev().take(MAX_TOASTS) {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let toast_area = Rect {
                x,
                y,
                width,
                height: TOAST_HEIGHT,
            };
            let (glyph, style) = match notification.level {
                NotificationLevel::Success => (glyphs::SUCCESS, self.theme.status_ready),
                NotificationLevel::Error => (glyphs::ERROR, self.theme.status_error),
                NotificationLevel::Info => (glyphs::INFO, self.theme.status_info),
            };

            Clear.render(toast_area, buf);
            let block = Block::default()
                .title(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(format!(" {glyph} {} ", notification.title), style),
                    Span::raw(" "),
                ]))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(self.theme.border);
            Paragraph::new(notification.body.as_str())
                .style(self.theme.list_item)
                .wrap(Wrap { trim: true })
                .block(block)
                .render(toast_area, buf);

            y += TOAST_HEIGHT;
        }
    }
}
