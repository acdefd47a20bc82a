use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

/// One-line prompt used for search and for typing a voice command.
pub struct TextInputModal<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub hint: Option<&'a str>,
    pub text_area: &'a AppTextArea<'a>,
}

impl Widget for TextInputModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = if self.hint.is_some() { 4 } else { 3 };
        let modal_area = centered_rect_fixed_height(60, height, area);

        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title, self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let input_area = Rect {
            height: 1,
            ..inner_area
        };
        Widget::render(self.text_area, input_area, buf);

        if let Some(hint) = self.hint {
            if inner_area.height > 1 {
                buf.set_string(
                    inner_area.x,
                    inner_area.y + 1,
                    hint,
                    self.theme.dimmed,
                );
            }
        }
    }
}
