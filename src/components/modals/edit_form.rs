use crate::app::state::EditForm;
use crate::domain::models::FieldKind;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

const LABEL_WIDTH: u16 = 14;

pub struct EditFormModal<'a> {
    pub theme: &'a Theme,
    pub title: &'a str,
    pub form: &'a EditForm,
    pub saving: bool,
}

impl Widget for EditFormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // One row per field, borders, and a hint row
        let height = self.form.fields.len() as u16 + 4;
        let modal_area = centered_rect_fixed_height(70, height, area);
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
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        for (i, field) in self.form.fields.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let focused = i == self.form.focus;
            let label_style = if focused {
                self.theme.header_active
            } else {
                self.theme.card_label
            };
            let label = match field.kind {
                FieldKind::Text => field.label.to_string(),
                FieldKind::List => format!("{} (,)", field.label),
            };
            buf.set_string(
                inner.x,
                y,
                format!("{label:<width$}", width = LABEL_WIDTH as usize),
                label_style,
            );

            let value_area = Rect {
                x: inner.x + LABEL_WIDTH,
                y,
                width: inner.width.saturating_sub(LABEL_WIDTH),
                height: 1,
            };
            if value_area.width == 0 {
                continue;
            }
            if focused {
                buf.set_style(value_area, self.theme.input_focus);
                Widget::render(&field.text_area, value_area, buf);
            } else {
                buf.set_string(
                    value_area.x,
                    y,
                    field.text_area.text(),
                    self.theme.list_item,
                );
            }
        }

        let hint_y = inner.bottom().saturating_sub(1);
        let hint = if self.saving {
            Line::from(Span::styled(" Saving... ", self.theme.status_info))
        } else {
            Line::from(vec![
                Span::styled(" Tab", self.theme.footer_segment_key),
                Span::styled(" Next  ", self.theme.list_item),
                Span::styled("Enter", self.theme.footer_segment_key),
                Span::styled(" Save  ", self.theme.list_item),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::styled(" Cancel", self.theme.list_item),
            ])
        };
        buf.set_line(inner.x, hint_y, &hint, inner.width);
    }
}
