use crate::app::state::ListPage;
use crate::domain::models::Listing;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A scrollable column of entity cards for the "my jobs" / "my projects" pages.
pub struct ListingView<'a, T: Listing> {
    pub page: &'a ListPage<T>,
    pub theme: &'a Theme,
    pub scroll: u16,
    pub empty_text: &'a str,
}

impl<T: Listing> Widget for ListingView<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if !self.page.loaded {
            Paragraph::new(Line::from(Span::styled("Loading...", self.theme.dimmed)))
                .render(area, buf);
            return;
        }

        let visible = self.page.visible();
        if visible.is_empty() {
            let text = if self.page.query.trim().is_empty() {
                self.empty_text.to_string()
            } else {
                format!("Nothing matches \"{}\".", self.page.query.trim())
            };
            Paragraph::new(Line::from(Span::styled(text, self.theme.dimmed))).render(area, buf);
            return;
        }

        let lines: Vec<Line> = visible
            .iter()
            .enumerate()
            .flat_map(|(i, item)| {
                card_lines(*item, i == self.page.selected, area.width, self.theme)
            })
            .collect();

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

/// One card, exactly `item.card_height()` lines tall.
pub fn card_lines<T: Listing>(
    item: &T,
    selected: bool,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let border = if selected {
        theme.card_border_selected
    } else {
        theme.card_border
    };
    let gutter = if selected { glyphs::SELECTED } else { " " };
    let width = width as usize;

    let heading = format!(" {} ", item.heading());
    let rule_len = width.saturating_sub(heading.chars().count() + 4);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{gutter}\u{256d}\u{2500}"), border),
        Span::styled(heading, theme.card_heading),
        Span::styled(format!("{}\u{256e}", "\u{2500}".repeat(rule_len)), border),
    ])];

    lines.push(Line::from(vec![
        Span::styled(format!("{gutter}\u{2502} "), border),
        Span::styled(item.subheading().to_string(), theme.card_subheading),
    ]));

    for (label, value) in item.details() {
        lines.push(Line::from(vec![
            Span::styled(format!("{gutter}\u{2502} "), border),
            Span::styled(format!("{label:<12}"), theme.card_label),
            Span::styled(value, theme.card_value),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "{gutter}\u{2570}{}\u{256f}",
            "\u{2500}".repeat(width.saturating_sub(3))
        ),
        border,
    )));
    lines.push(Line::from(Span::styled("", Style::default())));
    lines
}
