use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const KEYS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            (" d / D", "Scroll down"),
            (" u / U", "Scroll up"),
            (" j / \u{2193}", "Select next card"),
            (" k / \u{2191}", "Select previous card"),
            (" 1 2 3 4 / Tab", "My Jobs, My Projects, Profile, Discover"),
        ],
    ),
    (
        "Actions",
        &[
            (" e", "Edit selected"),
            (" x", "Delete selected"),
            (" /", "Search this list"),
            (" :", "Type a voice command"),
            (" r", "Reload page"),
        ],
    ),
    (
        "Discover",
        &[
            (" s", "Next status filter"),
            (" c / C", "Only completed projects"),
            (" ENTER", "Open comments"),
            (" a / e / x", "Add, edit, delete comment"),
        ],
    ),
    (
        "General",
        &[
            (" Esc", "Dismiss notifications"),
            (" n", "Notification history"),
            (" L", "Log out"),
            (" ?", "Show this help"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
    /// Voice commands the current page accepts right now.
    pub phrases: &'a [String],
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (category, bindings) in KEYS {
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
            rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
        }

        rows.push(Row::new(vec![
            Cell::from(Span::styled("Voice", category_style)),
            Cell::from(""),
        ]));
        if self.phrases.is_empty() {
            rows.push(Row::new(vec![
                Cell::from(""),
                Cell::from(Span::styled("No commands on this page", self.theme.dimmed)),
            ]));
        }
        for phrase in self.phrases {
            rows.push(Row::new(vec![
                Cell::from(Span::styled(format!(" \"{phrase}\""), key_style)),
                Cell::from(""),
            ]));
        }

        let table = Table::new(
            rows,
            [Constraint::Percentage(30), Constraint::Percentage(70)],
        )
        .block(block);

        table.render(help_area, buf);
    }
}
