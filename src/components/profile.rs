use crate::app::state::ProfilePage;
use crate::domain::models::{Role, User};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct ProfileView<'a> {
    pub page: &'a ProfilePage,
    pub theme: &'a Theme,
    pub scroll: u16,
}

impl Widget for ProfileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let lines = match &self.page.user {
            Some(user) => profile_lines(user, self.theme),
            None if self.page.loaded => vec![Line::from(Span::styled(
                "Profile unavailable.",
                self.theme.dimmed,
            ))],
            None => vec![Line::from(Span::styled("Loading...", self.theme.dimmed))],
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

/// Companies show organisation details; everyone else a personal profile.
pub fn profile_lines(user: &User, theme: &Theme) -> Vec<Line<'static>> {
    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("  {label:<12}"), theme.card_label),
            Span::styled(value.to_string(), theme.card_value),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", user.display_name()),
            theme.card_heading,
        )),
        Line::from(""),
    ];

    match user.role {
        Role::Company => {
            lines.push(field("Company", &user.name));
            lines.push(field("Email", &user.email));
            lines.push(field("Location", &user.location));
            lines.push(Line::from(""));
            lines.push(field("About", &user.description));
        }
        Role::Admin | Role::Individual => {
            let full_name = format!("{} {}", user.first_name, user.last_name);
            lines.push(field("Name", full_name.trim()));
            lines.push(field("Email", &user.email));
            lines.push(field("Location", &user.location));
            lines.push(field("Skills", &user.skills.join(", ")));
            lines.push(Line::from(""));
            lines.push(field("Bio", &user.bio));
        }
    }
    lines
}
