use crate::app::state::{LoginField, LoginState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub struct LoginView<'a> {
    pub state: &'a LoginState,
    pub theme: &'a Theme,
    pub frame_count: u64,
}

impl Widget for LoginView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_ascii = [
            r" __  __ ___ _  _____ ",
            r"|  \/  | __| ||_   _|",
            r"| |\/| | _|| |__| |  ",
            r"|_|  |_|___|____|_|  ",
        ];

        let form_height = 16;
        let form_width = 50.min(area.width);
        let centered = Rect {
            x: area.x + area.width.saturating_sub(form_width) / 2,
            y: (area.y + area.height / 2).saturating_sub(form_height / 2),
            width: form_width,
            height: form_height.min(area.height),
        };
        if centered.width == 0 || centered.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Logo
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Min(0),    // Status + hints
            ])
            .split(centered);

        let logo: Vec<Line> = logo_ascii
            .iter()
            .map(|l| Line::from(Span::styled(*l, self.theme.card_heading)))
            .collect();
        Paragraph::new(logo)
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        for (field, label, area) in [
            (LoginField::Email, " Email ", rows[1]),
            (LoginField::Password, " Password ", rows[2]),
        ] {
            let focused = self.state.focus == field;
            let block = Block::default()
                .title(Span::styled(
                    label,
                    if focused {
                        self.theme.header_active
                    } else {
                        self.theme.header_item
                    },
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if focused {
                    self.theme.border_focus
                } else {
                    self.theme.border
                });
            let inner = block.inner(area);
            block.render(area, buf);
            let text_area = match field {
                LoginField::Email => &self.state.email,
                LoginField::Password => &self.state.password,
            };
            if inner.width > 0 && inner.height > 0 {
                Widget::render(text_area, inner, buf);
            }
        }

        let mut lines = Vec::new();
        if self.state.submitting {
            let frame = SPINNER[(self.frame_count / 4) as usize % SPINNER.len()];
            lines.push(Line::from(Span::styled(
                format!("{frame} Signing in..."),
                self.theme.status_info,
            )));
        } else if let Some(err) = &self.state.error {
            lines.push(Line::from(Span::styled(
                format!(" {err} "),
                self.theme.status_error,
            )));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Tab", self.theme.footer_segment_key),
            Span::raw(" switch field  "),
            Span::styled("Enter", self.theme.footer_segment_key),
            Span::raw(" sign in  "),
            Span::styled("Esc", self.theme.footer_segment_key),
            Span::raw(" quit"),
        ]));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(rows[3], buf);
    }
}
