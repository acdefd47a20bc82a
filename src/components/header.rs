use crate::app::state::{AppState, PageKind};
use crate::theme::{glyphs, Theme};
use crate::voice::VoiceState;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
    pub terminal_width: u16,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let logo_bg = theme.header_logo.bg.unwrap_or(Color::Reset);
        let user_bg = theme.header_user.bg.unwrap_or(Color::Reset);
        let base_bg = theme.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(" MELT ", theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(base_bg)),
            Span::styled(" ", theme.header),
        ];

        // Page tabs
        for (i, page) in PageKind::ALL.iter().enumerate() {
            let label = format!(" {} {} ", i + 1, page.title());
            let style = if *page == state.page && state.is_mounted() {
                theme.header_active
            } else {
                theme.header_item
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::styled(" ", theme.header));
        }

        let (mic, mic_style) = match state.voice.state {
            VoiceState::Listening => (glyphs::MIC, theme.status_ready),
            VoiceState::Idle => (glyphs::MIC_IDLE, theme.header_item),
            VoiceState::Unavailable => (glyphs::MIC_OFF, theme.dimmed),
        };
        spans.push(Span::styled(format!(" {mic} voice "), mic_style));

        if let Some(session) = &state.session {
            spans.push(Span::styled(" ", theme.header));
            spans.push(Span::styled(
                glyphs::SEP_RIGHT,
                Style::default().fg(base_bg).bg(user_bg),
            ));
            spans.push(Span::styled(
                format!(" {} ", session.user.display_name()),
                theme.header_user,
            ));
            spans.push(Span::styled(
                glyphs::SEP_RIGHT,
                Style::default().fg(user_bg).bg(base_bg),
            ));
        }

        // Fill rest of line
        spans.push(Span::styled(
            " ".repeat(self.terminal_width as usize),
            theme.header,
        ));

        Paragraph::new(Line::from(spans))
            .style(theme.header)
            .render(area, buf);
    }
}
