use crate::app::state::{AppMode, AppState, PageKind};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::listing::ListingView;
use crate::components::login::LoginView;
use crate::components::modals::ModalManager;
use crate::components::profile::{profile_lines, ProfileView};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = app_state.theme.clone();

    if app_state.mode == AppMode::Login || app_state.session.is_none() {
        f.render_widget(
            LoginView {
                state: &app_state.login,
                theme: &theme,
                frame_count: app_state.frame_count,
            },
            f.area(),
        );
        f.render_widget(
            ModalManager {
                theme: &theme,
                app_state,
            },
            f.area(),
        );
        return;
    }

    let layout = get_layout(f.area());

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        f.render_widget(
            Header {
                state: app_state,
                theme: &theme,
                terminal_width: f.area().width,
            },
            layout.header,
        );
    }

    // --- Page ---
    let mut title = vec![
        Span::raw(" "),
        Span::styled(app_state.page.title().to_uppercase(), theme.header_active),
        Span::raw(" "),
    ];
    if app_state.page == PageKind::Discover {
        let discover = &app_state.discover;
        title.push(Span::styled(
            format!(" status: {} ", discover.status.label()),
            theme.header_item,
        ));
        if discover.list.completed_only {
            title.push(Span::styled(" completed only ", theme.status_ready));
        }
    }
    let page_block = Block::default()
        .title(Line::from(title))
        .title_bottom(Line::from(vec![
            Span::raw(" "),
            Span::styled("d/u", theme.footer_segment_key),
            Span::raw(": scroll "),
            Span::styled(":", theme.footer_segment_key),
            Span::raw(": say "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focus);

    if layout.body.width > 0 && layout.body.height > 0 {
        let inner = page_block.inner(layout.body);
        let content_height = match app_state.page {
            PageKind::MyJobs => app_state.jobs.content_height(),
            PageKind::MyProjects => app_state.projects.content_height(),
            PageKind::Discover => app_state.discover.list.content_height(),
            PageKind::Profile => app_state
                .profile
                .user
                .as_ref()
                .map_or(0, |user| profile_lines(user, &theme).len() as u16),
        };
        app_state.scroll.set_bounds(content_height, inner.height);
        let scroll = app_state.scroll.offset;

        f.render_widget(page_block, layout.body);
        match app_state.page {
            PageKind::MyJobs => f.render_widget(
                ListingView {
                    page: &app_state.jobs,
                    theme: &theme,
                    scroll,
                    empty_text: "You have not posted any jobs yet.",
                },
                inner,
            ),
            PageKind::MyProjects => f.render_widget(
                ListingView {
                    page: &app_state.projects,
                    theme: &theme,
                    scroll,
                    empty_text: "You have not uploaded any projects yet.",
                },
                inner,
            ),
            PageKind::Discover => f.render_widget(
                ListingView {
                    page: &app_state.discover.list,
                    theme: &theme,
                    scroll,
                    empty_text: "No projects found.",
                },
                inner,
            ),
            PageKind::Profile => f.render_widget(
                ProfileView {
                    page: &app_state.profile,
                    theme: &theme,
                    scroll,
                },
                inner,
            ),
        }
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme: &theme,
            },
            layout.footer,
        );
    }

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme: &theme,
            app_state,
        },
        f.area(),
    );
}
