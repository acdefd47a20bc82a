use crate::app::{
    action::{Action, UpdateResult},
    command::{ApiRequest, Command},
    state::{AppMode, AppState, DiscoverPage, ListPage, PageKind, ProfilePage},
};
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::MountPage(page) => UpdateResult::Handled(mount_page(state, *page)),
        Action::NextPage => UpdateResult::Handled(mount_page(state, state.page.next())),
        Action::Reload => UpdateResult::Handled(fetch(state)),
        Action::SelectNext => {
            move_selection(state, 1);
            UpdateResult::Handled(None)
        }
        Action::SelectPrev => {
            move_selection(state, -1);
            UpdateResult::Handled(None)
        }
        Action::ScrollDown(rows) => {
            if state.is_mounted() {
                state.scroll.scroll_down(*rows);
            }
            UpdateResult::Handled(None)
        }
        Action::ScrollUp(rows) => {
            if state.is_mounted() {
                state.scroll.scroll_up(*rows);
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Enters `page` with a fresh scope: local state reset, entities fetched.
///
/// Bumping the mount id both aborts the previous page's requests (the runtime
/// follows it) and marks any of their late results as stale.
pub fn mount_page(state: &mut AppState, page: PageKind) -> Option<Command> {
    if state.session.is_none() {
        debug!(?page, "cannot mount a page without a session");
        return None;
    }

    state.mount = state.mount.next();
    state.page = page;
    state.mode = AppMode::Normal;
    state.input = None;
    state.scroll.reset();
    state.pending_requests = 0;
    match page {
        PageKind::MyJobs => state.jobs = ListPage::default(),
        PageKind::MyProjects => state.projects = ListPage::default(),
        PageKind::Profile => state.profile = ProfilePage::default(),
        PageKind::Discover => state.discover = DiscoverPage::default(),
    }
    debug!(?page, mount = state.mount.0, "page mounted");

    fetch(state)
}

/// Loads the mounted page's entities.
pub fn fetch(state: &mut AppState) -> Option<Command> {
    if !state.is_mounted() {
        return None;
    }
    let session = state.session.clone()?;
    let request = match state.page {
        PageKind::Discover => ApiRequest::Discover(state.discover.query()),
        page => ApiRequest::Fetch(page),
    };
    state.pending_requests += 1;
    Some(Command::Api {
        mount: state.mount,
        session,
        request,
    })
}

fn move_selection(state: &mut AppState, delta: isize) {
    let (top, height) = match state.page {
        PageKind::MyJobs => {
            state.jobs.move_selection(delta);
            state.jobs.selected_offset()
        }
        PageKind::MyProjects => {
            state.projects.move_selection(delta);
            state.projects.selected_offset()
        }
        PageKind::Discover => {
            if let Some(thread) = &mut state.discover.thread {
                thread.move_selection(delta);
                return;
            }
            state.discover.list.move_selection(delta);
            state.discover.list.selected_offset()
        }
        PageKind::Profile => return,
    };
    state.scroll.reveal(top, height);
}
