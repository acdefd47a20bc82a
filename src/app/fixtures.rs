use crate::app::state::{AppMode, AppState, PageKind};
use crate::domain::models::{EntityId, Job, Project, Review, Role, Session, User};

pub fn job(id: &str) -> Job {
    Job {
        id: EntityId::from(id),
        company: format!("Company {id}"),
        position: "Backend Engineer".to_string(),
        location: "Remote".to_string(),
        role: "Engineering".to_string(),
        level: "Senior".to_string(),
        experience: "5 years".to_string(),
        salary: "120000".to_string(),
        posted: "2024-03-01".to_string(),
    }
}

pub fn project(id: &str) -> Project {
    Project {
        id: EntityId::from(id),
        project_title: format!("Project {id}"),
        project_description: "Voice portfolio".to_string(),
        project_status: "active".to_string(),
        upload_date: "2024-03-05T10:00:00.000Z".to_string(),
        user_id: "u1".to_string(),
    }
}

pub fn review(id: &str) -> Review {
    Review {
        id: EntityId::from(id),
        comment: format!("Comment {id}"),
        user_id: "u2".to_string(),
        project_id: String::new(),
    }
}

pub fn user() -> User {
    User {
        id: EntityId::from("u1"),
        role: Role::Individual,
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "ann@example.com".to_string(),
        skills: vec!["rust".to_string()],
        ..User::default()
    }
}

pub fn session() -> Session {
    Session {
        token: "token-123".to_string(),
        user: user(),
    }
}

fn signed_in(page: PageKind) -> AppState {
    let mut state = AppState::default();
    state.session = Some(session());
    state.mode = AppMode::Normal;
    state.page = page;
    state
}

/// Signed in, MyJobs mounted and loaded with jobs `ids` in order.
pub fn jobs_state(ids: &[&str]) -> AppState {
    let mut state = signed_in(PageKind::MyJobs);
    state.jobs.set_items(ids.iter().map(|id| job(id)).collect());
    state
}

pub fn projects_state(ids: &[&str]) -> AppState {
    let mut state = signed_in(PageKind::MyProjects);
    state
        .projects
        .set_items(ids.iter().map(|id| project(id)).collect());
    state
}

pub fn profile_state() -> AppState {
    let mut state = signed_in(PageKind::Profile);
    state.profile.set_user(user());
    state
}

/// Signed in, Discover mounted and loaded with projects `ids` in order.
pub fn discover_state(ids: &[&str]) -> AppState {
    let mut state = signed_in(PageKind::Discover);
    state
        .discover
        .list
        .set_items(ids.iter().map(|id| project(id)).collect());
    state
}
