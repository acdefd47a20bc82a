use super::*;
use crate::app::action::Action;
use crate::app::command::{ApiOutcome, ApiRequest, Command, ProjectQuery, RequestKind};
use crate::app::config::AppConfig;
use crate::app::fixtures;
use crate::app::persistence::SessionStore;
use crate::app::state::{AppMode, AppState, MountId, NotificationLevel, PageKind};
use crate::domain::api::{ApiError, MockMarketplaceApi};
use crate::domain::models::{EntityId, Session};
use crate::voice::RecognitionAdapter;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn services(mock: MockMarketplaceApi) -> Services {
    Services {
        api: Arc::new(mock),
        voice: Arc::new(RecognitionAdapter::disabled()),
        sessions: SessionStore::disabled(),
    }
}

fn api_command(request: ApiRequest) -> Command {
    Command::Api {
        mount: MountId(7),
        session: fixtures::session(),
        request,
    }
}

#[tokio::test]
async fn test_handle_command_fetch_success() {
    let mut mock = MockMarketplaceApi::new();
    mock.expect_my_jobs()
        .withf(|session: &Session| session.token == "token-123")
        .returning(|_| Ok(vec![fixtures::job("1"), fixtures::job("2")]));

    let (tx, mut rx) = mpsc::channel(1);
    let handles = handle_command(
        api_command(ApiRequest::Fetch(PageKind::MyJobs)),
        &services(mock),
        tx,
    );
    assert_eq!(handles.len(), 1);

    let action = rx.recv().await.unwrap();
    match action {
        Action::ApiCompleted(mount, Ok(ApiOutcome::Jobs(jobs))) => {
            assert_eq!(mount, MountId(7));
            assert_eq!(jobs.len(), 2);
        }
        other => panic!("Expected jobs, got {other:?}"),
    }
}

#[tokio::test]
async fn test_handle_command_error_propagation() {
    let mut mock = MockMarketplaceApi::new();
    mock.expect_delete_project()
        .with(
            mockall::predicate::always(),
            mockall::predicate::eq(EntityId::from("p1")),
        )
        .returning(|_, _| {
            Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        });

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        api_command(ApiRequest::Delete(
            PageKind::MyProjects,
            EntityId::from("p1"),
        )),
        &services(mock),
        tx,
    );

    match rx.recv().await.unwrap() {
        Action::ApiCompleted(_, Err(failure)) => {
            assert_eq!(failure.kind, RequestKind::Delete);
            assert_eq!(failure.page, PageKind::MyProjects);
            assert!(!failure.unauthorized);
            assert!(failure.message.contains("500"));
        }
        other => panic!("Expected a failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_profile_delete_ignores_entity_id() {
    let mut mock = MockMarketplaceApi::new();
    mock.expect_delete_user().times(1).returning(|_| Ok(()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        api_command(ApiRequest::Delete(PageKind::Profile, EntityId::from("u1"))),
        &services(mock),
        tx,
    );

    assert!(matches!(
        rx.recv().await.unwrap(),
        Action::ApiCompleted(_, Ok(ApiOutcome::Deleted(PageKind::Profile, _)))
    ));
}

#[tokio::test]
async fn test_title_search_without_hits_is_empty() {
    let mut mock = MockMarketplaceApi::new();
    mock.expect_projects_by_title()
        .withf(|_, term: &str| term == "zzz")
        .returning(|_, _| {
            Err(ApiError::Status {
                status: 404,
                body: "Project not found".to_string(),
            })
        });

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        api_command(ApiRequest::Discover(ProjectQuery::Title("zzz".to_string()))),
        &services(mock),
        tx,
    );

    match rx.recv().await.unwrap() {
        Action::ApiCompleted(_, Ok(ApiOutcome::Discovered(query, projects))) => {
            assert_eq!(query, ProjectQuery::Title("zzz".to_string()));
            assert!(projects.is_empty());
        }
        other => panic!("Expected an empty result, got {other:?}"),
    }
}

#[tokio::test]
async fn test_status_browse_failure_is_reported() {
    let mut mock = MockMarketplaceApi::new();
    mock.expect_projects_by_status().returning(|_, _| {
        Err(ApiError::Status {
            status: 404,
            body: String::new(),
        })
    });

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        api_command(ApiRequest::Discover(ProjectQuery::Status(vec![
            "Completed".to_string(),
        ]))),
        &services(mock),
        tx,
    );

    match rx.recv().await.unwrap() {
        Action::ApiCompleted(_, Err(failure)) => {
            assert_eq!(failure.kind, RequestKind::Fetch);
            assert_eq!(failure.page, PageKind::Discover);
        }
        other => panic!("Expected a failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_add_review_sends_project_and_comment() {
    let mut mock = MockMarketplaceApi::new();
    mock.expect_add_review()
        .withf(|_, project: &EntityId, comment: &str| {
            project == &EntityId::from("p1") && comment == "Nice"
        })
        .times(1)
        .returning(|_, _, comment| {
            let mut review = fixtures::review("r9");
            review.comment = comment.to_string();
            Ok(review)
        });

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        api_command(ApiRequest::AddReview {
            project: EntityId::from("p1"),
            comment: "Nice".to_string(),
        }),
        &services(mock),
        tx,
    );

    match rx.recv().await.unwrap() {
        Action::ApiCompleted(_, Ok(ApiOutcome::ReviewAdded(review))) => {
            assert_eq!(review.id, EntityId::from("r9"));
            assert_eq!(review.comment, "Nice");
        }
        other => panic!("Expected the new comment, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_rejection_message() {
    let mut mock = MockMarketplaceApi::new();
    mock.expect_login()
        .returning(|_, _| Err(ApiError::Unauthorized));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Login {
            email: "ann@example.com".to_string(),
            password: "wrong".to_string(),
        },
        &services(mock),
        tx,
    );

    assert_eq!(
        rx.recv().await.unwrap(),
        Action::LoginFailed("Invalid email or password.".to_string())
    );
}

#[tokio::test]
async fn test_full_command_error_to_state() {
    let mut mock = MockMarketplaceApi::new();
    mock.expect_update_job()
        .returning(|_, _, _| Err(ApiError::Unauthorized));

    let services = services(mock);
    let (tx, mut rx) = mpsc::channel(2);
    let mut state = fixtures::jobs_state(&["1"]);

    crate::app::reducer::update(&mut state, Action::BeginEdit(None));
    let command = crate::app::reducer::update(&mut state, Action::SaveEdit).unwrap();
    handle_command(command, &services, tx);

    let action = rx.recv().await.unwrap();
    let command = crate::app::reducer::update(&mut state, action);

    // A rejected token ends the session instead of reporting a save error.
    assert_eq!(command, Some(Command::StoreSession(None)));
    assert_eq!(state.mode, AppMode::Login);
    assert_eq!(state.notifications.count(NotificationLevel::Error), 1);
    assert!(state
        .notifications
        .history()
        .any(|n| n.body.contains("session has expired")));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockMarketplaceApi::new();
    // Every endpoint succeeds so the fuzzer reaches every screen
    mock.expect_login()
        .returning(|_, _| Ok(fixtures::session()));
    mock.expect_my_jobs()
        .returning(|_| Ok((1..=5).map(|i| fixtures::job(&i.to_string())).collect()));
    mock.expect_update_job()
        .returning(|_, id, _| Ok(fixtures::job(&id.0)));
    mock.expect_delete_job().returning(|_, _| Ok(()));
    mock.expect_my_projects()
        .returning(|_| Ok((1..=3).map(|i| fixtures::project(&i.to_string())).collect()));
    mock.expect_update_project()
        .returning(|_, id, _| Ok(fixtures::project(&id.0)));
    mock.expect_delete_project().returning(|_, _| Ok(()));
    mock.expect_my_user().returning(|_| Ok(fixtures::user()));
    mock.expect_update_user().returning(|_, _| Ok(fixtures::user()));
    mock.expect_delete_user().returning(|_| Ok(()));
    mock.expect_all_projects()
        .returning(|_| Ok((1..=4).map(|i| fixtures::project(&format!("d{i}"))).collect()));
    mock.expect_projects_by_status()
        .returning(|_, _| Ok(vec![fixtures::project("s1")]));
    mock.expect_projects_by_title()
        .returning(|_, _| Err(ApiError::Status {
            status: 404,
            body: "Project not found".to_string(),
        }));
    mock.expect_project_reviews()
        .returning(|_, _| Ok(vec![fixtures::review("r1"), fixtures::review("r2")]));
    mock.expect_add_review()
        .returning(|_, _, comment| {
            let mut review = fixtures::review("r3");
            review.comment = comment.to_string();
            Ok(review)
        });
    mock.expect_update_review().returning(|_, _, _| Ok(()));
    mock.expect_delete_review().returning(|_, _| Ok(()));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::new(&AppConfig::default(), Some(fixtures::session()));

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Ctrl-C quits from every mode
        let _ = event_tx
            .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, services(mock), event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::KeyEvent;
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.05) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
