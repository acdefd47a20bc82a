use crate::app::{
    action::Action,
    features::handler::{handle_command, Services},
    input::map_event_to_action,
    reducer,
    scope::PageScope,
    state::{AppState, PageKind},
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::info;

// Fast enough for the eased scroll to look smooth.
const TICK_RATE: Duration = Duration::from_millis(50);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    services: Services,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    services: Services,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let mut scope = PageScope::new(app_state.mount);

    services.voice.start(action_tx.clone());

    // Initial mount for a restored session
    if app_state.session.is_some() {
        if let Some(command) = reducer::update(&mut app_state, Action::MountPage(PageKind::MyJobs))
        {
            scope.follow(app_state.mount);
            scope.track(handle_command(command, &services, action_tx.clone()));
        }
    }

    loop {
        // --- 1. Sync voice with the mount state ---
        services.voice.set_listening(app_state.is_mounted());
        app_state.voice.state = services.voice.state();

        // --- 2. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 3. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state)
            },

            // Async Results (API, login, speech)
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 4. Update (Reducer) ---
        let Some(action) = action else {
            continue;
        };
        if let Action::Quit = action {
            break;
        }

        let command = reducer::update(&mut app_state, action);

        // Leaving a mount cancels whatever it still had in flight.
        scope.follow(app_state.mount);

        if app_state.should_quit {
            break;
        }

        if let Some(command) = command {
            scope.track(handle_command(command, &services, action_tx.clone()));
        }
    }

    scope.abort();
    services.voice.unmount();
    info!("event loop finished");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
