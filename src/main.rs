use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing::{error, info};

use melt::app::{
    config::AppConfig, features::handler::Services, persistence::SessionStore,
    r#loop::run_loop, state::AppState,
};
use melt::infrastructure::{http_adapter::HttpAdapter, speech};
use melt::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail on bad config runs BEFORE terminal setup,
    // so an error never leaves the terminal in raw mode.
    let config = AppConfig::load()?.with_env();
    logging::init(&config)?;
    info!(api_url = %config.api_url, "starting");

    let api = Arc::new(HttpAdapter::new(&config.api_url)?);
    let sessions = SessionStore::default_location();
    let session = sessions.load();
    let voice = Arc::new(speech::recognition_adapter(&config.voice));

    let app_state = AppState::new(&config, session);
    let services = Services {
        api,
        voice,
        sessions,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("{err:#}");
        println!("{err:?}");
    }

    Ok(())
}
