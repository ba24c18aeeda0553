mod app;
mod config;
mod data;
mod logging;
mod session;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::data::loader::{FetchManager, Sources};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// How the dashboard was left.
enum Exit {
    Quit,
    SignedOut(Option<String>),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        info!(path = %path.display(), "logging to file");
    }

    // The session lives for the whole run and is handed to whoever needs it.
    let mut session = Session::from_config(&cfg.session);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg, &mut session).await;

    // Restore terminal
    restore_terminal()?;

    match result {
        Ok(Exit::SignedOut(name)) => match name {
            Some(name) => println!("Signed out of TravelHub. Goodbye, {}!", name),
            None => println!("Signed out of TravelHub."),
        },
        Ok(Exit::Quit) => {}
        Err(e) => {
            error!(error = %e, "dashboard exited with an error");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    session: &mut Session,
) -> Result<Exit> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(1));
    let mut fetches = FetchManager::new(Sources::from_config(&cfg.data), event_tx.clone());
    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Mount the default tab
    let mut pending = vec![state.mount_action()];
    let mut exit = Exit::Quit;

    // Initial render
    terminal.draw(|f| ui::render(f, &state, session))?;

    loop {
        for action in pending.drain(..) {
            match action {
                Action::MountView { tab, mount_id } => {
                    fetches.mount(tab, mount_id);
                }
                Action::ViewTripDetails {
                    trip_id,
                    destination,
                } => {
                    info!(trip_id = %trip_id, "view details requested");
                    state.set_status(format!(
                        "Trip details for {} are not available yet",
                        destination
                    ));
                }
                Action::ExploreDestination {
                    suggestion_id,
                    destination,
                } => {
                    info!(suggestion_id = %suggestion_id, "explore destination requested");
                    state.set_status(format!(
                        "Exploring {} is not available yet",
                        destination
                    ));
                }
                Action::Logout => {
                    fetches.unmount();
                    let user = session.logout();
                    exit = Exit::SignedOut(user.map(|u| u.name));
                    state.should_quit = true;
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            if fetches.is_fetching() {
                info!("leaving with a fetch in flight");
            }
            fetches.unmount();
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state, session))?;
            state.dirty = false;
        }

        let Some(event) = event_rx.recv().await else {
            break;
        };
        pending = handler::handle_event(&mut state, event);
    }

    Ok(exit)
}
