mod app;
mod config;
mod logging;
mod prompter;
mod store;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::prompter::ScrollTimer;
use crate::store::prefs::Preferences;
use crate::store::ScriptStore;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

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
    logging::init(&cfg.logging)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
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
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let store = ScriptStore::open(cfg.storage.store_dir())?;
    tracing::info!(dir = %store.dir().display(), "script store opened");
    let mut state = AppState::new(cfg);
    let mut scroll_timer = ScrollTimer::new();

    // Initial load. Storage failures never crash the UI; they surface on
    // the status bar and leave the in-memory state at its defaults.
    match store.list_scripts() {
        Ok(scripts) => state.set_scripts(scripts),
        Err(e) => state.error_status(format!("Failed to load scripts: {}", e)),
    }
    match Preferences::load(&store) {
        Ok(prefs) => state.prefs = prefs,
        Err(e) => state.error_status(format!("Failed to load settings: {}", e)),
    }

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

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::SaveScript { text } => match store.add_script(&text) {
                    Ok(scripts) => {
                        state.set_scripts(scripts);
                        state.status("Script saved");
                    }
                    Err(e) => state.error_status(format!("Save failed: {}", e)),
                },
                Action::DeleteScript { index } => match store.remove_script(index) {
                    Ok(scripts) => {
                        state.set_scripts(scripts);
                        state.status("Script deleted");
                    }
                    Err(e) => state.error_status(format!("Delete failed: {}", e)),
                },
                Action::SavePreferences {
                    font_size,
                    scroll_speed,
                } => {
                    let prefs = Preferences {
                        font_size,
                        scroll_speed,
                    };
                    match prefs.save(&store) {
                        Ok(()) => {
                            state.prefs = prefs;
                            state.status("Settings saved");
                        }
                        Err(e) => state.error_status(format!("Settings save failed: {}", e)),
                    }
                }
                Action::StartScrolling => scroll_timer.arm(event_tx.clone()),
                Action::StopScrolling => scroll_timer.disarm(),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
