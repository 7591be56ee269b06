mod app;
mod config;
mod effects;
mod i18n;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::descriptor;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::effects::EffectsManager;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let cfg = config::load_config()?;

    // Descriptor mode: print the tooling-facing JSON and leave the
    // terminal alone.
    if std::env::args().any(|a| a == "--describe") {
        println!("{}", descriptor::render(&cfg)?);
        return Ok(());
    }

    logging::init(&cfg.logging);

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
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
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());
    let effects = EffectsManager::new(event_tx.clone(), cfg.effects.clone());

    let size = terminal.size()?;
    state.term_size = (size.width, size.height);

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

    // Spawn tick task (default 50ms = 20 FPS)
    let tick_tx = event_tx.clone();
    let tick_rate = std::time::Duration::from_millis(cfg.ui.tick_rate_ms.max(10));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Kick off the locale bundle load for the configured language
    if let Some(tag) = cfg.ui.locale.clone() {
        match state.localizer.bundle_path(&tag) {
            Ok(path) => {
                let locale_tx = event_tx.clone();
                tokio::spawn(async move {
                    match i18n::read_bundle(&path) {
                        Ok(table) => {
                            let _ = locale_tx.send(AppEvent::LocaleLoaded { tag, table });
                        }
                        Err(e) => tracing::warn!("locale bundle load failed: {e}"),
                    }
                });
            }
            Err(e) => tracing::warn!("using built-in strings: {e}"),
        }
    }

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::TriggerCelebration => effects.make_it_rain(),
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
