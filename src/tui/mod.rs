pub mod state;
pub mod view;

use crate::client::ScheduleClient;
use crate::config::Config;
use crate::feed::ScheduleFeed;
use crate::tui::state::{AppState, Tab};
use crate::tui::view::draw;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

pub async fn run() -> Result<()> {
    // Panic Hook: raw mode eats the default backtrace, keep a trace on disk
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("spielplan_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let config = Config::load().unwrap_or_default();
    let client = ScheduleClient::new(&config.base_url).map_err(anyhow::Error::msg)?;

    // The feed starts fetching immediately; we just watch the slot.
    let feed = ScheduleFeed::new(client);
    let mut rx = feed.subscribe();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new();

    loop {
        // The today view depends on the wall clock, so rebuild it per frame.
        app_state.recalculate_view();
        terminal.draw(|f| draw(f, &mut app_state))?;

        // 1. Apply feed updates (last-write-wins, no queue)
        if rx.has_changed().unwrap_or(false) {
            let state = rx.borrow_and_update().clone();
            app_state.apply(state);
        }

        // 2. Process User Input
        if crossterm::event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },

                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,

                    KeyCode::Char('r') => {
                        let _ = feed.refresh();
                    }

                    KeyCode::Tab => app_state.next_tab(),
                    KeyCode::Char('1') => app_state.set_tab(Tab::Today),
                    KeyCode::Char('2') => app_state.set_tab(Tab::Schedule),
                    KeyCode::Char('3') => app_state.set_tab(Tab::Imprint),

                    // Navigation
                    KeyCode::Down | KeyCode::Char('j') => app_state.next(),
                    KeyCode::Up | KeyCode::Char('k') => app_state.previous(),
                    KeyCode::PageDown => app_state.jump_forward(10),
                    KeyCode::PageUp => app_state.jump_backward(10),

                    // Links
                    KeyCode::Char('t') => {
                        let url = app_state
                            .selected_performance()
                            .and_then(|p| p.tickets_uri.clone());
                        if let Some(url) = url {
                            app_state.open_link(&url, "Tickets");
                        }
                    }
                    KeyCode::Char('o') | KeyCode::Enter => {
                        let url = app_state
                            .selected_performance()
                            .and_then(|p| p.details_url());
                        if let Some(url) = url {
                            app_state.open_link(&url, "Details");
                        }
                    }

                    _ => {}
                },

                _ => {} // Resize is handled by the next draw
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
