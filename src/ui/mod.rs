pub mod components;
pub mod theme;

use crate::app::{AppState, SubmitDispatcher, SubmitOutcome, event::handle_key_event};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::sync::mpsc;
use std::time::Duration;

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = stdout.flush();
    }
}

pub fn run_tui(
    mut state: AppState,
    dispatcher: SubmitDispatcher,
    submit_rx: mpsc::Receiver<SubmitOutcome>,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut state, &dispatcher, submit_rx);
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    dispatcher: &SubmitDispatcher,
    submit_rx: mpsc::Receiver<SubmitOutcome>,
) -> Result<()> {
    loop {
        state.clear_expired_status_message();

        terminal.draw(|f| {
            components::render(f, state);
        })?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key_event(key, state, dispatcher)?;
        }

        // Results from the shortening service arrive between redraws.
        // Stale ones are discarded inside apply_submit_result.
        while let Ok(outcome) = submit_rx.try_recv() {
            state.apply_submit_result(outcome.seq, outcome.result);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
