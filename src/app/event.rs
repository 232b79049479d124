use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::mode::Mode;
use super::state::AppState;
use super::submit::SubmitDispatcher;
use crate::clipboard;

pub fn handle_key_event(
    key: KeyEvent,
    state: &mut AppState,
    dispatcher: &SubmitDispatcher,
) -> Result<()> {
    // Ctrl+C quits from either mode.
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        state.should_quit = true;
        return Ok(());
    }

    match state.mode {
        Mode::Insert => handle_insert_mode(key, state, dispatcher),
        Mode::Normal => handle_normal_mode(key, state, dispatcher),
    }
    Ok(())
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState, dispatcher: &SubmitDispatcher) {
    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            submit(state, dispatcher);
        }
        KeyCode::Backspace => {
            state.backspace();
        }
        KeyCode::Left => {
            state.move_cursor_left();
        }
        KeyCode::Right => {
            state.move_cursor_right();
        }
        KeyCode::Home => {
            state.move_cursor_home();
        }
        KeyCode::End => {
            state.move_cursor_end();
        }
        KeyCode::Char(c) => {
            state.insert_char(c);
        }
        _ => {}
    }
}

fn handle_normal_mode(key: KeyEvent, state: &mut AppState, dispatcher: &SubmitDispatcher) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Enter => {
            state.mode = Mode::Insert;
        }
        KeyCode::Char('s') => {
            submit(state, dispatcher);
        }
        KeyCode::Char('y') => {
            copy_short_url(state);
        }
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        _ => {}
    }
}

fn submit(state: &mut AppState, dispatcher: &SubmitDispatcher) {
    // Empty input never reaches the network.
    if let Some((seq, long_url)) = state.begin_submit() {
        dispatcher.dispatch(seq, long_url);
    }
}

/// Only meaningful while a short URL is on screen; the key is a no-op
/// otherwise.
fn copy_short_url(state: &mut AppState) {
    let Some(short_url) = state.short_url().map(str::to_string) else {
        return;
    };

    match clipboard::copy_to_clipboard(&short_url) {
        Ok(()) => state.set_status_message("Copied the short URL to the clipboard!"),
        Err(e) => state.set_status_message(format!("Copy failed: {e}")),
    }
}
