use std::time::{Duration, Instant};

use tracing::debug;

use super::mode::Mode;
use crate::shorten::{GENERIC_ERROR_MESSAGE, ShortLink, ShortenError};
use crate::ui::theme::Theme;
use crate::utils::unicode::{next_char_boundary, prev_char_boundary};

/// What the result area currently shows.
///
/// A single enum rather than two optional strings: a short URL and an error
/// message can never be on screen at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

pub struct AppState {
    pub long_url: String,
    /// Byte offset into `long_url`, always on a char boundary.
    pub input_cursor: usize,
    pub mode: Mode,
    pub outcome: Outcome,
    pub in_flight: bool,
    /// Bumped on every submission; results carrying an older value are stale.
    pub submit_seq: u64,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub status_message: Option<(String, Instant)>,
    pub status_message_secs: u64,
}

impl AppState {
    pub fn new(theme: Theme, status_message_secs: u64) -> Self {
        Self {
            long_url: String::new(),
            input_cursor: 0,
            mode: Mode::default(),
            outcome: Outcome::default(),
            in_flight: false,
            submit_seq: 0,
            should_quit: false,
            show_help: false,
            theme,
            status_message: None,
            status_message_secs,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.long_url.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = prev_char_boundary(&self.long_url, self.input_cursor);
            self.long_url.remove(prev);
            self.input_cursor = prev;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.input_cursor = prev_char_boundary(&self.long_url, self.input_cursor);
    }

    pub fn move_cursor_right(&mut self) {
        self.input_cursor = next_char_boundary(&self.long_url, self.input_cursor);
    }

    pub fn move_cursor_home(&mut self) {
        self.input_cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.input_cursor = self.long_url.len();
    }

    /// Start a submission: clear any previous result, mark the request
    /// in flight, and hand back the sequence number and URL to dispatch.
    ///
    /// Returns `None` for empty input, in which case nothing changes and no
    /// request must be issued.
    pub fn begin_submit(&mut self) -> Option<(u64, String)> {
        if self.long_url.trim().is_empty() {
            return None;
        }

        self.outcome = Outcome::Idle;
        self.in_flight = true;
        self.submit_seq += 1;
        Some((self.submit_seq, self.long_url.clone()))
    }

    /// Apply a finished submission. Results from a superseded submission are
    /// discarded so that the most recently submitted request always wins.
    pub fn apply_submit_result(&mut self, seq: u64, result: Result<ShortLink, ShortenError>) {
        if seq != self.submit_seq {
            debug!(seq, current = self.submit_seq, "discarding stale submit result");
            return;
        }

        self.in_flight = false;
        self.outcome = match result {
            Ok(short) => Outcome::Success(short.link),
            Err(e) => {
                debug!(error = %e, "submission failed");
                Outcome::Error(GENERIC_ERROR_MESSAGE.to_string())
            }
        };
    }

    pub fn short_url(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(link) => Some(link),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        let expired = self.status_message.as_ref().is_some_and(|(_, shown_at)| {
            shown_at.elapsed() > Duration::from_secs(self.status_message_secs)
        });
        if expired {
            self.status_message = None;
        }
    }
}
