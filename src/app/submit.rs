use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Handle;

use crate::shorten::{ShortLink, ShortenError, ShortenService};

/// A finished submission, tagged with the sequence number it was issued
/// under so the receiver can discard superseded results.
pub struct SubmitOutcome {
    pub seq: u64,
    pub result: Result<ShortLink, ShortenError>,
}

/// Fires shorten requests on the tokio runtime and delivers their results
/// back to the UI thread over a channel.
///
/// Dropping the receiving end (UI teardown) is fine: a late resolution's
/// send simply fails and the result is dropped.
pub struct SubmitDispatcher {
    service: Arc<dyn ShortenService>,
    handle: Handle,
    tx: mpsc::Sender<SubmitOutcome>,
}

impl SubmitDispatcher {
    pub fn new(
        service: Arc<dyn ShortenService>,
        handle: Handle,
        tx: mpsc::Sender<SubmitOutcome>,
    ) -> Self {
        Self {
            service,
            handle,
            tx,
        }
    }

    /// Exactly one outbound call per invocation; no retry.
    pub fn dispatch(&self, seq: u64, long_url: String) {
        let service = Arc::clone(&self.service);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let result = service.shorten(&long_url).await;
            let _ = tx.send(SubmitOutcome { seq, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppState, Outcome};
    use crate::shorten::GENERIC_ERROR_MESSAGE;
    use crate::ui::theme::Theme;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    /// Scripted stand-in for the shortening service.
    struct ScriptedService {
        response: Result<String, ()>,
        delay: Duration,
    }

    impl ScriptedService {
        fn ok(link: &str) -> Self {
            Self {
                response: Ok(link.to_string()),
                delay: Duration::ZERO,
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(()),
                delay: Duration::ZERO,
            }
        }
    }

    #[async_trait]
    impl ShortenService for ScriptedService {
        async fn shorten(&self, _long_url: &str) -> Result<ShortLink, ShortenError> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            match &self.response {
                Ok(link) => Ok(ShortLink { link: link.clone() }),
                Err(()) => Err(ShortenError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)),
            }
        }
    }

    fn submit_through(
        service: ScriptedService,
        long_url: &str,
    ) -> AppState {
        let runtime = Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel();
        let dispatcher = SubmitDispatcher::new(Arc::new(service), runtime.handle().clone(), tx);

        let mut state = AppState::new(Theme::default_theme(), 2);
        for c in long_url.chars() {
            state.insert_char(c);
        }

        let (seq, url) = state.begin_submit().unwrap();
        dispatcher.dispatch(seq, url);

        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        state.apply_submit_result(outcome.seq, outcome.result);
        state
    }

    #[test]
    fn test_successful_submission_displays_the_returned_link() {
        let state = submit_through(
            ScriptedService::ok("https://bit.ly/abc123"),
            "https://example.com/a/very/long/path",
        );

        assert_eq!(state.short_url(), Some("https://bit.ly/abc123"));
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_failed_submission_displays_the_generic_message() {
        let state = submit_through(ScriptedService::failing(), "https://example.com");

        assert_eq!(state.error_message(), Some(GENERIC_ERROR_MESSAGE));
        assert_eq!(state.short_url(), None);
    }

    #[test]
    fn test_resubmission_supersedes_a_slow_first_request() {
        let runtime = Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel();

        let slow = ScriptedService {
            response: Ok("https://bit.ly/slow".to_string()),
            delay: Duration::from_millis(200),
        };
        let fast = ScriptedService::ok("https://bit.ly/fast");

        let slow_dispatcher =
            SubmitDispatcher::new(Arc::new(slow), runtime.handle().clone(), tx.clone());
        let fast_dispatcher = SubmitDispatcher::new(Arc::new(fast), runtime.handle().clone(), tx);

        let mut state = AppState::new(Theme::default_theme(), 2);
        for c in "https://example.com".chars() {
            state.insert_char(c);
        }

        let (first_seq, url) = state.begin_submit().unwrap();
        slow_dispatcher.dispatch(first_seq, url);
        let (second_seq, url) = state.begin_submit().unwrap();
        fast_dispatcher.dispatch(second_seq, url);

        for _ in 0..2 {
            let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
            state.apply_submit_result(outcome.seq, outcome.result);
        }

        assert_eq!(state.short_url(), Some("https://bit.ly/fast"));
        assert_eq!(state.outcome, Outcome::Success("https://bit.ly/fast".to_string()));
    }

    #[test]
    fn test_a_dropped_receiver_does_not_panic_the_task() {
        let runtime = Runtime::new().unwrap();
        let (tx, rx) = mpsc::channel();
        let dispatcher = SubmitDispatcher::new(
            Arc::new(ScriptedService::ok("https://bit.ly/abc123")),
            runtime.handle().clone(),
            tx,
        );

        drop(rx);
        dispatcher.dispatch(1, "https://example.com".to_string());

        // Give the task time to resolve against the closed channel.
        std::thread::sleep(Duration::from_millis(50));
    }
}
