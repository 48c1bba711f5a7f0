//! Debounced, de-duplicated text input.
//!
//! Each keystroke takes a ticket and schedules [`DebouncedTerm::settle`] after the
//! debounce delay. Only the last ticket within the window settles, and a term equal
//! to the previously settled one is swallowed.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use super::request_seq::RequestSeq;

#[derive(Debug, Clone, Default)]
pub struct DebouncedTerm {
    seq: RequestSeq,
    settled: String,
}

impl DebouncedTerm {
    /// Registers a keystroke; the returned ticket supersedes all earlier ones.
    pub fn input(&mut self) -> u64 {
        self.seq.issue()
    }

    /// Returns the term to apply, if `ticket` is still the latest and the term changed.
    pub fn settle(&mut self, ticket: u64, term: &str) -> Option<String> {
        if !self.seq.is_current(ticket) || term == self.settled {
            return None;
        }
        self.settled = term.to_string();
        Some(self.settled.clone())
    }

    /// Drops pending tickets and records `term` as already applied.
    pub fn reset(&mut self, term: &str) {
        self.seq.invalidate();
        self.settled = term.to_string();
    }

    pub fn settled(&self) -> &str {
        &self.settled
    }
}

/// Runs `on_elapsed` after `delay_ms` on the local executor.
pub fn after_delay<F>(delay_ms: u32, on_elapsed: F)
where
    F: FnOnce() + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        on_elapsed();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_keystroke_settles() {
        let mut term = DebouncedTerm::default();
        let a = term.input();
        let b = term.input();
        let c = term.input();
        assert_eq!(term.settle(a, "a"), None);
        assert_eq!(term.settle(b, "ab"), None);
        assert_eq!(term.settle(c, "abc").as_deref(), Some("abc"));
    }

    #[test]
    fn test_repeated_term_is_swallowed() {
        let mut term = DebouncedTerm::default();
        let first = term.input();
        assert_eq!(term.settle(first, "ali").as_deref(), Some("ali"));
        // typed a character and deleted it again within the window
        let second = term.input();
        assert_eq!(term.settle(second, "ali"), None);
        assert_eq!(term.settled(), "ali");
    }

    #[test]
    fn test_reset_cancels_pending() {
        let mut term = DebouncedTerm::default();
        let pending = term.input();
        term.reset("");
        assert_eq!(term.settle(pending, "late"), None);
        let next = term.input();
        assert_eq!(term.settle(next, ""), None);
    }
}
