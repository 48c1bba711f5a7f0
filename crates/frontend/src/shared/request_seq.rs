//! Request generation tokens.
//!
//! Every outgoing request takes a token from a [`RequestSeq`]; a response is
//! applied only if its token is still the latest one issued. Older responses
//! that resolve late are dropped.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }

    /// Makes every outstanding token stale
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// Result of feeding a response back into a state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// A newer request superseded this one; nothing changed
    Stale,
    Applied,
    /// Applied as a failure; carries the message to surface
    Failed(String),
}

impl ResponseOutcome {
    pub fn error(&self) -> Option<&str> {
        match self {
            ResponseOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}
