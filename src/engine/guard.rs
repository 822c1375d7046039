use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies one outstanding search. Only the most recently issued token of
/// a session is ever admitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token(u64);

/// Per-session record of the latest issued token. Zero means nothing has
/// been issued yet.
#[derive(Debug, Default)]
pub struct SearchState {
    latest_token: AtomicU64,
}

#[derive(Clone, Debug)]
pub struct StaleRequestGuard {
    state: Arc<SearchState>,
}

impl StaleRequestGuard {
    pub fn new(state: Arc<SearchState>) -> Self {
        Self { state }
    }

    /// Issues a fresh token and makes it the only current one.
    pub fn issue(&self) -> Token {
        Token(self.state.latest_token.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is still the latest issued token.
    pub fn accept(&self, token: Token) -> bool {
        self.state.latest_token.load(Ordering::SeqCst) == token.0
    }
}
