use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Guard against superseded fetches mutating current state: each page
/// load takes a token, and starting a newer load invalidates every
/// earlier token. A late resolution carrying a stale token is dropped
/// instead of being applied.
#[derive(Debug, Default)]
pub struct FetchCoordinator {
    generation: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    generation: u64,
}

impl FetchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding all outstanding tokens.
    pub fn begin(&self) -> FetchToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        FetchToken { generation }
    }

    pub fn is_current(&self, token: &FetchToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation
    }

    /// Pass a resolved value through only when its token is still the
    /// newest one; a superseded result is discarded.
    pub fn accept<T>(&self, token: &FetchToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            debug!("Discarding superseded fetch (generation {})", token.generation);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_token_is_accepted() {
        let coordinator = FetchCoordinator::new();
        let token = coordinator.begin();
        assert!(coordinator.is_current(&token));
        assert_eq!(coordinator.accept(&token, 42), Some(42));
    }

    #[test]
    fn test_new_load_supersedes_older_tokens() {
        let coordinator = FetchCoordinator::new();
        let first = coordinator.begin();
        let second = coordinator.begin();

        assert!(!coordinator.is_current(&first));
        assert!(coordinator.is_current(&second));
        assert_eq!(coordinator.accept(&first, "stale"), None);
        assert_eq!(coordinator.accept(&second, "fresh"), Some("fresh"));
    }
}
