//! In-memory session token store
//!
//! Holds zero or one [`TokenSet`] for the whole process behind an async
//! read/write lock. The store is shared through the application context so
//! every request handler sees the same slot; concurrent logins resolve to
//! last-writer-wins under the exclusive write lock.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::types::TokenSet;

/// Process-wide holder of the current session token.
pub struct TokenStore {
    current: RwLock<Option<TokenSet>>,
    clock: Arc<dyn Clock>,
}

impl TokenStore {
    /// Create an empty store driven by the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store with an injected clock (tests use a manual one).
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { current: RwLock::new(None), clock }
    }

    /// Store a new token, replacing any existing one.
    ///
    /// The absolute expiry is computed here, `clock.now() + expires_in`, so
    /// every later validity check compares against a fixed instant rather
    /// than a counter that could drift.
    pub async fn set(
        &self,
        access_token: String,
        refresh_token: Option<String>,
        expires_in: i64,
    ) {
        let tokens = TokenSet::new(access_token, refresh_token, expires_in, self.clock.now());
        *self.current.write().await = Some(tokens);
        info!("Session token stored");
    }

    /// Raw slot contents, without any validity check.
    ///
    /// Callers that need a usable token must go through [`Self::current`];
    /// this accessor exists for diagnostics and for the expiry check itself.
    pub async fn get(&self) -> Option<TokenSet> {
        self.current.read().await.clone()
    }

    /// The current token, only while it is still valid.
    ///
    /// Returns `None` when the slot is empty or when the stored token has
    /// expired; a stale token that is still physically present reads as
    /// absent. No refresh is attempted.
    pub async fn current(&self) -> Option<TokenSet> {
        let now = self.clock.now();
        let guard = self.current.read().await;
        match guard.as_ref() {
            Some(tokens) if !tokens.is_expired(now) => Some(tokens.clone()),
            Some(_) => {
                debug!("Stored session token has expired");
                None
            }
            None => None,
        }
    }

    /// Whether a valid token is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.current().await.is_some()
    }

    /// Remove the token (logout).
    pub async fn clear(&self) {
        *self.current.write().await = None;
        info!("Session token cleared");
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for auth::store.
    use chrono::Duration;

    use super::*;
    use crate::testing::ManualClock;

    fn manual_store() -> (TokenStore, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let store = TokenStore::with_clock(clock.clone());
        (store, clock)
    }

    #[tokio::test]
    async fn test_empty_store_is_unauthenticated() {
        let (store, _clock) = manual_store();
        assert!(store.get().await.is_none());
        assert!(store.current().await.is_none());
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_token_valid_before_ttl_elapses() {
        let (store, clock) = manual_store();
        store.set("tok".to_string(), None, 3600).await;

        clock.advance(Duration::seconds(1800));
        let tokens = store.current().await;
        assert_eq!(tokens.map(|t| t.access_token), Some("tok".to_string()));
    }

    #[tokio::test]
    async fn test_token_expired_at_ttl() {
        let (store, clock) = manual_store();
        store.set("tok".to_string(), None, 3600).await;

        clock.advance(Duration::seconds(3600));
        assert!(store.current().await.is_none());
        // The stale token is still physically present
        assert!(store.get().await.is_some());
    }

    #[tokio::test]
    async fn test_token_expired_after_ttl() {
        let (store, clock) = manual_store();
        store.set("tok".to_string(), None, 60).await;

        clock.advance(Duration::seconds(61));
        assert!(store.current().await.is_none());
        assert!(!store.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_clear_reports_unauthenticated_regardless_of_prior_state() {
        let (store, _clock) = manual_store();
        store.set("tok".to_string(), Some("refresh".to_string()), 3600).await;
        assert!(store.is_authenticated().await);

        store.clear().await;
        assert!(store.current().await.is_none());
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_existing_token() {
        let (store, _clock) = manual_store();
        store.set("first".to_string(), None, 3600).await;
        store.set("second".to_string(), None, 3600).await;

        let tokens = store.current().await;
        assert_eq!(tokens.map(|t| t.access_token), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_expiry_is_anchored_at_set_time() {
        let (store, clock) = manual_store();
        clock.advance(Duration::seconds(1000));
        store.set("tok".to_string(), None, 60).await;

        clock.advance(Duration::seconds(59));
        assert!(store.current().await.is_some());
        clock.advance(Duration::seconds(1));
        assert!(store.current().await.is_none());
    }
}
