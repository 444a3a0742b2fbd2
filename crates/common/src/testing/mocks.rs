//! Mock implementations of common traits
//!
//! Provides mock objects for testing purposes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::auth::client::AuthClientError;
use crate::auth::clock::Clock;
use crate::auth::traits::AuthorizationFlow;
use crate::auth::types::TokenResponse;

/// Manually driven clock for deterministic expiry tests
///
/// Starts at a fixed epoch and only moves when the test advances it.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock pinned to `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(start) }
    }

    /// Move the clock forward.
    pub fn advance(&self, delta: Duration) {
        // Mutex poisoning is acceptable in test mocks; a panicking test has
        // already failed.
        #[allow(clippy::unwrap_used)]
        let mut guard = self.now.lock().unwrap();
        *guard += delta;
    }

    /// Pin the clock to an absolute instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        #[allow(clippy::unwrap_used)]
        let mut guard = self.now.lock().unwrap();
        *guard = instant;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        // 2024-01-01T00:00:00Z; any fixed instant works
        #[allow(clippy::unwrap_used)]
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap();
        Self::new(start)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        #[allow(clippy::unwrap_used)]
        let guard = self.now.lock().unwrap();
        *guard
    }
}

/// Canned-response authorization flow for handler tests
///
/// Returns a fixed authorization URL and either a canned token response or a
/// canned provider rejection, while counting exchange attempts.
pub struct StubAuthorizationFlow {
    url: String,
    outcome: Mutex<Result<TokenResponse, (u16, String)>>,
    exchange_calls: AtomicUsize,
}

impl StubAuthorizationFlow {
    /// Flow whose exchange succeeds with the given token response.
    #[must_use]
    pub fn accepting(url: &str, response: TokenResponse) -> Self {
        Self {
            url: url.to_string(),
            outcome: Mutex::new(Ok(response)),
            exchange_calls: AtomicUsize::new(0),
        }
    }

    /// Flow whose exchange is rejected with the given provider payload.
    #[must_use]
    pub fn rejecting(url: &str, status: u16, payload: &str) -> Self {
        Self {
            url: url.to_string(),
            outcome: Mutex::new(Err((status, payload.to_string()))),
            exchange_calls: AtomicUsize::new(0),
        }
    }

    /// Number of exchange attempts observed.
    pub fn exchange_calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorizationFlow for StubAuthorizationFlow {
    fn authorization_url(&self) -> String {
        self.url.clone()
    }

    async fn exchange_code(&self, _code: &str) -> Result<TokenResponse, AuthClientError> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        #[allow(clippy::unwrap_used)]
        let outcome = self.outcome.lock().unwrap();
        match &*outcome {
            Ok(response) => Ok(response.clone()),
            Err((status, payload)) => {
                Err(AuthClientError::Provider { status: *status, payload: payload.clone() })
            }
        }
    }
}
