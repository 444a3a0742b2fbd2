//! Integration tests for the session token lifecycle
//!
//! Exercises the authorization-code exchange against a stubbed provider and
//! the token store's expiry behavior end to end.

use std::sync::Arc;

use aecdash_common::testing::ManualClock;
use aecdash_common::{AuthCodeClient, AuthConfig, TokenStore};
use chrono::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(provider: &MockServer) -> AuthConfig {
    AuthConfig {
        client_id: "integration_client".to_string(),
        client_secret: "integration_secret".to_string(),
        callback_url: "https://localhost:8080/auth/callback/".to_string(),
        authorize_endpoint: format!("{}/authorize", provider.uri()),
        token_endpoint: format!("{}/token", provider.uri()),
        scopes: vec!["data:read".to_string(), "account:read".to_string()],
    }
}

#[tokio::test]
async fn accepted_exchange_populates_store() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok123",
            "token_type": "Bearer",
            "expires_in": 60
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let client = AuthCodeClient::new(config_for(&provider));
    let clock = Arc::new(ManualClock::default());
    let store = TokenStore::with_clock(clock.clone());

    let response = client.exchange_code("good_code").await.unwrap();
    store.set(response.access_token, response.refresh_token, response.expires_in).await;

    // The freshly stored token is immediately visible and valid
    let current = store.current().await.unwrap();
    assert_eq!(current.access_token, "tok123");

    // ...and expires exactly when the granted lifetime elapses
    clock.advance(Duration::seconds(60));
    assert!(store.current().await.is_none());
}

#[tokio::test]
async fn rejected_exchange_leaves_store_unchanged() {
    let provider = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant"
        })))
        .expect(1)
        .mount(&provider)
        .await;

    let client = AuthCodeClient::new(config_for(&provider));
    let clock = Arc::new(ManualClock::default());
    let store = TokenStore::with_clock(clock);

    // Pre-existing session from an earlier login
    store.set("existing".to_string(), None, 3600).await;

    let result = client.exchange_code("bad_code").await;
    assert!(result.is_err());

    // Failed exchange must not disturb the stored token
    let current = store.current().await.unwrap();
    assert_eq!(current.access_token, "existing");
}

#[tokio::test]
async fn authorization_url_reflects_configuration() {
    let provider = MockServer::start().await;
    let client = AuthCodeClient::new(config_for(&provider));

    let url = client.authorization_url();
    assert!(url.contains("client_id=integration_client"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("redirect_uri=https%3A%2F%2Flocalhost%3A8080%2Fauth%2Fcallback%2F"));
    assert!(url.contains("scope=data%3Aread%20account%3Aread"));
}
