//! Tests for the 401 → refresh → single-replay policy.

use nexabank_http::client::error::ClientError;
use nexabank_http::{MemoryTokenStore, PortalClient, TokenStore};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({"success": true, "message": "OK", "data": data, "timestamp": "2025-01-01T00:00:00Z"})
}

fn user_body() -> serde_json::Value {
    json!({
        "userId": "u-1",
        "email": "ada@nexabank.test",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "phoneNumber": "5550001",
        "userType": "CUSTOMER",
        "status": "ACTIVE",
        "roles": []
    })
}

fn refreshed_session(access: &str, refresh: &str) -> serde_json::Value {
    envelope(json!({
        "accessToken": access,
        "refreshToken": refresh,
        "tokenType": "Bearer",
        "expiresIn": 900,
        "user": user_body()
    }))
}

async fn reject_bearer(server: &MockServer, route: &str, token: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("authorization", format!("Bearer {token}")))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(server)
        .await;
}

fn portal(server: &MockServer, store: Arc<MemoryTokenStore>) -> PortalClient {
    PortalClient::builder()
        .auth_base_url(server.uri())
        .app_base_url(server.uri())
        .token_store(store)
        .build()
        .unwrap()
}

#[tokio::test]
async fn single_401_refreshes_once_and_replays_with_new_token() {
    let server = MockServer::start().await;

    reject_bearer(&server, "/auth/me", "stale").await;
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(user_body())))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_partial_json(json!({"refreshToken": "r-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(refreshed_session("fresh", "r-2")))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("stale", "r-1"));
    let client = portal(&server, store.clone());

    let user = client.current_user().await.unwrap();
    assert_eq!(user.user_id, "u-1");

    // The stored pair was rotated by the refresh.
    assert_eq!(store.access_token().as_deref(), Some("fresh"));
    assert_eq!(store.refresh_token().as_deref(), Some("r-2"));
}

#[tokio::test]
async fn concurrent_401s_share_one_refresh() {
    let server = MockServer::start().await;

    reject_bearer(&server, "/accounts/my-accounts", "stale").await;
    Mock::given(method("GET"))
        .and(path("/accounts/my-accounts"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refreshed_session("fresh", "r-2")))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("stale", "r-1"));
    let client = portal(&server, store);

    let (a, b, c, d) = tokio::join!(
        client.my_accounts(),
        client.my_accounts(),
        client.my_accounts(),
        client.my_accounts(),
    );
    assert!(a.is_ok() && b.is_ok() && c.is_ok() && d.is_ok());

    // Mock expectation (exactly one /auth/refresh call) is verified on drop.
}

#[tokio::test]
async fn failed_refresh_clears_session_and_fires_hook_once() {
    let server = MockServer::start().await;

    reject_bearer(&server, "/auth/me", "stale").await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_string("refresh token revoked"))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("stale", "r-1"));
    let expirations = Arc::new(AtomicUsize::new(0));
    let hook_count = expirations.clone();

    let client = PortalClient::builder()
        .auth_base_url(server.uri())
        .app_base_url(server.uri())
        .token_store(store.clone())
        .on_session_expired(move || {
            hook_count.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    let result = client.current_user().await;
    assert!(matches!(result, Err(ClientError::SessionExpired)));
    assert_eq!(expirations.load(Ordering::SeqCst), 1);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[tokio::test]
async fn missing_refresh_token_expires_without_calling_refresh() {
    let server = MockServer::start().await;

    // Unauthenticated request: no bearer header at all.
    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("missing token"))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refreshed_session("x", "y")))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let expirations = Arc::new(AtomicUsize::new(0));
    let hook_count = expirations.clone();

    let client = PortalClient::builder()
        .auth_base_url(server.uri())
        .app_base_url(server.uri())
        .token_store(store)
        .on_session_expired(move || {
            hook_count.fetch_add(1, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    let result = client.current_user().await;
    assert!(matches!(result, Err(ClientError::SessionExpired)));
    assert_eq!(expirations.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn replayed_request_is_not_refreshed_twice() {
    let server = MockServer::start().await;

    // Both the stale and the fresh token are rejected: the replay's 401 must
    // surface as an authentication failure, not trigger a second refresh.
    reject_bearer(&server, "/auth/me", "stale").await;
    reject_bearer(&server, "/auth/me", "fresh").await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refreshed_session("fresh", "r-2")))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("stale", "r-1"));
    let client = portal(&server, store);

    let result = client.current_user().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}
