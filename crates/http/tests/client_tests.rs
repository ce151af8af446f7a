//! Integration tests for the NexaBank HTTP clients

use nexabank_http::client::error::ClientError;
use nexabank_http::{MemoryTokenStore, PortalClient, PublicAuthClient};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn auth_response_body(access: &str, refresh: &str) -> serde_json::Value {
    json!({
        "success": true,
        "message": "OK",
        "data": {
            "accessToken": access,
            "refreshToken": refresh,
            "tokenType": "Bearer",
            "expiresIn": 900,
            "user": {
                "userId": "u-1",
                "email": "ada@nexabank.test",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "phoneNumber": "5550001",
                "userType": "CUSTOMER",
                "status": "ACTIVE",
                "roles": ["CUSTOMER_VIEW"]
            }
        },
        "timestamp": "2025-01-01T00:00:00Z"
    })
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
async fn builder_requires_base_urls_and_store() {
    let result = PortalClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = PortalClient::builder()
        .auth_base_url("http://localhost:8080/api")
        .app_base_url("http://localhost:8081/api")
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn login_posts_credentials_and_returns_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({
            "email": "ada@nexabank.test",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_response_body("a-1", "r-1")))
        .mount(&server)
        .await;

    let client = PublicAuthClient::new(server.uri()).unwrap();
    let auth = client
        .login(nexabank_http::types::LoginRequest {
            email: "ada@nexabank.test".into(),
            password: "hunter2".into(),
            remember_me: None,
        })
        .await
        .unwrap();

    assert_eq!(auth.access_token, "a-1");
    assert_eq!(auth.user.first_name, "Ada");
}

#[tokio::test]
async fn failed_envelope_is_an_api_error_even_on_http_200() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials",
            "data": null,
            "timestamp": "2025-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = PublicAuthClient::new(server.uri()).unwrap();
    let result = client
        .login(nexabank_http::types::LoginRequest {
            email: "ada@nexabank.test".into(),
            password: "wrong".into(),
            remember_me: None,
        })
        .await;

    match result {
        Err(ClientError::Api(message)) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn portal_attaches_bearer_from_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/my-accounts"))
        .and(header("authorization", "Bearer a-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "OK",
            "data": [{
                "accountId": "acc-1",
                "accountNumber": "NX-0001",
                "accountType": "SAVINGS",
                "balance": 1250.75,
                "status": "ACTIVE",
                "interestRate": 3.5,
                "createdAt": "2024-06-01T10:00:00Z"
            }],
            "timestamp": "2025-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("a-1", "r-1"));
    let client = portal(&server, store);

    let accounts = client.my_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].account_number, "NX-0001");
    assert_eq!(
        accounts[0].account_type,
        nexabank_http::types::AccountType::Savings
    );
}

#[tokio::test]
async fn admin_filters_and_cache_bust_are_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/accounts"))
        .and(query_param("accountType", "FIXED_DEPOSIT"))
        .and(query_param("status", "SUSPENDED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "message": "OK", "data": [], "timestamp": ""
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .and(query_param("t", "1735689600000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "OK",
            "data": {
                "totalUsers": 3, "totalCustomers": 2, "totalAdmins": 1,
                "totalEmployees": 0, "activeUsers": 3, "lockedUsers": 0,
                "totalAccounts": 4, "totalDeposits": 100.0,
                "totalTransactions": 9, "totalTransactionVolume": 420.5
            },
            "timestamp": ""
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("a-1", "r-1"));
    let client = portal(&server, store);

    let accounts = client
        .list_accounts(
            Some(nexabank_http::types::AccountType::FixedDeposit),
            Some(nexabank_http::types::AccountStatus::Suspended),
        )
        .await
        .unwrap();
    assert!(accounts.is_empty());

    let stats = client.bank_stats(1_735_689_600_000).await.unwrap();
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.total_transaction_volume, 420.5);
}

#[tokio::test]
async fn error_statuses_map_onto_client_error_variants() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/users/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such user"))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("a-1", "r-1"));
    let client = portal(&server, store);

    let result = client.get_user("missing").await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}
