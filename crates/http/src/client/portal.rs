//! Authenticated client spanning both services.
//!
//! Every request attaches the stored access token as a bearer header at send
//! time. A 401 triggers exactly one coordinated refresh followed by one
//! replay of the original request; a replay that fails again is surfaced as
//! is. Refreshes are serialized through an async gate so that concurrent
//! 401s produce a single refresh call, with waiters reusing the rotated
//! token.

use std::sync::Arc;
use std::time::Duration;

use futures::lock::Mutex;
use reqwest::{Client, ClientBuilder, Method, StatusCode};

use super::error::ClientError;
use super::store::TokenStore;
use crate::types::{
    AccountStatus, AccountType, AdminBankAccount, AuthResponse, BankAccount, BankStats,
    CreateUserRequest, RefreshRequest, Transaction, UpdateUserRequest, User, UserStatus,
};

/// Which external service a request targets.
#[derive(Clone, Copy)]
enum Service {
    /// Auth service (`/api/auth/*`), port 8080.
    Auth,
    /// App/admin service (`/api/accounts/*`, `/api/admin/*`), port 8081.
    App,
}

/// Hook invoked after the session is cleared because a refresh was
/// impossible or failed. The browser apps navigate to the login origin with
/// a `session=expired` marker here.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Client for everything behind authentication.
#[derive(Clone)]
pub struct PortalClient {
    client: Client,
    auth_base_url: String,
    app_base_url: String,
    store: Arc<dyn TokenStore>,
    refresh_gate: Arc<Mutex<()>>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl PortalClient {
    /// Create a builder
    pub fn builder() -> PortalClientBuilder {
        PortalClientBuilder::new()
    }

    pub fn auth_base_url(&self) -> &str {
        &self.auth_base_url
    }

    pub fn app_base_url(&self) -> &str {
        &self.app_base_url
    }

    fn request(&self, method: Method, service: Service, path: &str) -> reqwest::RequestBuilder {
        let base = match service {
            Service::Auth => &self.auth_base_url,
            Service::App => &self.app_base_url,
        };
        self.client.request(method, format!("{base}{path}"))
    }

    /// Execute a request with bearer credentials and the single-retry
    /// refresh policy.
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        // Body streams are never used here, so the clone only fails for
        // callers this client does not produce.
        let replay = request.try_clone();
        let sent_with = self.store.access_token();

        let request = match &sent_with {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            if let Some(replay) = replay {
                let token = self.refresh_access_token(sent_with.as_deref()).await?;
                let response = replay.bearer_auth(token).send().await?;
                return super::decode(response).await;
            }
        }

        super::decode(response).await
    }

    /// Obtain a usable access token after a 401, performing at most one
    /// in-flight refresh across all concurrent callers.
    async fn refresh_access_token(&self, stale: Option<&str>) -> Result<String, ClientError> {
        let _gate = self.refresh_gate.lock().await;

        // A peer may have rotated the pair while we waited on the gate.
        if let Some(current) = self.store.access_token() {
            if stale != Some(current.as_str()) {
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.store.refresh_token() else {
            return Err(self.expire_session());
        };

        tracing::debug!("access token rejected, attempting refresh");
        let response = self
            .client
            .post(format!("{}/auth/refresh", self.auth_base_url))
            .json(&RefreshRequest { refresh_token })
            .send()
            .await;

        let refreshed: Result<AuthResponse, ClientError> = match response {
            Ok(response) => super::decode(response).await,
            Err(err) => Err(err.into()),
        };

        match refreshed {
            Ok(auth) => {
                self.store.store(&auth.access_token, &auth.refresh_token);
                Ok(auth.access_token)
            }
            Err(err) => {
                tracing::warn!("token refresh failed: {err}");
                Err(self.expire_session())
            }
        }
    }

    /// Clear the stored session and notify the expiry hook.
    fn expire_session(&self) -> ClientError {
        self.store.clear();
        if let Some(hook) = &self.on_session_expired {
            hook();
        }
        ClientError::SessionExpired
    }

    // ----- auth service -----

    /// `GET /auth/me`
    pub async fn current_user(&self) -> Result<User, ClientError> {
        self.execute(self.request(Method::GET, Service::Auth, "/auth/me"))
            .await
    }

    /// `GET /auth/validate`
    pub async fn validate(&self) -> Result<String, ClientError> {
        self.execute(self.request(Method::GET, Service::Auth, "/auth/validate"))
            .await
    }

    /// `POST /auth/logout` — revokes the current session server-side.
    pub async fn logout(&self) -> Result<String, ClientError> {
        self.execute(self.request(Method::POST, Service::Auth, "/auth/logout"))
            .await
    }

    /// `POST /auth/logout-all` — revokes every session of the user.
    pub async fn logout_all(&self) -> Result<String, ClientError> {
        self.execute(self.request(Method::POST, Service::Auth, "/auth/logout-all"))
            .await
    }

    // ----- app service: accounts -----

    /// `GET /accounts/my-accounts`
    pub async fn my_accounts(&self) -> Result<Vec<BankAccount>, ClientError> {
        self.execute(self.request(Method::GET, Service::App, "/accounts/my-accounts"))
            .await
    }

    /// `GET /accounts/my-transactions?limit=`
    pub async fn my_transactions(&self, limit: usize) -> Result<Vec<Transaction>, ClientError> {
        self.execute(
            self.request(Method::GET, Service::App, "/accounts/my-transactions")
                .query(&[("limit", limit.to_string())]),
        )
        .await
    }

    /// `POST /accounts/create?accountType=`
    pub async fn create_account(
        &self,
        account_type: AccountType,
    ) -> Result<BankAccount, ClientError> {
        self.execute(
            self.request(Method::POST, Service::App, "/accounts/create")
                .query(&[("accountType", account_type.as_str())]),
        )
        .await
    }

    /// `GET /accounts/{id}/transactions?limit=`
    pub async fn account_transactions(
        &self,
        account_id: &str,
        limit: usize,
    ) -> Result<Vec<Transaction>, ClientError> {
        self.execute(
            self.request(
                Method::GET,
                Service::App,
                &format!("/accounts/{account_id}/transactions"),
            )
            .query(&[("limit", limit.to_string())]),
        )
        .await
    }

    // ----- app service: admin -----

    /// `GET /admin/users`
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.execute(self.request(Method::GET, Service::App, "/admin/users"))
            .await
    }

    /// `GET /admin/users/{id}`
    pub async fn get_user(&self, user_id: &str) -> Result<User, ClientError> {
        self.execute(self.request(Method::GET, Service::App, &format!("/admin/users/{user_id}")))
            .await
    }

    /// `POST /admin/users`
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, ClientError> {
        self.execute(
            self.request(Method::POST, Service::App, "/admin/users")
                .json(&request),
        )
        .await
    }

    /// `PUT /admin/users/{id}`
    pub async fn update_user(
        &self,
        user_id: &str,
        request: UpdateUserRequest,
    ) -> Result<User, ClientError> {
        self.execute(
            self.request(Method::PUT, Service::App, &format!("/admin/users/{user_id}"))
                .json(&request),
        )
        .await
    }

    /// `PUT /admin/users/{id}/status?status=`
    pub async fn update_user_status(
        &self,
        user_id: &str,
        status: UserStatus,
    ) -> Result<User, ClientError> {
        self.execute(
            self.request(
                Method::PUT,
                Service::App,
                &format!("/admin/users/{user_id}/status"),
            )
            .query(&[("status", status.as_str())]),
        )
        .await
    }

    /// `DELETE /admin/users/{id}`
    pub async fn delete_user(&self, user_id: &str) -> Result<String, ClientError> {
        self.execute(self.request(
            Method::DELETE,
            Service::App,
            &format!("/admin/users/{user_id}"),
        ))
        .await
    }

    /// `GET /admin/stats?t=` — the timestamp query defeats intermediary
    /// caching.
    pub async fn bank_stats(&self, cache_bust: u64) -> Result<BankStats, ClientError> {
        self.execute(
            self.request(Method::GET, Service::App, "/admin/stats")
                .query(&[("t", cache_bust.to_string())]),
        )
        .await
    }

    /// `GET /admin/accounts` with optional type/status filters.
    pub async fn list_accounts(
        &self,
        account_type: Option<AccountType>,
        status: Option<AccountStatus>,
    ) -> Result<Vec<AdminBankAccount>, ClientError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(account_type) = account_type {
            query.push(("accountType", account_type.as_str()));
        }
        if let Some(status) = status {
            query.push(("status", status.as_str()));
        }
        self.execute(
            self.request(Method::GET, Service::App, "/admin/accounts")
                .query(&query),
        )
        .await
    }

    /// `GET /admin/accounts/{id}`
    pub async fn get_account(&self, account_id: &str) -> Result<AdminBankAccount, ClientError> {
        self.execute(self.request(
            Method::GET,
            Service::App,
            &format!("/admin/accounts/{account_id}"),
        ))
        .await
    }

    /// `PUT /admin/accounts/{id}/status?status=`
    pub async fn update_account_status(
        &self,
        account_id: &str,
        status: AccountStatus,
    ) -> Result<AdminBankAccount, ClientError> {
        self.execute(
            self.request(
                Method::PUT,
                Service::App,
                &format!("/admin/accounts/{account_id}/status"),
            )
            .query(&[("status", status.as_str())]),
        )
        .await
    }
}

/// Builder for [`PortalClient`].
pub struct PortalClientBuilder {
    auth_base_url: Option<String>,
    app_base_url: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
    on_session_expired: Option<SessionExpiredHook>,
    timeout: Option<Duration>,
}

impl PortalClientBuilder {
    pub fn new() -> Self {
        Self {
            auth_base_url: None,
            app_base_url: None,
            store: None,
            on_session_expired: None,
            timeout: None,
        }
    }

    /// Set the auth service base URL
    pub fn auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.auth_base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the app/admin service base URL
    pub fn app_base_url(mut self, url: impl Into<String>) -> Self {
        self.app_base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Set the token store backing bearer attachment and rotation
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Hook fired after an unrecoverable refresh clears the session
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<PortalClient, ClientError> {
        let auth_base_url = self
            .auth_base_url
            .ok_or_else(|| ClientError::Configuration("auth_base_url is required".into()))?;
        let app_base_url = self
            .app_base_url
            .ok_or_else(|| ClientError::Configuration("app_base_url is required".into()))?;
        let store = self
            .store
            .ok_or_else(|| ClientError::Configuration("token_store is required".into()))?;

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new()
                .user_agent(super::USER_AGENT)
                .default_headers(super::no_cache_headers());
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new()
                .user_agent(super::USER_AGENT)
                .default_headers(super::no_cache_headers())
                .build()?
        };

        Ok(PortalClient {
            client,
            auth_base_url,
            app_base_url,
            store,
            refresh_gate: Arc::new(Mutex::new(())),
            on_session_expired: self.on_session_expired,
        })
    }
}

impl Default for PortalClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
