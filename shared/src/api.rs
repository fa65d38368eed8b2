//! API client and authentication service
//!
//! The console talks to exactly two remote endpoints (`/auth/login` and
//! `/auth/signup`). Requests go through an [`HttpTransport`] so the browser
//! implementation (gloo-net) can be replaced with a scripted fake in tests.
//!
//! Every request carries `Content-Type: application/json`, plus
//! `Authorization: Bearer <token>` when a token is stored.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ConsoleConfig;
use crate::error::ApiError;
use crate::messages::{LoginRequest, LoginResponse, Notification, SignupRequest, SignupResponse};
use crate::storage::{KeyValueStore, TOKEN_KEY};

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";

/// HTTP method used by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Transport-level request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Transport-level response. `body` is `Value::Null` when the server sent
/// nothing parseable.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `message` field of a JSON error body, if any
    pub fn message(&self) -> Option<String> {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// Sends a request and returns the raw response
///
/// Implementations only fail for transport problems; non-2xx statuses are
/// returned as normal responses.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Client for the console API
pub struct ApiClient<T, S> {
    config: ConsoleConfig,
    transport: T,
    store: S,
}

impl<T: HttpTransport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(config: ConsoleConfig, transport: T, store: S) -> Self {
        Self {
            config,
            transport,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// GET `path` and decode the JSON body
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let body = self.request(HttpMethod::Get, path, None).await?;
        decode(body)
    }

    /// POST `body` as JSON to `path` and decode the JSON response
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let body = encode(body)?;
        let response = self.request(HttpMethod::Post, path, Some(body)).await?;
        decode(response)
    }

    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.store.get_raw(TOKEN_KEY) {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        tracing::debug!("{} {}", method.as_str(), url);
        let response = self
            .transport
            .send(ApiRequest {
                method,
                url: url.clone(),
                headers,
                body,
            })
            .await
            .map_err(|e| {
                tracing::warn!("{} {} failed: {}", method.as_str(), url, e);
                e
            })?;

        if !response.is_success() {
            tracing::warn!("{} {} returned HTTP {}", method.as_str(), url, response.status);
            return Err(ApiError::Status {
                status: response.status,
                message: response.message(),
            });
        }

        Ok(response.body)
    }

    /// Log in and store the returned token
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post(LOGIN_PATH, request).await?;
        self.store.set_raw(TOKEN_KEY, &response.token)?;
        tracing::info!("Logged in as {}", request.username);
        Ok(response)
    }

    /// Register a new tenant
    pub async fn signup(&self, request: &SignupRequest) -> Result<SignupResponse, ApiError> {
        let body = encode(request)?;
        let body = self.request(HttpMethod::Post, SIGNUP_PATH, Some(body)).await?;
        // Some deployments answer a successful signup with an empty body
        let response = if body.is_null() {
            SignupResponse::default()
        } else {
            decode(body)?
        };
        tracing::info!("Signed up tenant {}", request.tenant_name);
        Ok(response)
    }

    /// Drop the stored token
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        tracing::info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        is_authenticated(&self.store)
    }
}

/// Presence check only; the server validates the token
pub fn is_authenticated<S: KeyValueStore>(store: &S) -> bool {
    store
        .get_raw(TOKEN_KEY)
        .map(|token| !token.is_empty())
        .unwrap_or(false)
}

/// Toast for a finished login attempt
pub fn login_notification(result: &Result<LoginResponse, ApiError>) -> Notification {
    match result {
        Ok(response) => Notification::info(
            "Login successful",
            response
                .message
                .clone()
                .unwrap_or_else(|| "Welcome back".to_string()),
        ),
        Err(err) => Notification::error("Login failed", err.user_message()),
    }
}

/// Toast for a finished signup attempt
pub fn signup_notification(result: &Result<SignupResponse, ApiError>) -> Notification {
    match result {
        Ok(response) => Notification::info(
            "Account created",
            response
                .message
                .clone()
                .unwrap_or_else(|| "You can now log in".to_string()),
        ),
        Err(err) => Notification::error("Signup failed", err.user_message()),
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        tracing::warn!("Request body could not be encoded: {}", e);
        ApiError::InvalidRequest(e.to_string())
    })
}

fn decode<R: DeserializeOwned>(body: Value) -> Result<R, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::NotificationVariant;
    use crate::storage::MemoryStore;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Returns scripted responses in order and records every request
    #[derive(Default)]
    struct FakeTransport {
        responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
        requests: RefCell<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: Value) -> Self {
            let transport = Self::default();
            transport
                .responses
                .borrow_mut()
                .push_back(Ok(ApiResponse { status, body }));
            transport
        }

        fn failing(err: ApiError) -> Self {
            let transport = Self::default();
            transport.responses.borrow_mut().push_back(Err(err));
            transport
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
        }
    }

    fn config() -> ConsoleConfig {
        ConsoleConfig::default().with_api_base_url("http://api.test/")
    }

    fn login_request() -> LoginRequest {
        LoginRequest {
            username: "a@b.com".to_string(),
            password: "x".to_string(),
        }
    }

    #[test]
    fn test_login_success_stores_token() {
        let store = MemoryStore::new();
        let client = ApiClient::new(
            config(),
            FakeTransport::replying(200, json!({"token": "t1"})),
            store.clone(),
        );

        let result = block_on(client.login(&login_request()));
        let notification = login_notification(&result);

        assert_eq!(store.get_raw(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(notification.variant, NotificationVariant::Default);
        assert!(client.is_authenticated());

        let requests = client.transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://api.test/auth/login");
        assert_eq!(
            requests[0].body,
            Some(json!({"username": "a@b.com", "password": "x"}))
        );
        assert_eq!(requests[0].header("content-type"), Some("application/json"));
        assert_eq!(requests[0].header("Authorization"), None);
    }

    #[test]
    fn test_login_failure_uses_server_message() {
        let store = MemoryStore::new();
        let client = ApiClient::new(
            config(),
            FakeTransport::replying(401, json!({"message": "bad creds"})),
            store.clone(),
        );

        let result = block_on(client.login(&login_request()));
        let notification = login_notification(&result);

        assert_eq!(store.write_count(), 0);
        assert_eq!(store.get_raw(TOKEN_KEY), None);
        assert!(notification.is_destructive());
        assert_eq!(notification.description.as_deref(), Some("bad creds"));
    }

    #[test]
    fn test_network_failure_uses_fallback_message() {
        let client = ApiClient::new(
            config(),
            FakeTransport::failing(ApiError::Network("offline".to_string())),
            MemoryStore::new(),
        );

        let result = block_on(client.login(&login_request()));
        let notification = login_notification(&result);

        assert!(notification.is_destructive());
        assert_eq!(
            notification.description.as_deref(),
            Some(crate::error::FALLBACK_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_bearer_header_attached_when_token_stored() {
        let store = MemoryStore::new();
        store.set_raw(TOKEN_KEY, "t1").unwrap();
        let client = ApiClient::new(
            config(),
            FakeTransport::replying(200, json!({"ok": true})),
            store,
        );

        let body: Value = block_on(client.get("/tasks")).unwrap();
        assert_eq!(body, json!({"ok": true}));

        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].header("Authorization"), Some("Bearer t1"));
        assert_eq!(requests[0].body, None);
    }

    #[test]
    fn test_signup_sends_camel_case_body() {
        let client = ApiClient::new(
            config(),
            FakeTransport::replying(200, json!({"message": "created"})),
            MemoryStore::new(),
        );
        let request = SignupRequest {
            tenant_name: "Acme".to_string(),
            username: "admin".to_string(),
            password: "pw".to_string(),
            phno: "555".to_string(),
        };

        let result = block_on(client.signup(&request));
        assert_eq!(result.as_ref().unwrap().message.as_deref(), Some("created"));
        assert!(!signup_notification(&result).is_destructive());

        let requests = client.transport.requests.borrow();
        assert_eq!(requests[0].url, "http://api.test/auth/signup");
        assert_eq!(requests[0].body.as_ref().unwrap()["tenantName"], "Acme");
    }

    #[test]
    fn test_signup_failure_without_message() {
        let client = ApiClient::new(
            config(),
            FakeTransport::replying(500, Value::Null),
            MemoryStore::new(),
        );
        let request = SignupRequest {
            tenant_name: "Acme".to_string(),
            username: "admin".to_string(),
            password: "pw".to_string(),
            phno: "555".to_string(),
        };

        let result = block_on(client.signup(&request));
        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 500,
                message: None
            })
        );
        assert_eq!(
            signup_notification(&result).description.as_deref(),
            Some(crate::error::FALLBACK_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_logout_removes_token() {
        let store = MemoryStore::new();
        store.set_raw(TOKEN_KEY, "t1").unwrap();
        let client = ApiClient::new(config(), FakeTransport::default(), store.clone());

        client.logout();
        assert!(!client.is_authenticated());
        assert_eq!(store.get_raw(TOKEN_KEY), None);
    }

    #[test]
    fn test_success_body_missing_token_is_invalid() {
        let store = MemoryStore::new();
        let client = ApiClient::new(
            config(),
            FakeTransport::replying(200, json!({"message": "hi"})),
            store.clone(),
        );

        let result = block_on(client.login(&login_request()));
        assert!(matches!(result, Err(ApiError::InvalidResponse(_))));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_unencodable_body_is_rejected_before_sending() {
        let client = ApiClient::new(
            config(),
            FakeTransport::replying(200, json!({"ok": true})),
            MemoryStore::new(),
        );
        // JSON object keys must be strings
        let mut body = std::collections::BTreeMap::new();
        body.insert((1, 2), "pair");

        let result: Result<Value, ApiError> = block_on(client.post("/tasks", &body));
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
        assert!(client.transport.requests.borrow().is_empty());
    }
}
