//! Browser adapters
//!
//! The shared crate talks to the outside world through two traits:
//!
//! - **GlooTransport**: [`HttpTransport`] over gloo-net's fetch wrapper
//! - **LocalStore**: [`KeyValueStore`] over `window.localStorage`
//!
//! Values are stored raw, so the bearer token is readable by other tools
//! without JSON unquoting.

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use patchtune_shared::{
    ApiError, ApiRequest, ApiResponse, HttpMethod, HttpTransport, KeyValueStore, StorageError,
};
use serde_json::Value;

/// HTTP transport backed by `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        let response = match request.body {
            Some(body) => {
                builder
                    .json(&body)
                    .map_err(|e| ApiError::InvalidRequest(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        // Error pages are often not JSON
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        Ok(ApiResponse { status, body })
    }
}

/// Key-value store backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
