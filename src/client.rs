//! Authenticated HTTP client for the Moki device-management API.
//!
//! `MokiClient` wraps a `reqwest::Client` and a validated [`MokiConfig`],
//! providing JSON-based request helpers (`get`, `put`) used by the endpoint
//! modules. Every request carries the tenant's API key in the
//! `X-Moki-Api-Key` header and targets a URL built by [`MokiClient::tenant_url`].
//!
//! There is no retry, caching, or token lifecycle here: the API key is a
//! static credential, and every failure (transport, non-2xx status, malformed
//! JSON) propagates to the caller as a [`MokiError`].

use std::time::Duration;

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::MokiConfig;
use crate::error::{MokiError, Result};

/// Fixed, tenant-scoped prefix under which every API path lives.
const API_PREFIX: &str = "/rest/v1/api/tenants";

/// Header carrying the tenant API key on every request.
const API_KEY_HEADER: &str = "X-Moki-Api-Key";

/// Connect timeout for the Moki API HTTP client.
/// Covers TCP + TLS handshake only.
const API_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Overall request timeout. Moki responses are small JSON documents, so one
/// minute comfortably covers slow tenants without hanging callers forever.
const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Builds a `reqwest::Client` with explicit timeouts for Moki API calls.
fn build_api_client() -> Client {
    Client::builder()
        .connect_timeout(API_CONNECT_TIMEOUT)
        .timeout(API_REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client for Moki API")
}

/// Authenticated HTTP client for the Moki REST API.
///
/// The client holds no mutable state: the configuration is read-only after
/// construction, so concurrent calls from multiple tasks are independent.
pub struct MokiClient {
    client: Client,
    config: MokiConfig,
}

impl MokiClient {
    /// Creates a client from a validated configuration.
    ///
    /// Tests point `config.api_url` at a local mock server; production code
    /// typically builds the config with [`MokiConfig::from_env`].
    pub fn new(config: MokiConfig) -> Self {
        MokiClient {
            client: build_api_client(),
            config,
        }
    }

    /// The configuration this client was constructed with.
    pub fn config(&self) -> &MokiConfig {
        &self.config
    }

    /// Builds the fully-qualified URL for a tenant-scoped path.
    ///
    /// `path` starts with a slash, e.g. `"/iosprofiles"`. The result is
    /// `{api_url}/rest/v1/api/tenants/{tenant_id}{path}`.
    pub fn tenant_url(&self, path: &str) -> String {
        format!(
            "{}{}/{}{}",
            self.config.api_url, API_PREFIX, self.config.tenant_id, path
        )
    }

    /// Core HTTP method: sends an authenticated JSON request and deserializes
    /// the response. The verb-specific methods (`get`, `put`) delegate here.
    ///
    /// The response body is read as text before the status check so that a
    /// non-2xx response surfaces Moki's diagnostic body in the error instead
    /// of discarding it.
    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.tenant_url(path);

        let mut req = self
            .client
            .request(method, &url)
            .header(API_KEY_HEADER, self.config.api_key.as_str());
        if let Some(payload) = body {
            req = req.json(payload);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(MokiError::Api { status, body: text });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Sends an authenticated GET request and deserializes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json::<T, ()>(Method::GET, path, None).await
    }

    /// Sends an authenticated PUT request with a JSON body and deserializes
    /// the response.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(Method::PUT, path, Some(body)).await
    }
}
