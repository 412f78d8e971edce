//! Configuration for connecting to the Moki API.
//!
//! The original deployment convention sources everything from three
//! environment variables, read once at startup via [`MokiConfig::from_env`].
//! The values are validated at construction: a `MokiConfig` that exists is
//! always complete, so no operation performed through a client built from it
//! can fail on missing configuration mid-call.

use std::env;

use crate::error::{MokiError, Result};

/// Connection parameters for a single Moki tenant.
///
/// Invariant: all three fields are non-empty. Both constructors reject
/// empty or whitespace-only values with [`MokiError::Configuration`].
#[derive(Debug, Clone)]
pub struct MokiConfig {
    /// Scheme + host (+ optional port) of the Moki API,
    /// e.g. `"https://mdm.moki.example"` or `"http://localhost:9292"`.
    /// A trailing slash is stripped so URL concatenation is predictable.
    pub api_url: String,
    /// Tenant identifier that scopes every request path.
    pub tenant_id: String,
    /// API key attached to every request as a credential header.
    pub api_key: String,
}

impl MokiConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// `MokiError::Configuration` if any value is empty or whitespace-only.
    pub fn new(
        api_url: impl Into<String>,
        tenant_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let api_url = require(api_url.into(), "api_url")?;
        let tenant_id = require(tenant_id.into(), "tenant_id")?;
        let api_key = require(api_key.into(), "api_key")?;

        Ok(MokiConfig {
            api_url: api_url.trim_end_matches('/').to_string(),
            tenant_id,
            api_key,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    /// - `MOKI_API_URL` — scheme+host(+port) of the target API
    /// - `MOKI_TENANT_ID` — tenant path segment scoping all requests
    /// - `MOKI_API_KEY` — credential attached to every request
    ///
    /// # Errors
    ///
    /// `MokiError::Configuration` naming the first variable that is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        let api_url = env_var("MOKI_API_URL")?;
        let tenant_id = env_var("MOKI_TENANT_ID")?;
        let api_key = env_var("MOKI_API_KEY")?;
        MokiConfig::new(api_url, tenant_id, api_key)
    }
}

/// Reads one environment variable, treating "unset" and "empty" identically.
fn env_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MokiError::Configuration {
            message: format!("{name} is not set or empty"),
        }),
    }
}

/// Rejects empty or whitespace-only values for a named config field.
fn require(value: String, field: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(MokiError::Configuration {
            message: format!("{field} must not be empty"),
        });
    }
    Ok(value)
}
