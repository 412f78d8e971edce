//! Typed error hierarchy for the moki-api crate.
//!
//! `MokiError` is a structured enum that preserves diagnostic context at each
//! failure boundary. Every variant carries enough information for callers to:
//! - Distinguish the failure category (configuration, identifier, API, parse,
//!   network).
//! - Inspect the original cause via `source()` (thiserror derives this
//!   automatically from `#[from]` fields).
//! - Display a human-readable message that includes the relevant context
//!   (variable name, offending identifier, status code, response body).
//!
//! The library performs no recovery of its own: every variant propagates
//! immediately to the caller, and no retries are attempted anywhere.

use reqwest::StatusCode;

/// Unified error type for all moki-api library operations.
///
/// Each variant corresponds to a distinct failure boundary in the system.
#[derive(Debug, thiserror::Error)]
pub enum MokiError {
    /// A required configuration value (API URL, tenant ID, or API key) is
    /// missing or empty.
    ///
    /// Raised by `MokiConfig::new` and `MokiConfig::from_env` before any
    /// client exists, so a misconfigured process can never reach the network.
    #[error("configuration error: {message}")]
    Configuration {
        /// Which value was missing or empty, and where it was expected.
        message: String,
    },

    /// A device identifier matched neither the UDID shape nor a valid
    /// serial-number shape.
    ///
    /// Classification happens before URL construction, so an invalid
    /// identifier never produces an HTTP request.
    #[error("invalid device identifier: {value:?} is neither a UDID nor a serial number")]
    InvalidIdentifier {
        /// The identifier as supplied by the caller.
        value: String,
    },

    /// A required argument was absent (e.g. a blank action ID).
    #[error("missing required argument: {name}")]
    MissingArgument {
        /// The name of the absent argument.
        name: String,
    },

    /// The Moki API returned a non-success HTTP status code.
    ///
    /// The full response body is preserved rather than discarded via
    /// `error_for_status()` — Moki error responses contain diagnostic
    /// messages that are essential for debugging tenant and permission
    /// issues.
    #[error("API error {status}: {body}")]
    Api {
        /// The HTTP status code returned by the Moki API.
        status: StatusCode,
        /// The raw response body text. May contain JSON error details,
        /// or an empty string if the body could not be read.
        body: String,
    },

    /// JSON deserialization failed when parsing an API response body.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A network-level failure occurred (DNS resolution, TCP connection,
    /// TLS handshake, request timeout, etc.).
    ///
    /// No HTTP status code is available because the request did not
    /// complete. This wraps the underlying `reqwest::Error` which carries
    /// detailed transport diagnostics.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, MokiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn configuration_error_displays_message() {
        let err = MokiError::Configuration {
            message: "MOKI_TENANT_ID is not set or empty".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("MOKI_TENANT_ID"),
            "display should name the offending variable"
        );
        assert!(
            msg.contains("configuration error"),
            "display should indicate a configuration failure"
        );
    }

    #[test]
    fn invalid_identifier_includes_value() {
        let err = MokiError::InvalidIdentifier {
            value: "ermishness-nope".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("ermishness-nope"),
            "display should include the rejected identifier"
        );
    }

    #[test]
    fn missing_argument_includes_name() {
        let err = MokiError::MissingArgument {
            name: "action_id".to_string(),
        };
        assert!(err.to_string().contains("action_id"));
    }

    #[test]
    fn api_error_preserves_status_and_body() {
        let err = MokiError::Api {
            status: StatusCode::FORBIDDEN,
            body: r#"{"error":"tenant key rejected"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"), "display should include status code");
        assert!(
            msg.contains("tenant key rejected"),
            "display should include response body"
        );
    }

    #[test]
    fn parse_error_wraps_serde_json() {
        let json_err: serde_json::Error =
            serde_json::from_str::<String>("{{bad json}}").unwrap_err();
        let err = MokiError::Parse(json_err);
        assert!(
            err.to_string().contains("failed to parse response"),
            "display should indicate parse failure"
        );
        // source() should be the serde_json::Error
        assert!(
            err.source().is_some(),
            "Parse variant should chain to serde_json::Error"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        // MokiError must be Send + Sync for use across async task boundaries.
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MokiError>();
    }
}
