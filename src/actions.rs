//! Device actions.
//!
//! This module covers the remotely-triggerable device action endpoints:
//!
//! - [`get_action`] — read the status of a previously submitted action,
//!   GET `/devices/{id}/actions/{action_id}`.
//! - [`perform_action`] — submit a new action to a device,
//!   PUT `/devices/{id}/actions` with a JSON body.
//!
//! Actions are identified by a UUID-shaped ID assigned by the API when an
//! action is submitted. There is no polling or status machine here — each
//! call is a single request, and interpreting the returned status is left to
//! the caller.

use serde::{Deserialize, Serialize};

use crate::client::MokiClient;
use crate::device::DeviceId;
use crate::error::{MokiError, Result};

// ── Response types ─────────────────────────────────────────────────────

/// A device action record as returned by both the submit and status
/// endpoints.
///
/// `id` is always present; remaining fields are optional because the API
/// fills them in progressively as the action moves through its lifecycle.
/// Unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAction {
    /// UUID-shaped action identifier assigned by the API.
    pub id: String,

    /// Current lifecycle status string (e.g. `"queued"`, `"completed"`).
    /// Kept as a free-form string — the API does not document a closed set.
    #[serde(default)]
    pub status: Option<String>,

    /// The kind of action submitted (e.g. `"restart"`, `"installProfile"`).
    #[serde(rename = "type", default)]
    pub action_type: Option<String>,

    /// Identifier of the device the action targets.
    #[serde(default)]
    pub device_id: Option<String>,

    /// Free-form parameter object echoed back from the submit payload.
    #[serde(default)]
    pub parameters: Option<serde_json::Value>,

    /// ISO 8601 timestamp of when the action was created.
    #[serde(default)]
    pub created_at: Option<String>,

    /// ISO 8601 timestamp of the last status change.
    #[serde(default)]
    pub modified_at: Option<String>,
}

// ── Endpoint functions ─────────────────────────────────────────────────

/// Reads the status of a single device action.
///
/// `device_id` may be a UDID, a bare serial number, or an already-rendered
/// `sn-!-` token; it is classified before any request is made. `action_id`
/// must be non-blank.
///
/// # Errors
///
/// - `MokiError::InvalidIdentifier` — `device_id` matches neither shape;
///   no request is issued.
/// - `MokiError::MissingArgument` — `action_id` is empty or whitespace-only;
///   no request is issued.
/// - `MokiError::Api` — the API returned a non-success status (404 for an
///   unknown action ID).
/// - `MokiError::Network` — transport-level failure.
/// - `MokiError::Parse` — the response body was not valid JSON.
pub async fn get_action(
    client: &MokiClient,
    device_id: &str,
    action_id: &str,
) -> Result<DeviceAction> {
    let device = DeviceId::parse(device_id)?;
    if action_id.trim().is_empty() {
        return Err(MokiError::MissingArgument {
            name: "action_id".to_string(),
        });
    }
    let path = format!("/devices/{}/actions/{action_id}", device.path_segment());
    client.get(&path).await
}

/// Submits a new action to a device.
///
/// `body` is any JSON-serializable payload; it is sent verbatim as the PUT
/// body to `/devices/{id}/actions`. Returns the action record the API
/// creates, including its assigned `id`.
///
/// # Errors
///
/// - `MokiError::InvalidIdentifier` — `device_id` matches neither shape;
///   no request is issued.
/// - `MokiError::Api` / `MokiError::Network` / `MokiError::Parse` — as for
///   [`get_action`].
pub async fn perform_action<B: Serialize + ?Sized>(
    client: &MokiClient,
    device_id: &str,
    body: &B,
) -> Result<DeviceAction> {
    let device = DeviceId::parse(device_id)?;
    let path = format!("/devices/{}/actions", device.path_segment());
    client.put(&path, body).await
}
