//! iOS configuration profiles.
//!
//! This module covers the profile endpoint family:
//!
//! - [`ios_profiles`] — list every profile defined for the tenant.
//! - [`device_profiles`] — list the profiles installed on one device.
//!
//! Both endpoints return a JSON array of profile objects. [`IosProfile`] is a
//! structural passthrough of that shape: field names use camelCase to match
//! the API contract, `id` is always present, and everything else is optional
//! because the API omits fields depending on profile type and install state.
//! Unknown fields are ignored so new API fields never break deserialization.

use serde::{Deserialize, Serialize};

use crate::client::MokiClient;
use crate::device::DeviceId;
use crate::error::Result;

// ── Response types ─────────────────────────────────────────────────────

/// An iOS configuration profile as returned by the Moki API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosProfile {
    /// Unique identifier assigned to this profile by the API.
    pub id: String,

    /// Human-readable profile name shown in the management console.
    #[serde(default)]
    pub name: Option<String>,

    /// The profile's payload UUID as embedded in the `.mobileconfig`.
    #[serde(default)]
    pub uuid: Option<String>,

    /// Free-text description of what the profile configures.
    #[serde(default)]
    pub description: Option<String>,

    /// Reverse-DNS payload identifier (e.g. `"com.example.wifi"`).
    #[serde(default)]
    pub payload_identifier: Option<String>,

    /// ISO 8601 timestamp of when the profile was installed on the device.
    /// Only present in per-device listings.
    #[serde(default)]
    pub installed_at: Option<String>,

    /// ISO 8601 timestamp of the profile's last modification.
    #[serde(default)]
    pub updated_at: Option<String>,
}

// ── Endpoint functions ─────────────────────────────────────────────────

/// Lists all iOS profiles defined for the tenant.
///
/// Issues GET `/iosprofiles` and returns the profiles in API order.
///
/// # Errors
///
/// - `MokiError::Api` — the API returned a non-success status.
/// - `MokiError::Network` — transport-level failure.
/// - `MokiError::Parse` — the response body was not valid JSON.
pub async fn ios_profiles(client: &MokiClient) -> Result<Vec<IosProfile>> {
    client.get("/iosprofiles").await
}

/// Lists the profiles installed on a single device.
///
/// `device_id` may be a UDID, a bare serial number, or an already-rendered
/// `sn-!-` token; it is classified before any request is made. Issues
/// GET `/devices/{id}/profiles`.
///
/// # Errors
///
/// - `MokiError::InvalidIdentifier` — `device_id` matches neither shape;
///   no request is issued.
/// - `MokiError::Api` / `MokiError::Network` / `MokiError::Parse` — as for
///   [`ios_profiles`].
pub async fn device_profiles(client: &MokiClient, device_id: &str) -> Result<Vec<IosProfile>> {
    let device = DeviceId::parse(device_id)?;
    let path = format!("/devices/{}/profiles", device.path_segment());
    client.get(&path).await
}
