//! Managed applications.
//!
//! This module covers the managed-app endpoint family:
//!
//! - [`device_managed_apps`] — list the managed apps installed on one device,
//!   GET `/devices/{id}/managedapps`.
//! - [`tenant_managed_apps`] — list the managed apps defined for the tenant,
//!   GET `/iosmanagedapps`.
//!
//! The two paths are spelled differently on the wire (`managedapps` vs
//! `iosmanagedapps`); that spelling is part of the API contract and is
//! preserved exactly.

use serde::{Deserialize, Serialize};

use crate::client::MokiClient;
use crate::device::DeviceId;
use crate::error::Result;

// ── Response types ─────────────────────────────────────────────────────

/// A managed application entry as returned by the Moki API.
///
/// Field names use camelCase to match the API contract. Only `id` is
/// guaranteed; the API omits the rest depending on app source and install
/// state. Unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedApp {
    /// Unique identifier assigned to this app entry by the API.
    pub id: String,

    /// Display name of the application.
    #[serde(default)]
    pub name: Option<String>,

    /// Reverse-DNS bundle identifier (e.g. `"com.example.kiosk"`).
    #[serde(default)]
    pub bundle_id: Option<String>,

    /// iTunes Store numeric identifier, present for App Store apps.
    #[serde(default)]
    pub itunes_store_id: Option<i64>,

    /// Installed app version string.
    #[serde(default)]
    pub version: Option<String>,

    /// Management state reported by the device (e.g. `"Managed"`,
    /// `"ManagedButUninstalled"`).
    #[serde(default)]
    pub status: Option<String>,

    /// MDM management flags bitmask (remove-on-unenroll, backup policy).
    #[serde(default)]
    pub management_flags: Option<i64>,
}

// ── Endpoint functions ─────────────────────────────────────────────────

/// Lists the managed apps installed on a single device.
///
/// `device_id` may be a UDID, a bare serial number, or an already-rendered
/// `sn-!-` token; it is classified before any request is made.
///
/// # Errors
///
/// - `MokiError::InvalidIdentifier` — `device_id` matches neither shape;
///   no request is issued.
/// - `MokiError::Api` — the API returned a non-success status.
/// - `MokiError::Network` — transport-level failure.
/// - `MokiError::Parse` — the response body was not valid JSON.
pub async fn device_managed_apps(client: &MokiClient, device_id: &str) -> Result<Vec<ManagedApp>> {
    let device = DeviceId::parse(device_id)?;
    let path = format!("/devices/{}/managedapps", device.path_segment());
    client.get(&path).await
}

/// Lists the managed apps defined for the tenant.
///
/// Issues GET `/iosmanagedapps` (distinct spelling from the per-device
/// endpoint) and returns the apps in API order.
///
/// # Errors
///
/// - `MokiError::Api` / `MokiError::Network` / `MokiError::Parse` — as for
///   [`device_managed_apps`].
pub async fn tenant_managed_apps(client: &MokiClient) -> Result<Vec<ManagedApp>> {
    client.get("/iosmanagedapps").await
}
