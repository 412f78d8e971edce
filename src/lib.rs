//! Async Rust client library for the Moki device-management REST API.
//!
//! Provides a validated configuration layer, an authenticated HTTP client,
//! and typed endpoint functions for the tenant-scoped iOS profile,
//! managed-app, and device-action resources.
//!
//! # Modules
//!
//! - [`actions`] — Submit device actions and read their status.
//! - [`client`] — Authenticated HTTP wrapper for the Moki REST API.
//! - [`config`] — Connection parameters, loaded explicitly or from the environment.
//! - [`device`] — Pure UDID/serial-number identifier classification.
//! - [`error`] — Typed error hierarchy (`MokiError`) for all library operations.
//! - [`managed_apps`] — Per-device and tenant-wide managed-app listings.
//! - [`profiles`] — Tenant and per-device iOS configuration profile listings.
//!
//! # Quick Start
//!
//! ```ignore
//! use moki_api::client::MokiClient;
//! use moki_api::config::MokiConfig;
//! use moki_api::profiles::device_profiles;
//!
//! let config = MokiConfig::from_env()?;
//! let client = MokiClient::new(config);
//! let profiles = device_profiles(&client, "ABCDEFGHIJ12").await?;
//! ```

#![warn(missing_docs)]

pub mod actions;
pub mod client;
pub mod config;
pub mod device;
pub mod error;
pub mod managed_apps;
pub mod profiles;
