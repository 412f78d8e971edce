//! Device-identifier classification.
//!
//! The Moki API addresses a device by one of two identifier shapes:
//!
//! - **UDID** — 36 characters, hyphenated hex groups 8-4-4-4-12
//!   (e.g. `abcd1234-1234-1234-1234-abcdef123456`). Used verbatim in paths.
//! - **Serial number** — a short alphanumeric token (8–16 characters,
//!   e.g. `ABCDEFGHIJ12`). Rendered into paths as `sn-!-{SERIAL}` with the
//!   serial uppercased.
//!
//! [`DeviceId::parse`] is a pure function with no I/O: classification (and
//! rejection of anything that matches neither shape) happens before a URL is
//! ever built, so an invalid identifier never produces an HTTP request.
//! Callers may also pass an already-rendered `sn-!-...` token; it is accepted
//! as a serial and not re-prefixed.

use std::fmt;

use crate::error::{MokiError, Result};

/// Path prefix marking a serial-number device identifier.
const SERIAL_PREFIX: &str = "sn-!-";

/// A classified device identifier, ready to be rendered into an API path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceId {
    /// A unique device identifier (hyphenated hex groups 8-4-4-4-12).
    Udid(String),
    /// A device serial number, stored uppercased without the `sn-!-` prefix.
    Serial(String),
}

impl DeviceId {
    /// Classifies a raw identifier string as a UDID or serial number.
    ///
    /// Accepted inputs, in match order:
    /// 1. `sn-!-{SERIAL}` — an already-rendered serial token.
    /// 2. A UDID-shaped string.
    /// 3. A bare serial-shaped string.
    ///
    /// # Errors
    ///
    /// `MokiError::InvalidIdentifier` when the input matches none of the
    /// above (e.g. `"ermishness-nope"`).
    pub fn parse(value: &str) -> Result<DeviceId> {
        if let Some(serial) = value.strip_prefix(SERIAL_PREFIX) {
            if is_serial_shaped(serial) {
                return Ok(DeviceId::Serial(serial.to_ascii_uppercase()));
            }
        } else if is_udid_shaped(value) {
            return Ok(DeviceId::Udid(value.to_string()));
        } else if is_serial_shaped(value) {
            return Ok(DeviceId::Serial(value.to_ascii_uppercase()));
        }

        Err(MokiError::InvalidIdentifier {
            value: value.to_string(),
        })
    }

    /// Renders the identifier as the `{id}` path segment expected by the
    /// `/devices/{id}/...` endpoints.
    ///
    /// UDIDs pass through verbatim; serials gain the `sn-!-` prefix. Parsing
    /// followed by rendering is idempotent: an input that already carried the
    /// prefix renders back to itself.
    pub fn path_segment(&self) -> String {
        match self {
            DeviceId::Udid(udid) => udid.clone(),
            DeviceId::Serial(serial) => format!("{SERIAL_PREFIX}{serial}"),
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_segment())
    }
}

/// UDID shape: 36 chars, hyphens at positions 8, 13, 18, 23, hex everywhere
/// else. Case-insensitive, matching what devices actually report.
fn is_udid_shaped(value: &str) -> bool {
    if value.len() != 36 {
        return false;
    }
    value.chars().enumerate().all(|(i, c)| match i {
        8 | 13 | 18 | 23 => c == '-',
        _ => c.is_ascii_hexdigit(),
    })
}

/// Serial shape: 8–16 ASCII alphanumeric characters, no separators.
fn is_serial_shaped(value: &str) -> bool {
    (8..=16).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphanumeric())
}
