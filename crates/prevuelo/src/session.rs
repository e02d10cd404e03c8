//! Per-run session identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier generated once per dashboard session.
///
/// Used only for log and export labeling; the only requirement is an
/// extremely unlikely collision, so base-36 wall-clock milliseconds plus a
/// random suffix suffices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis().unsigned_abs();
        let random = uuid::Uuid::new_v4().as_u128() & 0xffff_ffff;
        Self(format!(
            "PV_{}{}",
            to_base36(u128::from(millis)),
            to_base36(random)
        ))
    }

    /// The identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
