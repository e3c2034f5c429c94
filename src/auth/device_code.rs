use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::decoded::lenient;

/// Body of `POST /v1/device/start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStartRequest {
    pub client_name: String,
    pub requested_handle: String,
    pub public_key: String,
}

/// Body returned by `POST /v1/device/start`.
///
/// `public_key` is not sent by the server; the client fills it in with the
/// key it registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStartResponse {
    pub user_code: String,
    pub device_code: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub verification_url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub poll_interval: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeviceStartResponse {
    /// Snapshot the session a caller needs to drive its own poll loop.
    pub fn session(&self) -> DeviceCodeSession {
        DeviceCodeSession {
            verification_url: self.verification_url.clone(),
            user_code: self.user_code.clone(),
            device_code: self.device_code.clone(),
            interval_secs: self.poll_interval,
            expires_at: self.expires_in.and_then(expiry_from_now),
            public_key: self.public_key.clone(),
        }
    }
}

/// `None` when the lifetime does not fit a timestamp.
fn expiry_from_now(secs: u64) -> Option<DateTime<Utc>> {
    let lifetime = i64::try_from(secs).ok().and_then(Duration::try_seconds)?;
    Utc::now().checked_add_signed(lifetime)
}

/// Device-code session details, as observed by the client.
///
/// The client never enforces `interval_secs` or `expires_at`; they are
/// advisory values for whoever runs the poll loop.
#[derive(Debug, Clone)]
pub struct DeviceCodeSession {
    pub verification_url: Option<String>,
    pub user_code: String,
    pub device_code: String,
    pub interval_secs: Option<u64>,
    pub expires_at: Option<DateTime<Utc>>,
    pub public_key: Option<String>,
}

impl DeviceCodeSession {
    /// Local estimate; the server remains the authority on expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Outcome of a single poll attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DevicePoll {
    /// Not approved yet. Not a failure.
    Pending { interval_secs: Option<u64> },
    /// Terminal success. The token is delivered once.
    Approved { session_token: String },
    Expired,
    Denied,
}

impl DevicePoll {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending { .. })
    }

    /// Classify a poll response body.
    ///
    /// Returns `None` when the body carries no recognisable state, in which
    /// case the caller falls back to ordinary status handling.
    pub fn classify(status: u16, body: &Value) -> Option<Self> {
        let success = (200..300).contains(&status);
        if success {
            if let Some(token) = body.get("sessionToken").and_then(Value::as_str) {
                return Some(Self::Approved {
                    session_token: token.to_string(),
                });
            }
        }

        let marker = ["status", "error", "state"]
            .iter()
            .find_map(|key| state_marker(body.get(*key)?));
        if let Some(marker) = marker {
            match marker.as_str() {
                "pending" | "authorization_pending" | "slow_down" => {
                    return Some(Self::Pending {
                        interval_secs: poll_interval(body),
                    })
                }
                "expired" | "expired_token" => return Some(Self::Expired),
                "denied" | "access_denied" | "rejected" => return Some(Self::Denied),
                _ => {}
            }
        }

        (status == 410).then_some(Self::Expired)
    }
}

fn state_marker(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_ascii_lowercase()),
        Value::Object(obj) => obj
            .get("code")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_ascii_lowercase()),
        _ => None,
    }
}

fn poll_interval(body: &Value) -> Option<u64> {
    body.get("pollInterval")
        .or_else(|| body.get("interval"))
        .and_then(Value::as_u64)
}

/// A classified poll together with the body the server sent.
#[derive(Debug, Clone)]
pub struct DevicePollResponse {
    pub state: DevicePoll,
    pub body: Value,
}
