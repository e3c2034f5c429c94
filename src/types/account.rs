use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::decoded::lenient;

/// `GET /v1/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub free_spins: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /healthz`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rank: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /v1/leaderboard`: either a bare array or an object wrapping one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Leaderboard {
    Ranked(Vec<LeaderboardEntry>),
    Page(LeaderboardPage),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardPage {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<LeaderboardEntry>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub leaderboard: Option<Vec<LeaderboardEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Leaderboard {
    /// Ranked entries in server order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        match self {
            Self::Ranked(entries) => entries,
            Self::Page(page) => page
                .entries
                .as_deref()
                .or(page.leaderboard.as_deref())
                .unwrap_or_default(),
        }
    }
}
