use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::decoded::lenient;

/// Body of `POST /v1/slots/spin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotsSpinRequest {
    pub amount: u64,
}

/// Response of `POST /v1/slots/spin`.
///
/// Grid and win layouts belong to the server's reel logic and are carried as
/// raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsSpinResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Value>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub line_wins: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scatter_win: Option<Value>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub total_win: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub free_spins: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
