use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use super::decoded::lenient;
use crate::error::{ClawsinoError, Result};

/// Which side of the threshold the roll must land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DiceMode {
    Under,
    Over,
}

/// Body of `POST /v1/dice/bet`.
///
/// # Example
/// ```
/// use clawsino::types::{DiceBetRequest, DiceMode};
///
/// let bet = DiceBetRequest::builder()
///     .amount(100)
///     .mode(DiceMode::Under)
///     .threshold(49.5)
///     .build();
/// assert!(bet.client_seed.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceBetRequest {
    pub amount: u64,
    pub mode: DiceMode,
    pub threshold: f64,
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_seed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_bps: Option<u32>,
}

impl DiceBetRequest {
    /// Type-level checks only; game rules are enforced by the server.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(ClawsinoError::InvalidArgument(format!(
                "threshold must be a finite number, got {}",
                self.threshold
            )));
        }
        if self.client_seed.as_deref().is_some_and(|s| s.is_empty()) {
            return Err(ClawsinoError::InvalidArgument(
                "client seed must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceOutcome {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub roll: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub win: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub payout: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `POST /v1/dice/bet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceBetResult {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub outcome: Option<DiceOutcome>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiceBetResult {
    pub fn won(&self) -> bool {
        self.outcome
            .as_ref()
            .and_then(|o| o.win)
            .unwrap_or(false)
    }
}
