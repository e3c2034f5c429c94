use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use super::decoded::lenient;
use super::Id;

/// Betting action on a joined table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PokerAction {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl PokerAction {
    /// Whether the action carries a chip amount.
    pub fn takes_amount(&self) -> bool {
        matches!(self, Self::Bet | Self::Raise)
    }
}

/// Body of `POST /v1/poker/tables/{id}/join`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokerJoinRequest {
    pub buy_in: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<u32>,
}

/// Body of `POST /v1/poker/tables/{id}/act`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokerActRequest {
    pub action: PokerAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub small_blind: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub big_blind: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /v1/poker/tables`: a bare array or `{"tables": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PokerTables {
    List(Vec<TableSummary>),
    Page(PokerTablesPage),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokerTablesPage {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<TableSummary>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PokerTables {
    pub fn tables(&self) -> &[TableSummary] {
        match self {
            Self::List(tables) => tables,
            Self::Page(page) => page.tables.as_deref().unwrap_or_default(),
        }
    }
}

/// `GET /v1/poker/tables/{id}/state`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokerTableState {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub table_id: Option<Id>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hand_id: Option<Id>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub pot: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub seats: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET /v1/poker/hands/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokerHand {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub table_id: Option<Id>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub winners: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgement returned by join, act and leave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokerAck {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
