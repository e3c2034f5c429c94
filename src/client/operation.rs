//! Tagged dispatch over every operation the client supports.

use serde_json::Value;

use super::ClawsinoClient;
use crate::auth::{DevicePollResponse, DeviceStartResponse};
use crate::error::Result;
use crate::types::{
    Account, Decoded, DiceBetRequest, DiceBetResult, HealthStatus, Leaderboard, PokerAck, PokerAction,
    PokerHand, PokerTableState, PokerTables, SlotsSpinResult,
};

/// A single call against the API, with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Health,
    Me,
    Leaderboard {
        limit: u32,
    },
    DiceBet(DiceBetRequest),
    SlotsSpin {
        amount: u64,
    },
    PokerTables,
    PokerJoin {
        table: String,
        buy_in: u64,
        seat: Option<u32>,
    },
    PokerState {
        table: String,
    },
    PokerAct {
        table: String,
        action: PokerAction,
        amount: Option<u64>,
    },
    PokerLeave {
        table: String,
    },
    PokerHand {
        hand: String,
    },
    DeviceStart {
        client_name: String,
        handle: String,
        /// Reuse this key instead of generating a fresh one.
        public_key: Option<String>,
    },
    DevicePoll {
        device_code: String,
    },
}

impl Operation {
    /// Command name, as used on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Health => "healthz",
            Self::Me => "me",
            Self::Leaderboard { .. } => "leaderboard",
            Self::DiceBet(_) => "dice",
            Self::SlotsSpin { .. } => "slots",
            Self::PokerTables => "poker-tables",
            Self::PokerJoin { .. } => "poker-join",
            Self::PokerState { .. } => "poker-state",
            Self::PokerAct { .. } => "poker-act",
            Self::PokerLeave { .. } => "poker-leave",
            Self::PokerHand { .. } => "poker-hand",
            Self::DeviceStart { .. } => "device-start",
            Self::DevicePoll { .. } => "device-poll",
        }
    }

    /// Whether the call must carry a session token.
    pub fn requires_token(&self) -> bool {
        !matches!(
            self,
            Self::Health | Self::Leaderboard { .. } | Self::DeviceStart { .. } | Self::DevicePoll { .. }
        )
    }
}

/// Typed result of an [`Operation`], one variant per operation.
#[derive(Debug, Clone)]
pub enum Response {
    Health(Decoded<HealthStatus>),
    Me(Decoded<Account>),
    Leaderboard(Decoded<Leaderboard>),
    DiceBet(Decoded<DiceBetResult>),
    SlotsSpin(Decoded<SlotsSpinResult>),
    PokerTables(Decoded<PokerTables>),
    PokerJoin(Decoded<PokerAck>),
    PokerState(Decoded<PokerTableState>),
    PokerAct(Decoded<PokerAck>),
    PokerLeave(Decoded<PokerAck>),
    PokerHand(Decoded<PokerHand>),
    DeviceStart(Decoded<DeviceStartResponse>),
    DevicePoll(DevicePollResponse),
}

impl Response {
    /// The body the server sent, unchanged (plus `publicKey` for device
    /// starts).
    pub fn to_json(&self) -> Result<Value> {
        let value = match self {
            Self::Health(v) => v.raw(),
            Self::Me(v) => v.raw(),
            Self::Leaderboard(v) => v.raw(),
            Self::DiceBet(v) => v.raw(),
            Self::SlotsSpin(v) => v.raw(),
            Self::PokerTables(v) => v.raw(),
            Self::PokerJoin(v) | Self::PokerAct(v) | Self::PokerLeave(v) => v.raw(),
            Self::PokerState(v) => v.raw(),
            Self::PokerHand(v) => v.raw(),
            Self::DeviceStart(v) => v.raw(),
            Self::DevicePoll(v) => &v.body,
        };
        Ok(value.clone())
    }
}

impl ClawsinoClient {
    /// Run one operation.
    pub async fn execute(&self, operation: Operation) -> Result<Response> {
        let response = match operation {
            Operation::Health => Response::Health(self.health().await?),
            Operation::Me => Response::Me(self.me().await?),
            Operation::Leaderboard { limit } => Response::Leaderboard(self.leaderboard(limit).await?),
            Operation::DiceBet(request) => Response::DiceBet(self.dice_bet(&request).await?),
            Operation::SlotsSpin { amount } => Response::SlotsSpin(self.slots_spin(amount).await?),
            Operation::PokerTables => Response::PokerTables(self.poker_tables().await?),
            Operation::PokerJoin {
                table,
                buy_in,
                seat,
            } => Response::PokerJoin(self.poker_join(&table, buy_in, seat).await?),
            Operation::PokerState { table } => Response::PokerState(self.poker_state(&table).await?),
            Operation::PokerAct {
                table,
                action,
                amount,
            } => Response::PokerAct(self.poker_act(&table, action, amount).await?),
            Operation::PokerLeave { table } => Response::PokerLeave(self.poker_leave(&table).await?),
            Operation::PokerHand { hand } => Response::PokerHand(self.poker_hand(&hand).await?),
            Operation::DeviceStart {
                client_name,
                handle,
                public_key: Some(key),
            } => Response::DeviceStart(
                self.device_start_with_public_key(&client_name, &handle, &key)
                    .await?,
            ),
            Operation::DeviceStart {
                client_name,
                handle,
                public_key: None,
            } => Response::DeviceStart(self.device_start(&client_name, &handle).await?),
            Operation::DevicePoll { device_code } => {
                Response::DevicePoll(self.device_poll(&device_code).await?)
            }
        };
        Ok(response)
    }
}
