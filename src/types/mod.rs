//! Request and response models for every operation.
//!
//! Response structs type the fields the client knows about and keep
//! everything else in an `extra` map. Server-owned fields are read leniently:
//! a field of an unexpected type is `None` in the typed view. The client hands
//! responses back as [`Decoded`] values, which also keep the body verbatim.

pub mod account;
pub mod decoded;
pub mod dice;
pub mod poker;
pub mod slots;

pub use account::{Account, HealthStatus, Leaderboard, LeaderboardEntry, LeaderboardPage};
pub use decoded::Decoded;
pub use dice::{DiceBetRequest, DiceBetResult, DiceMode, DiceOutcome};
pub use poker::{
    PokerAck, PokerActRequest, PokerAction, PokerHand, PokerJoinRequest, PokerTableState,
    PokerTables, PokerTablesPage, TableSummary,
};
pub use slots::{SlotsSpinRequest, SlotsSpinResult};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier; tables and hands may use strings or numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(u64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
