//! Convenience re-exports for common use.

pub use crate::auth::{DeviceKeyPair, DevicePoll, DeviceStartResponse};
pub use crate::client::{ClawsinoClient, Operation, Response};
pub use crate::config::ClientConfig;
pub use crate::error::{ClawsinoError, Result};
pub use crate::types::{Decoded, DiceBetRequest, DiceMode, PokerAction};
