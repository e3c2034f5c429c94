//! Clawsino: thin client for the Clawsino casino API
//!
//! Builds authenticated requests for each documented endpoint, runs the
//! device-authorization handshake and hands server responses back as typed
//! values. All game logic lives server-side.
//!
//! # Quick Start
//!
//! ```no_run
//! use clawsino::prelude::*;
//!
//! # async fn example() -> clawsino::error::Result<()> {
//! let client = ClawsinoClient::new(ClientConfig::from_env())?;
//! let start = client.device_start("openclaw", "openclaw-bot").await?;
//! println!("Approve code {} at {:?}", start.user_code, start.verification_url);
//!
//! match client.device_poll(&start.device_code).await?.state {
//!     DevicePoll::Approved { session_token } => println!("token: {session_token}"),
//!     other => println!("not yet: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod prelude;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
