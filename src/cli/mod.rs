//! Command-line surface: one subcommand per API operation.

pub mod errors;
pub mod output;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::auth::DevicePoll;
use crate::client::{ClawsinoClient, Operation, Response};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::{DiceBetRequest, DiceMode, PokerAction};

/// Clawsino casino API client
#[derive(Parser, Debug)]
#[command(name = "clawsino", version, about = "Clawsino casino API client")]
pub struct Cli {
    /// API base URL (overrides CLAWSINO_BASE_URL)
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Session token (overrides CLAWSINO_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Add the session owner's handle to the output (one extra request)
    #[arg(long, global = true)]
    pub show_handle: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check service health
    Healthz,
    /// Show the account behind the session token
    Me,
    /// Show the leaderboard
    Leaderboard(LeaderboardArgs),
    /// Start device authorization
    DeviceStart(DeviceStartArgs),
    /// Poll device authorization once
    DevicePoll(DevicePollArgs),
    /// Place a dice bet
    Dice(DiceArgs),
    /// Spin the slots
    Slots(SlotsArgs),
    /// List poker tables
    PokerTables,
    /// Join a poker table
    PokerJoin(PokerJoinArgs),
    /// Show a poker table's state
    PokerState(TableArgs),
    /// Act at a poker table
    PokerAct(PokerActArgs),
    /// Leave a poker table
    PokerLeave(TableArgs),
    /// Show a finished poker hand
    PokerHand(PokerHandArgs),
}

#[derive(Args, Debug)]
pub struct LeaderboardArgs {
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

#[derive(Args, Debug)]
pub struct DeviceStartArgs {
    #[arg(long, default_value = "openclaw")]
    pub client_name: String,

    /// Requested handle for the new account
    #[arg(long, default_value = "openclaw-bot")]
    pub handle: String,

    /// Base64 Ed25519 public key to register instead of a fresh one
    #[arg(long)]
    pub public_key: Option<String>,
}

#[derive(Args, Debug)]
pub struct DevicePollArgs {
    #[arg(long)]
    pub device_code: String,
}

#[derive(Args, Debug)]
pub struct DiceArgs {
    #[arg(long)]
    pub amount: u64,

    /// under | over
    #[arg(long)]
    pub mode: DiceMode,

    #[arg(long)]
    pub threshold: f64,

    /// House edge in basis points
    #[arg(long = "edge-bps", alias = "edgeBps")]
    pub edge_bps: Option<u32>,

    #[arg(long = "client-seed", alias = "clientSeed")]
    pub client_seed: Option<String>,
}

#[derive(Args, Debug)]
pub struct SlotsArgs {
    #[arg(long)]
    pub amount: u64,
}

#[derive(Args, Debug)]
pub struct TableArgs {
    #[arg(long)]
    pub table: String,
}

#[derive(Args, Debug)]
pub struct PokerJoinArgs {
    #[arg(long)]
    pub table: String,

    #[arg(long)]
    pub buyin: u64,

    /// Preferred seat; the server picks one when omitted
    #[arg(long)]
    pub seat: Option<u32>,
}

#[derive(Args, Debug)]
pub struct PokerActArgs {
    #[arg(long)]
    pub table: String,

    /// fold | check | call | bet | raise
    #[arg(long)]
    pub action: PokerAction,

    /// Chips for bet/raise
    #[arg(long)]
    pub amount: Option<u64>,
}

#[derive(Args, Debug)]
pub struct PokerHandArgs {
    #[arg(long)]
    pub hand: String,
}

impl Cli {
    /// Environment first, then explicit flags on top.
    pub fn client_config(&self) -> ClientConfig {
        let mut config =
            ClientConfig::from_env().with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(base) = &self.base {
            config = config.with_base_url(base.as_str());
        }
        if let Some(token) = &self.token {
            config = config.with_token(token.as_str());
        }
        config
    }

    pub fn operation(&self) -> Operation {
        match &self.command {
            Commands::Healthz => Operation::Health,
            Commands::Me => Operation::Me,
            Commands::Leaderboard(args) => Operation::Leaderboard { limit: args.limit },
            Commands::DeviceStart(args) => Operation::DeviceStart {
                client_name: args.client_name.clone(),
                handle: args.handle.clone(),
                public_key: args.public_key.clone(),
            },
            Commands::DevicePoll(args) => Operation::DevicePoll {
                device_code: args.device_code.clone(),
            },
            Commands::Dice(args) => Operation::DiceBet(
                DiceBetRequest::builder()
                    .amount(args.amount)
                    .mode(args.mode)
                    .threshold(args.threshold)
                    .maybe_client_seed(args.client_seed.clone())
                    .maybe_edge_bps(args.edge_bps)
                    .build(),
            ),
            Commands::Slots(args) => Operation::SlotsSpin {
                amount: args.amount,
            },
            Commands::PokerTables => Operation::PokerTables,
            Commands::PokerJoin(args) => Operation::PokerJoin {
                table: args.table.clone(),
                buy_in: args.buyin,
                seat: args.seat,
            },
            Commands::PokerState(args) => Operation::PokerState {
                table: args.table.clone(),
            },
            Commands::PokerAct(args) => Operation::PokerAct {
                table: args.table.clone(),
                action: args.action,
                amount: args.amount,
            },
            Commands::PokerLeave(args) => Operation::PokerLeave {
                table: args.table.clone(),
            },
            Commands::PokerHand(args) => Operation::PokerHand {
                hand: args.hand.clone(),
            },
        }
    }
}

/// Run the parsed command and print its output. Returns the exit code.
pub async fn run(cli: Cli) -> Result<i32> {
    let client = ClawsinoClient::new(cli.client_config())?;
    let operation = cli.operation();
    let annotate = cli.show_handle
        && client.config().token().is_some()
        && !matches!(operation, Operation::Me | Operation::DevicePoll { .. });

    let response = client.execute(operation).await?;
    let mut value = response.to_json()?;

    if annotate {
        // Best effort: a failed lookup leaves the output unannotated.
        match client.me().await {
            Ok(me) => {
                if let Some(handle) = me.handle.as_deref() {
                    value = output::with_handle(value, handle);
                }
            }
            Err(e) => tracing::debug!(error = %e, "handle lookup failed"),
        }
    }

    println!("{}", output::render(&value)?);

    if let Response::DevicePoll(poll) = &response {
        match poll.state {
            DevicePoll::Expired => {
                eprintln!("Device code expired; run device-start again");
                return Ok(1);
            }
            DevicePoll::Denied => {
                eprintln!("Device authorization denied");
                return Ok(1);
            }
            _ => {}
        }
    }
    Ok(0)
}

/// Exit code for the outcome of [`run`]. Errors are reported on stderr.
pub fn exit_code(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error_help(&e));
            1
        }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
