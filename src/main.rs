//! Clawsino CLI binary entry point.

use clap::Parser;
use clawsino::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli::init_tracing();

    let code = cli::exit_code(cli::run(cli).await);
    std::process::exit(code);
}
