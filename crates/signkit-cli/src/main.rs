use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use commands::{
    encode::{handle_encode_command, EncodeArgs},
    tokens::{handle_tokens_command, TokensArgs},
};

#[derive(Parser)]
#[command(name = "signkit", version)]
#[command(
    about = "Encode signing certificates and provisioning profiles into JSON for CI secret stores",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    encode: EncodeArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the build-time tokens file
    Tokens(TokensArgs),
}

fn init_tracing() {
    // Diagnostics go to stderr so stdout only carries the success line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present (doesn't override existing env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        None => handle_encode_command(&cli.encode),
        Some(Commands::Tokens(args)) => handle_tokens_command(&args),
    }
}
