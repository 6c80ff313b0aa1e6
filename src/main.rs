//! Tic-tac-toe engine - CLI entry point

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{AppState, GameEngine, GameSnapshot, MakeMoveRequest, ServerConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => {
            let config = ServerConfig::load(config.as_deref())?.with_overrides(host, port);
            run_http_server(config).await
        }
        Command::Schema => print_schemas(),
    }
}

/// Run the HTTP game server
async fn run_http_server(config: ServerConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    info!(address = %config.bind_address(), "Starting tic-tac-toe engine on HTTP");

    let state = AppState::new(GameEngine::new());
    tictactoe_engine::serve(&config, state).await?;
    Ok(())
}

/// Print the JSON schemas display clients build against
#[instrument]
fn print_schemas() -> Result<()> {
    let schemas = serde_json::json!({
        "GameSnapshot": schemars::schema_for!(GameSnapshot),
        "MakeMoveRequest": schemars::schema_for!(MakeMoveRequest),
    });
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
