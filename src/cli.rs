//! Command-line interface for tictactoe_engine.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe game engine - authoritative game state for display clients
#[derive(Parser, Debug)]
#[command(name = "tictactoe_engine")]
#[command(about = "Authoritative tic-tac-toe engine with an HTTP command surface", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config and TICTACTOE_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and TICTACTOE_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print JSON schemas of the request and snapshot types
    Schema,
}
