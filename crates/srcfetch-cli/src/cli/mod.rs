use clap::{Parser, ValueEnum};
use srcfetch_core::clone::GitCli;
use srcfetch_core::fetch::{FetchSummary, FetchTask};
use srcfetch_core::model::{FetchParams, connection_icon, connection_metadata};
use srcfetch_core::progress::{ProgressReporter, ProgressUpdate};
use srcfetch_providers::bybit::{BybitP2pClient, P2pQuery, TradeSide};
use srcfetch_providers::codecommit::StaticRepoLister;
use std::cell::Cell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

mod args;
mod p2p_cmd;
mod sync_cmd;

use args::*;
use p2p_cmd::handle_p2p;
use sync_cmd::handle_sync;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    info!(command = command_label(&cli.command), "running command");
    match cli.command {
        Commands::Sync(args) => handle_sync(args),
        Commands::P2p(args) => handle_p2p(args),
        Commands::Connection(args) => handle_connection(args),
    }
}

fn command_label(command: &Commands) -> &'static str {
    match command {
        Commands::Sync(_) => "sync",
        Commands::P2p(_) => "p2p",
        Commands::Connection(_) => "connection",
    }
}

fn handle_connection(args: ConnectionArgs) -> anyhow::Result<()> {
    if args.icon {
        println!("{}", connection_icon());
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(&connection_metadata())?);
    Ok(())
}
