use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use client_core::{BoardPage, HttpMoveChannel, SelectionController, RESULTS_PATH};
use shared::domain::CellId;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    server_url: String,
}

/// Renders the three page primitives as terminal output.
struct TerminalPage;

#[async_trait]
impl BoardPage for TerminalPage {
    async fn notify(&self, message: &str) {
        println!("*** {message}");
    }

    async fn reload(&self) {
        println!("(board changed; refresh it from the server)");
    }

    async fn navigate_to_results(&self) {
        println!("(game finished; open {RESULTS_PATH} for the outcome)");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let channel = Arc::new(HttpMoveChannel::new(&args.server_url)?);
    let controller = SelectionController::new(channel, Arc::new(TerminalPage));
    info!(server_url = %args.server_url, "move client ready");

    println!("Enter one cell id per line; two lines make a move (e.g. e2 then e4). Ctrl-D quits.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let id = line.trim();
        if id.is_empty() {
            continue;
        }
        controller.on_cell_clicked(CellId::from(id)).await;
    }

    Ok(())
}
