//! `recipe-mcp-server`: recipe tools for MCP clients over stdio.

use clap::Parser;
use recipe_collector_cli::{ServerArgs, init_tracing, run_server};
use tracing::error;

#[tokio::main]
async fn main() {
    let args = ServerArgs::parse();
    init_tracing("info");

    if let Err(err) = run_server(&args).await {
        error!(%err, "Fatal error in main()");
        std::process::exit(1);
    }
}
