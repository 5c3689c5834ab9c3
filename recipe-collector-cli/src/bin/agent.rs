//! `recipe-agent`: one agent run against the recipe collection.

use clap::Parser;
use recipe_collector_cli::{AgentArgs, init_tracing, render_outcome, run_agent};
use tracing::error;

#[tokio::main]
async fn main() {
    let args = AgentArgs::parse();
    init_tracing("warn");

    match run_agent(&args).await {
        Ok(outcome) => print!("{}", render_outcome(&args.prompt, &outcome)),
        Err(err) => {
            error!(%err, "Agent run failed");
            eprintln!("Error: {}", err.user_message());
            std::process::exit(1);
        }
    }
}
