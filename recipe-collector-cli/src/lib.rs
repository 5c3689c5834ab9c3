//! Wiring shared by the `recipe-agent` and `recipe-mcp-server` binaries:
//! argument parsing, logging setup, startup and transcript rendering.

pub mod args;
pub mod error;
pub mod render;
pub mod run;

pub use args::{AgentArgs, ServerArgs};
pub use error::CliError;
pub use render::render_outcome;
pub use run::{run_agent, run_server};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install the global subscriber once.
///
/// Logs go to stderr: stdout belongs to the transcript or, for the server,
/// to the protocol stream.
pub fn init_tracing(default_directive: &str) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
