//! pondo - a tiny personal task tracker
//!
//! Initialize a local task store, add tasks, list them, and mark them done.

use clap::error::ErrorKind;
use clap::Parser;
use pondo::cli::{print_usage, Cli};
use pondo::output::emit_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Ignore invalid/huge filters so a bad environment never breaks the CLI.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            // Unknown commands fall back to the usage text.
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
                tracing::debug!(error = %err, "unrecognized invocation, showing usage");
                if let Err(err) = print_usage() {
                    let _ = emit_error("pondo", &err, false);
                    std::process::exit(err.exit_code());
                }
                std::process::exit(0);
            }
            _ => err.exit(),
        },
    };

    let command = cli.command_name();
    let json = cli.json;
    if let Err(err) = cli.run() {
        let _ = emit_error(command, &err, json);
        std::process::exit(err.exit_code());
    }
}
