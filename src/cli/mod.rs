mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::CliError;

/// Environment variable holding the log filter, e.g. `ASCIILINE_LOG=debug`.
pub const LOG_ENV: &str = "ASCIILINE_LOG";

/// Route `tracing` events to stderr so charts on stdout stay clean.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<(), CliError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot(&a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
