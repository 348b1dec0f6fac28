use std::process::ExitCode;

fn main() -> ExitCode {
    asciiline::cli::init_logging();
    match asciiline::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
