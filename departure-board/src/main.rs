use std::io;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use departure_board::config::BoardConfig;
use departure_board::session::Session;

fn main() -> ExitCode {
    let config = BoardConfig::from_env();

    // RUST_LOG wins over the configured default
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    debug!(?config, "starting departure board");

    let stdin = io::stdin();
    let mut session = Session::new(config, stdin.lock(), io::stdout(), io::stderr());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fatal I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
