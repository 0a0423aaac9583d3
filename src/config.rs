use bka::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the stderr logger. Warnings and account diagnostics are shown by default,
/// `RUST_LOG=debug` traces every applied operation.
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .without_timestamps()
        .env()
        .init()?;

    return Ok(());
}
