//! Logging initialization.

use tracing::Level;
use tracing_subscriber::fmt;

use crate::args::LogLevel;

/// Installs a fmt subscriber at `level`.
///
/// Logs are written to stderr so stdout stays clean for program output.
pub fn init_logging(level: LogLevel) {
    let level: Level = level.into();

    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
