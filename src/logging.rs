use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Where log lines go.
pub enum LogTarget<'a> {
    /// Append to a file. Used while the terminal UI owns the screen.
    File(&'a Path),
    Stderr,
    /// No subscriber at all.
    Off,
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(target: LogTarget<'_>) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogTarget::Stderr => {
            fmt().with_env_filter(filter).with_writer(io::stderr).init();
        }
        LogTarget::Off => {}
    }

    Ok(())
}
