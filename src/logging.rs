use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::{GameError, GameResult};

/// Installs a file-backed subscriber if a log file is configured.
///
/// The terminal is in raw mode while the game runs, so nothing is logged to
/// stdout or stderr. The filter comes from `PACMAN_LOG`, defaulting to `info`.
pub fn init(settings: &Settings) -> GameResult<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env("PACMAN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(())
}
