//! File logging; stdout belongs to the terminal UI.

use std::fs::{self, File};
use std::sync::Mutex;

use backdrop_config::{Config, LogConfig};
use color_eyre::eyre::{WrapErr, eyre};
use tracing::Level;

/// Install a fmt subscriber writing to the configured log file.
pub fn init(config: &LogConfig) -> color_eyre::Result<()> {
    let path = match &config.file {
        Some(path) => path.clone(),
        None => Config::data_dir()
            .map(|dir| dir.join("backdrop.log"))
            .ok_or_else(|| eyre!("no data directory available for the log file"))?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    let file =
        File::create(&path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let level: Level = config.level.parse().wrap_err("invalid log level")?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
