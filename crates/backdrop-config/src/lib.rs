//! Configuration file loading for the backdrop terminal host.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use backdrop_core::EngineOptions;
use directories::ProjectDirs;
use serde::Deserialize;

pub use error::ConfigError;

/// Log levels accepted in `[log].level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level configuration. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineOptions,
    pub display: DisplayConfig,
    pub log: LogConfig,
}

/// How the terminal host maps cells to surface pixels and paces frames.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target frames per second.
    pub fps: u32,
    /// Surface pixels per terminal cell, horizontally.
    pub cell_width: u32,
    /// Surface pixels per terminal cell, vertically.
    pub cell_height: u32,
    /// Show the foreground title and help line.
    pub show_overlay: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            cell_width: 10,
            cell_height: 20,
            show_overlay: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Log file; defaults to `backdrop.log` in the data directory.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "backdrop")
    }

    /// Default config file location, if a home directory is known.
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Directory for the log file and other runtime data.
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load from the default location. Missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine or host cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.engine.grid;
        let particles = &self.engine.particles;

        positive("engine.grid.spacing", grid.spacing)?;
        positive("engine.grid.interaction_radius", grid.interaction_radius)?;
        positive("engine.grid.opacity_falloff", grid.opacity_falloff)?;
        if !(grid.relaxation > 0.0 && grid.relaxation <= 1.0) {
            return Err(ConfigError::invalid(
                "engine.grid.relaxation",
                format!("must be in (0, 1], got {}", grid.relaxation),
            ));
        }

        positive("engine.particles.area_per_particle", particles.area_per_particle)?;
        positive("engine.particles.interaction_radius", particles.interaction_radius)?;
        positive("engine.particles.connection_distance", particles.connection_distance)?;
        non_negative("engine.particles.max_speed", particles.max_speed)?;
        if !(2.0 * particles.max_speed).is_finite() {
            return Err(ConfigError::invalid(
                "engine.particles.max_speed",
                format!("velocity range overflows, got {}", particles.max_speed),
            ));
        }
        non_negative("engine.particles.min_radius", particles.min_radius)?;
        non_negative("engine.particles.max_radius", particles.max_radius)?;
        if particles.min_radius > particles.max_radius {
            return Err(ConfigError::invalid(
                "engine.particles.min_radius",
                "must not exceed max_radius",
            ));
        }

        if self.display.fps == 0 {
            return Err(ConfigError::invalid("display.fps", "must be at least 1"));
        }
        if self.display.cell_width == 0 || self.display.cell_height == 0 {
            return Err(ConfigError::invalid("display.cell_width", "cell size must be non-zero"));
        }

        if !LOG_LEVELS.contains(&self.log.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "log.level",
                format!("expected one of {}, got {:?}", LOG_LEVELS.join(", "), self.log.level),
            ));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be finite and non-negative, got {value}"),
        ))
    }
}
