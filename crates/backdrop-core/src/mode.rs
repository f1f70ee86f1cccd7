//! Animation mode selection.

use serde::{Deserialize, Serialize};

/// Which element model and force rule the engine runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineMode {
    /// Lattice of anchored points displaced away from the pointer.
    #[default]
    Grid,
    /// Free drifting particles attracted to the pointer and linked by edges.
    Particles,
}

impl EngineMode {
    /// Cycle to the next mode.
    pub fn next(self) -> Self {
        match self {
            EngineMode::Grid => EngineMode::Particles,
            EngineMode::Particles => EngineMode::Grid,
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            EngineMode::Grid => "Grid",
            EngineMode::Particles => "Particles",
        }
    }
}
