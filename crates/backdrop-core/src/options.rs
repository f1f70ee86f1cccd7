//! Named option sets fixed at engine construction.

use serde::{Deserialize, Serialize};

use crate::{EngineMode, Rgb};

/// Everything an engine is configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub mode: EngineMode,
    /// Color the surface is cleared to; also the blend base for opacity.
    pub background: Rgb,
    /// Seed for particle placement. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub grid: GridOptions,
    pub particles: ParticleOptions,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            mode: EngineMode::default(),
            background: Rgb(246, 244, 238),
            seed: None,
            grid: GridOptions::default(),
            particles: ParticleOptions::default(),
        }
    }
}

/// Displacement grid constants. All motion values are per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Distance between lattice points.
    pub spacing: f64,
    pub point_radius: f64,
    pub interaction_radius: f64,
    /// Fraction of the remaining distance to the target closed each frame.
    pub relaxation: f64,
    /// Push at distance zero, as a fraction of the interaction radius.
    pub displace_strength: f64,
    /// Distance at which point opacity reaches its floor.
    pub opacity_falloff: f64,
    pub min_opacity: f64,
    pub color: Rgb,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            point_radius: 1.5,
            interaction_radius: 200.0,
            relaxation: 0.1,
            displace_strength: 0.5,
            opacity_falloff: 500.0,
            min_opacity: 0.1,
            color: Rgb(20, 60, 40),
        }
    }
}

/// Particle network constants. All motion values are per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleOptions {
    /// Viewport area per spawned particle.
    pub area_per_particle: f64,
    /// Velocity components are drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub interaction_radius: f64,
    /// No attraction closer than this.
    pub dead_zone: f64,
    /// Fraction of the offset to the pointer applied per frame.
    pub attraction: f64,
    pub connection_distance: f64,
    pub color: Rgb,
    pub base_opacity: f64,
    pub pointer_edge_opacity: f64,
    pub pointer_edge_width: f64,
    pub edge_opacity: f64,
    pub edge_width: f64,
    /// Edge style when both endpoints are near the pointer.
    pub active_edge_color: Rgb,
    pub active_edge_opacity: f64,
    pub active_edge_width: f64,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            area_per_particle: 15_000.0,
            max_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            interaction_radius: 200.0,
            dead_zone: 50.0,
            attraction: 0.01,
            connection_distance: 140.0,
            color: Rgb(20, 60, 40),
            base_opacity: 0.5,
            pointer_edge_opacity: 0.4,
            pointer_edge_width: 1.0,
            edge_opacity: 0.15,
            edge_width: 0.5,
            active_edge_color: Rgb(214, 112, 80),
            active_edge_opacity: 0.6,
            active_edge_width: 1.5,
        }
    }
}
