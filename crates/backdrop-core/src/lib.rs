//! Core types shared by the backdrop crates.
//!
//! Geometry (viewport and pointer), colors, the animation mode and the
//! named option sets an engine is constructed with.

mod color;
mod geometry;
mod mode;
mod options;

pub use color::Rgb;
pub use geometry::{Pointer, Viewport};
pub use mode::EngineMode;
pub use options::{EngineOptions, GridOptions, ParticleOptions};
