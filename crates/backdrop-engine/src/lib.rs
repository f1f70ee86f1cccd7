//! Pointer-reactive background animation engine.
//!
//! One engine runs either a displacement grid or a particle network
//! (see [`EngineMode`]). The host attaches a [`Surface`] to draw on and
//! a [`Host`] that provides the viewport size, frame scheduling and
//! event listeners; everything else is owned by the [`Engine`].

mod driver;
mod element;
mod engine;
mod host;
mod modes;
mod render;
mod state;
mod surface;

pub use backdrop_core::{
    EngineMode, EngineOptions, GridOptions, ParticleOptions, Pointer, Rgb, Viewport,
};
pub use driver::FrameDriver;
pub use element::{GridPoint, Particle};
pub use engine::{Engine, Phase};
pub use host::{FrameRequest, Host, HostEvent, Listener};
pub use modes::{grid, particles};
pub use render::render;
pub use state::{Population, SimulationState};
pub use surface::{CanvasSurface, DrawCommand, Surface};
