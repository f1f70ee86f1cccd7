//! Frame rendering.

use backdrop_core::EngineOptions;
use tracing::trace;

use crate::modes::{grid, particles};
use crate::state::{Population, SimulationState};
use crate::surface::Surface;

/// Draw one frame of `state` onto `surface`.
///
/// Does nothing when the surface is unavailable.
pub fn render<S: Surface + ?Sized>(
    state: &SimulationState,
    options: &EngineOptions,
    surface: &mut S,
) {
    if !surface.is_available() {
        trace!("surface unavailable, skipping frame");
        return;
    }

    let size = surface.size();
    surface.clear(0.0, 0.0, size.width as f64, size.height as f64);

    match state.population() {
        Population::Grid(points) => grid::render(points, &options.grid, surface),
        Population::Particles(items) => {
            particles::render(items, state.pointer(), &options.particles, surface)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{CanvasSurface, DrawCommand};
    use backdrop_core::{EngineMode, Pointer, Rgb, Viewport};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_unavailable_surface_is_noop() {
        let opts = EngineOptions::default();
        let mut rng = StdRng::seed_from_u64(3);
        let state = SimulationState::build(Viewport::new(800, 600), &opts, &mut rng);
        let mut surface = CanvasSurface::new(opts.background);
        render(&state, &opts, &mut surface);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_grid_frame_replaces_previous() {
        let opts = EngineOptions::default();
        let mut rng = StdRng::seed_from_u64(3);
        let state = SimulationState::build(Viewport::new(800, 600), &opts, &mut rng);
        let mut surface = CanvasSurface::new(opts.background);
        surface.set_size(Viewport::new(800, 600));

        render(&state, &opts, &mut surface);
        render(&state, &opts, &mut surface);
        assert_eq!(surface.commands().len(), 300);
    }

    #[test]
    fn test_grid_points_fade_with_distance() {
        let opts = EngineOptions::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = SimulationState::build(Viewport::new(80, 40), &opts, &mut rng);
        state.set_pointer(Pointer::at(0.0, 0.0));
        state.step(&opts);
        let mut surface = CanvasSurface::new(Rgb(255, 255, 255));
        surface.set_size(Viewport::new(80, 40));
        render(&state, &opts, &mut surface);

        let colors: Vec<Rgb> = surface
            .commands()
            .iter()
            .map(|c| match *c {
                DrawCommand::Circle { color, .. } => color,
                DrawCommand::Line { color, .. } => color,
            })
            .collect();
        // (0,0) under the pointer is fully opaque, (40,0) is lighter
        assert_eq!(colors[0], opts.grid.color);
        assert_ne!(colors[1], opts.grid.color);
    }

    #[test]
    fn test_particle_frame_draws_edges_and_dots() {
        let opts = EngineOptions {
            mode: EngineMode::Particles,
            ..EngineOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = SimulationState::build(Viewport::new(800, 600), &opts, &mut rng);
        state.set_pointer(Pointer::at(400.0, 300.0));
        let mut surface = CanvasSurface::new(opts.background);
        surface.set_size(Viewport::new(800, 600));
        render(&state, &opts, &mut surface);

        let circles = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        let lines = surface.commands().len() - circles;
        assert_eq!(circles, state.population().len());
        assert!(lines <= circles * (circles - 1) / 2 + circles);
    }
}
