//! Simulation state: viewport, pointer and the element population.

use backdrop_core::{EngineMode, EngineOptions, Pointer, Viewport};
use rand::Rng;

use crate::element::{GridPoint, Particle};
use crate::modes::{grid, particles};

/// Elements of the active mode, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Population {
    Grid(Vec<GridPoint>),
    Particles(Vec<Particle>),
}

impl Default for Population {
    fn default() -> Self {
        Population::Grid(Vec::new())
    }
}

impl Population {
    pub fn len(&self) -> usize {
        match self {
            Population::Grid(points) => points.len(),
            Population::Particles(particles) => particles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    viewport: Viewport,
    pointer: Pointer,
    population: Population,
}

impl SimulationState {
    /// Build a fresh state for `viewport` with no pointer.
    pub fn build<R: Rng + ?Sized>(
        viewport: Viewport,
        options: &EngineOptions,
        rng: &mut R,
    ) -> Self {
        let mut state = Self::default();
        state.rebuild(viewport, options, rng);
        state
    }

    /// Replace the whole population for a new viewport.
    ///
    /// Nothing carries over from the previous elements; the pointer is kept.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        viewport: Viewport,
        options: &EngineOptions,
        rng: &mut R,
    ) {
        self.viewport = viewport;
        self.population = match options.mode {
            EngineMode::Grid => Population::Grid(grid::init_points(viewport, &options.grid)),
            EngineMode::Particles => {
                Population::Particles(particles::init_particles(viewport, &options.particles, rng))
            }
        };
    }

    /// Apply the force rule of the active mode to every element.
    pub fn step(&mut self, options: &EngineOptions) {
        match &mut self.population {
            Population::Grid(points) => grid::update(points, self.pointer, &options.grid),
            Population::Particles(items) => {
                particles::update(items, self.pointer, self.viewport, &options.particles)
            }
        }
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.population = Population::default();
        self.pointer = Pointer::Absent;
    }
}
