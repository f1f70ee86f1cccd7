//! Simulated elements.

/// A lattice point that relaxes back to its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    /// Rest position; never changes after creation.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Distance to the pointer measured at the start of the last step.
    pub pointer_distance: f64,
}

impl GridPoint {
    /// A point resting at its anchor.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            origin_x: x,
            origin_y: y,
            pointer_distance: f64::INFINITY,
        }
    }

    pub fn distance_to_anchor(&self) -> f64 {
        (self.x - self.origin_x).hypot(self.y - self.origin_y)
    }
}

/// A drifting particle bounded by the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}
