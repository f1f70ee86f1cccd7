//! Viewport and pointer geometry in surface space.

/// Size of the drawing area in surface pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// True when the viewport has no drawable area.
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }
}

/// Latest pointer position in surface-local coordinates.
///
/// `Absent` behaves exactly like a pointer infinitely far away: every
/// distance to it is `f64::INFINITY`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Pointer {
    #[default]
    Absent,
    At { x: f64, y: f64 },
}

impl Pointer {
    pub fn at(x: f64, y: f64) -> Self {
        Pointer::At { x, y }
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        match *self {
            Pointer::Absent => None,
            Pointer::At { x, y } => Some((x, y)),
        }
    }

    /// Euclidean distance from `(x, y)` to the pointer.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        match *self {
            Pointer::Absent => f64::INFINITY,
            Pointer::At { x: px, y: py } => (px - x).hypot(py - y),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Pointer::Absent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_area() {
        assert_eq!(Viewport::new(800, 600).area(), 480_000);
        assert!(Viewport::new(0, 600).is_empty());
        assert!(Viewport::default().is_empty());
    }

    #[test]
    fn test_absent_pointer_is_infinitely_far() {
        let pointer = Pointer::default();
        assert!(pointer.is_absent());
        assert_eq!(pointer.distance_to(0.0, 0.0), f64::INFINITY);
        assert_eq!(pointer.position(), None);
    }

    #[test]
    fn test_pointer_distance() {
        let pointer = Pointer::at(3.0, 4.0);
        assert_eq!(pointer.distance_to(0.0, 0.0), 5.0);
        assert_eq!(pointer.distance_to(3.0, 4.0), 0.0);
    }
}
