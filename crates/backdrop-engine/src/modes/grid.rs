//! Displacement grid: anchored points pushed away from the pointer.

use backdrop_core::{GridOptions, Pointer, Viewport};

use crate::element::GridPoint;
use crate::surface::Surface;

/// Lay out one anchored point per lattice position covering the viewport.
///
/// Columns run outer, rows inner. Deterministic for a given viewport.
pub fn init_points(viewport: Viewport, options: &GridOptions) -> Vec<GridPoint> {
    let spacing = options.spacing;
    if viewport.is_empty() || !(spacing.is_finite() && spacing > 0.0) {
        return Vec::new();
    }
    let columns = (viewport.width as f64 / spacing).ceil() as usize;
    let rows = (viewport.height as f64 / spacing).ceil() as usize;

    let mut points = Vec::with_capacity(columns * rows);
    for col in 0..columns {
        for row in 0..rows {
            points.push(GridPoint::at(col as f64 * spacing, row as f64 * spacing));
        }
    }
    points
}

/// Linear falloff: 1.0 at distance zero, 0.0 at and beyond `radius`.
pub fn falloff(distance: f64, radius: f64) -> f64 {
    if distance < radius {
        (radius - distance) / radius
    } else {
        0.0
    }
}

/// Push vector directed away from the pointer.
///
/// Zero outside the interaction radius and when the pointer sits exactly
/// on the point, where no direction exists.
pub fn push(point: &GridPoint, pointer: Pointer, options: &GridOptions) -> (f64, f64) {
    let Some((px, py)) = pointer.position() else {
        return (0.0, 0.0);
    };
    let dx = point.x - px;
    let dy = point.y - py;
    let distance = dx.hypot(dy);
    if distance == 0.0 || distance >= options.interaction_radius {
        return (0.0, 0.0);
    }

    let magnitude = falloff(distance, options.interaction_radius)
        * options.interaction_radius
        * options.displace_strength;
    (dx / distance * magnitude, dy / distance * magnitude)
}

/// Position the point is currently easing toward.
pub fn target(point: &GridPoint, pointer: Pointer, options: &GridOptions) -> (f64, f64) {
    let (push_x, push_y) = push(point, pointer, options);
    (point.origin_x + push_x, point.origin_y + push_y)
}

/// Advance one point by one frame.
pub fn step(point: &mut GridPoint, pointer: Pointer, options: &GridOptions) {
    point.pointer_distance = pointer.distance_to(point.x, point.y);
    let (tx, ty) = target(point, pointer, options);
    point.x += (tx - point.x) * options.relaxation;
    point.y += (ty - point.y) * options.relaxation;
}

/// Advance every point by one frame.
pub fn update(points: &mut [GridPoint], pointer: Pointer, options: &GridOptions) {
    for point in points {
        step(point, pointer, options);
    }
}

/// Opacity of a point at `distance` from the pointer, never below the floor.
pub fn opacity(distance: f64, options: &GridOptions) -> f64 {
    (1.0 - distance / options.opacity_falloff).max(options.min_opacity)
}

/// Draw every point, fading with its distance from the pointer before the
/// last step.
pub fn render<S: Surface + ?Sized>(
    points: &[GridPoint],
    options: &GridOptions,
    surface: &mut S,
) {
    for point in points {
        surface.set_fill(options.color, opacity(point.pointer_distance, options));
        surface.fill_circle(point.x, point.y, options.point_radius);
    }
}
