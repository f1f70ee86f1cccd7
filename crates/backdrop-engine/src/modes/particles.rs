//! Particle network: drifting particles pulled toward the pointer and
//! linked to their neighbours.

use backdrop_core::{ParticleOptions, Pointer, Viewport};
use rand::Rng;

use crate::element::Particle;
use crate::surface::Surface;

/// Number of particles for a viewport: one per `area_per_particle`.
pub fn particle_count(viewport: Viewport, options: &ParticleOptions) -> usize {
    let per = options.area_per_particle;
    if !(per.is_finite() && per > 0.0) {
        return 0;
    }
    (viewport.area() as f64 / per).floor() as usize
}

/// Uniform sample from `[low, high)`; `low` when the range is empty or unbounded.
fn sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low && (high - low).is_finite() {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Seed particles uniformly over the viewport.
pub fn init_particles<R: Rng + ?Sized>(
    viewport: Viewport,
    options: &ParticleOptions,
    rng: &mut R,
) -> Vec<Particle> {
    let width = viewport.width as f64;
    let height = viewport.height as f64;
    let speed = options.max_speed.abs();

    (0..particle_count(viewport, options))
        .map(|_| Particle {
            x: sample(rng, 0.0, width),
            y: sample(rng, 0.0, height),
            vx: sample(rng, -speed, speed),
            vy: sample(rng, -speed, speed),
            radius: sample(rng, options.min_radius, options.max_radius),
        })
        .collect()
}

/// Advance one particle by one frame.
///
/// Leaving the viewport turns the matching velocity component back
/// inward, so a particle overshoots by at most one frame of travel.
pub fn step(
    particle: &mut Particle,
    pointer: Pointer,
    viewport: Viewport,
    options: &ParticleOptions,
) {
    particle.x += particle.vx;
    particle.y += particle.vy;

    let width = viewport.width as f64;
    let height = viewport.height as f64;
    if particle.x < 0.0 {
        particle.vx = particle.vx.abs();
    } else if particle.x > width {
        particle.vx = -particle.vx.abs();
    }
    if particle.y < 0.0 {
        particle.vy = particle.vy.abs();
    } else if particle.y > height {
        particle.vy = -particle.vy.abs();
    }

    if let Some((px, py)) = pointer.position() {
        let distance = (px - particle.x).hypot(py - particle.y);
        if distance < options.interaction_radius && distance > options.dead_zone {
            particle.x += (px - particle.x) * options.attraction;
            particle.y += (py - particle.y) * options.attraction;
        }
    }
}

/// Advance every particle by one frame.
pub fn update(
    particles: &mut [Particle],
    pointer: Pointer,
    viewport: Viewport,
    options: &ParticleOptions,
) {
    for particle in particles {
        step(particle, pointer, viewport, options);
    }
}

/// Every unordered index pair `(i, j)` with `j > i`, each exactly once.
pub fn pairs(len: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..len).flat_map(move |i| (i + 1..len).map(move |j| (i, j)))
}

/// Fill opacity: base opacity, rising to fully opaque at the pointer.
pub fn opacity(distance: f64, options: &ParticleOptions) -> f64 {
    let radius = options.interaction_radius;
    if distance < radius {
        let closeness = (radius - distance) / radius;
        options.base_opacity + (1.0 - options.base_opacity) * closeness
    } else {
        options.base_opacity
    }
}

/// Draw links, pointer lines and particles.
pub fn render<S: Surface + ?Sized>(
    particles: &[Particle],
    pointer: Pointer,
    options: &ParticleOptions,
    surface: &mut S,
) {
    let radius = options.interaction_radius;
    let near_pointer = |p: &Particle| pointer.distance_to(p.x, p.y) < radius;

    for (i, j) in pairs(particles.len()) {
        let (a, b) = (&particles[i], &particles[j]);
        let distance = (a.x - b.x).hypot(a.y - b.y);
        if distance >= options.connection_distance {
            continue;
        }
        let strength = 1.0 - distance / options.connection_distance;
        if near_pointer(a) && near_pointer(b) {
            surface.set_stroke(
                options.active_edge_color,
                options.active_edge_opacity * strength,
                options.active_edge_width,
            );
        } else {
            surface.set_stroke(options.color, options.edge_opacity * strength, options.edge_width);
        }
        surface.stroke_line(a.x, a.y, b.x, b.y);
    }

    if let Some((px, py)) = pointer.position() {
        for particle in particles {
            let distance = pointer.distance_to(particle.x, particle.y);
            if distance < radius {
                surface.set_stroke(
                    options.color,
                    options.pointer_edge_opacity * (1.0 - distance / radius),
                    options.pointer_edge_width,
                );
                surface.stroke_line(particle.x, particle.y, px, py);
            }
        }
    }

    for particle in particles {
        let distance = pointer.distance_to(particle.x, particle.y);
        surface.set_fill(options.color, opacity(distance, options));
        surface.fill_circle(particle.x, particle.y, particle.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{CanvasSurface, DrawCommand, Surface};
    use backdrop_core::Rgb;
    use rand::{SeedableRng, rngs::StdRng};

    fn options() -> ParticleOptions {
        ParticleOptions::default()
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
        }
    }

    #[test]
    fn test_count_is_area_proportional() {
        let opts = options();
        assert_eq!(particle_count(Viewport::new(800, 600), &opts), 32);
        assert_eq!(particle_count(Viewport::new(1600, 1200), &opts), 128);
        assert_eq!(particle_count(Viewport::new(0, 1200), &opts), 0);
    }

    #[test]
    fn test_seeded_values_in_range() {
        let opts = options();
        let mut rng = StdRng::seed_from_u64(7);
        let particles = init_particles(Viewport::new(800, 600), &opts, &mut rng);
        assert_eq!(particles.len(), 32);
        for p in &particles {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!(p.vx.abs() <= opts.max_speed && p.vy.abs() <= opts.max_speed);
            assert!(p.radius >= opts.min_radius && p.radius < opts.max_radius);
        }

        let mut again = StdRng::seed_from_u64(7);
        assert_eq!(init_particles(Viewport::new(800, 600), &opts, &mut again), particles);
    }

    #[test]
    fn test_unbounded_ranges_do_not_panic() {
        let opts = ParticleOptions {
            max_speed: 1e308,
            max_radius: f64::INFINITY,
            ..options()
        };
        let mut rng = StdRng::seed_from_u64(7);
        let particles = init_particles(Viewport::new(800, 600), &opts, &mut rng);
        assert_eq!(particles.len(), 32);
        for p in &particles {
            assert_eq!((p.vx, p.vy), (-1e308, -1e308));
            assert_eq!(p.radius, opts.min_radius);
        }
    }

    #[test]
    fn test_reflects_at_right_edge() {
        let opts = options();
        let viewport = Viewport::new(800, 600);
        let mut p = Particle {
            vx: 0.25,
            ..still(800.0, 300.0)
        };
        step(&mut p, Pointer::Absent, viewport, &opts);
        assert!(p.vx < 0.0);
        assert!(p.x <= 800.0 + opts.max_speed && p.x >= -opts.max_speed);

        step(&mut p, Pointer::Absent, viewport, &opts);
        assert!(p.x <= 800.0);
    }

    #[test]
    fn test_reflects_at_top_edge() {
        let mut p = Particle {
            vy: -0.2,
            ..still(100.0, 0.0)
        };
        step(&mut p, Pointer::Absent, Viewport::new(800, 600), &options());
        assert!(p.vy > 0.0);
        assert!(p.y >= -0.2);
    }

    #[test]
    fn test_attraction_window() {
        let opts = options();
        let viewport = Viewport::new(800, 600);

        let mut inside = still(100.0, 100.0);
        step(&mut inside, Pointer::at(200.0, 100.0), viewport, &opts);
        assert!((inside.x - 101.0).abs() < 1e-12);

        let mut dead_zone = still(100.0, 100.0);
        step(&mut dead_zone, Pointer::at(130.0, 100.0), viewport, &opts);
        assert_eq!(dead_zone.x, 100.0);

        let mut far = still(100.0, 100.0);
        step(&mut far, Pointer::at(300.0, 100.0), viewport, &opts);
        assert_eq!(far.x, 100.0);
    }

    #[test]
    fn test_pairs_visits_each_once() {
        for n in [0usize, 1, 2, 5, 32] {
            let all: Vec<_> = pairs(n).collect();
            assert_eq!(all.len(), n * n.saturating_sub(1) / 2);
            assert!(all.iter().all(|&(i, j)| j > i && j < n));
        }
    }

    #[test]
    fn test_edge_styles() {
        let opts = options();
        let background = Rgb(255, 255, 255);
        let mut surface = CanvasSurface::new(background);
        surface.set_size(Viewport::new(800, 600));

        // a and b within the interaction radius, c just outside it
        let a = still(400.0, 340.0);
        let b = still(400.0, 380.0);
        let c = still(400.0, 510.0);
        render(&[a, b, c], Pointer::at(400.0, 300.0), &opts, &mut surface);

        let lines: Vec<DrawCommand> = surface
            .commands()
            .iter()
            .copied()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .collect();
        let line = |from: &Particle, to: (f64, f64), width: f64, color: Rgb| DrawCommand::Line {
            x0: from.x,
            y0: from.y,
            x1: to.0,
            y1: to.1,
            width,
            color,
        };

        assert_eq!(
            lines,
            vec![
                // both ends near the pointer: activated
                line(
                    &a,
                    (b.x, b.y),
                    opts.active_edge_width,
                    opts.active_edge_color
                        .blend_over(background, opts.active_edge_opacity * (1.0 - 40.0 / 140.0)),
                ),
                // one end near: baseline
                line(
                    &b,
                    (c.x, c.y),
                    opts.edge_width,
                    opts.color
                        .blend_over(background, opts.edge_opacity * (1.0 - 130.0 / 140.0)),
                ),
                // pointer lines fade with 1 - d/R
                line(
                    &a,
                    (400.0, 300.0),
                    opts.pointer_edge_width,
                    opts.color
                        .blend_over(background, opts.pointer_edge_opacity * (1.0 - 40.0 / 200.0)),
                ),
                line(
                    &b,
                    (400.0, 300.0),
                    opts.pointer_edge_width,
                    opts.color
                        .blend_over(background, opts.pointer_edge_opacity * (1.0 - 80.0 / 200.0)),
                ),
            ]
        );
        assert_ne!(opts.active_edge_color, opts.color);
        assert!(opts.active_edge_width > opts.edge_width);
    }

    #[test]
    fn test_opacity_rises_near_pointer() {
        let opts = options();
        assert_eq!(opacity(f64::INFINITY, &opts), opts.base_opacity);
        assert_eq!(opacity(0.0, &opts), 1.0);
        assert!(opacity(50.0, &opts) > opacity(150.0, &opts));
    }
}
