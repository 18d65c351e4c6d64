//! Procedural geometry for the tree scene.
//!
//! All positions are generated once per mount in a pixel-like coordinate
//! space derived from the mount-time viewport. Coordinates follow the screen
//! convention: y grows downward, so points above the tree base are negative.

use rand::Rng;
use ratatui::style::Color;

use std::f32::consts::PI;

/// Number of particles making up the tree body.
pub const PARTICLE_COUNT: usize = 1800;

/// Number of points on the light ribbon.
pub const RIBBON_POINTS: usize = 400;

/// Full turns of the tree spiral, bottom to top, in radians.
pub const TREE_SPIRAL_SWEEP: f32 = PI * 30.0;

/// Full turns of the ribbon spiral in radians.
pub const RIBBON_SPIRAL_SWEEP: f32 = PI * 18.0;

/// Ribbon radius as a fraction of the tree base width.
pub const RIBBON_WIDTH_FACTOR: f32 = 0.55;

/// Star outer radius in subpixels.
pub const STAR_OUTER_RADIUS: f32 = 12.0;

/// Star inner radius in subpixels.
pub const STAR_INNER_RADIUS: f32 = 6.0;

/// Number of star spikes.
pub const STAR_SPIKES: usize = 5;

/// Fixed particle palette: pinks, orchids, gold and white.
pub const PALETTE: [Color; 6] = [
    Color::Rgb(255, 20, 147),  // deep pink
    Color::Rgb(255, 105, 180), // hot pink
    Color::Rgb(218, 112, 214), // orchid
    Color::Rgb(186, 85, 211),  // medium orchid
    Color::Rgb(255, 215, 0),   // gold
    Color::Rgb(255, 255, 255), // white
];

/// A point in scene space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A single point on the tree surface. Immutable after generation.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Base position in scene space.
    pub base: Vec3,
    /// Index into [`PALETTE`].
    pub color: usize,
    /// Radius in subpixels before depth scaling.
    pub size: f32,
    /// Phase offset driving the sparkle oscillation.
    pub phase: f32,
}

/// Radius of the tree cone at normalized height `t`.
///
/// Linear taper: half the base width at the bottom, zero at the tip.
pub fn cone_radius(t: f32, tree_base_width: f32) -> f32 {
    (1.0 - t) * tree_base_width * 0.5
}

/// Generate the tree body particles.
///
/// Heights are sampled uniformly; the conical taper alone concentrates
/// points near the wide base.
pub fn generate_particles<R: Rng>(
    rng: &mut R,
    tree_height: f32,
    tree_base_width: f32,
) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| {
            let t: f32 = rng.random();
            let radius = cone_radius(t, tree_base_width);
            let angle = t * TREE_SPIRAL_SWEEP;

            Particle {
                base: Vec3 {
                    x: angle.cos() * radius,
                    // Upwards from the base
                    y: -t * tree_height,
                    z: angle.sin() * radius,
                },
                color: rng.random_range(0..PALETTE.len()),
                size: rng.random_range(0.5..2.5),
                phase: rng.random_range(0.0..PI * 2.0),
            }
        })
        .collect()
}

/// Generate the light ribbon points, ordered bottom to top.
///
/// The order is significant: the ribbon is stroked as one connected path.
pub fn generate_ribbon(tree_height: f32, tree_base_width: f32) -> Vec<Vec3> {
    (0..RIBBON_POINTS)
        .map(|i| {
            let t = i as f32 / RIBBON_POINTS as f32;
            let radius = (1.0 - t) * tree_base_width * RIBBON_WIDTH_FACTOR;
            let angle = t * RIBBON_SPIRAL_SWEEP;
            Vec3 {
                x: angle.cos() * radius,
                y: -t * tree_height,
                z: angle.sin() * radius,
            }
        })
        .collect()
}

/// Construct the vertices of a 5-pointed star around `(cx, cy)`.
///
/// Vertices alternate between the outer and inner radius starting straight
/// up from the center, ten in total, in stroke order.
pub fn star_vertices(cx: f32, cy: f32, outer: f32, inner: f32) -> Vec<(f32, f32)> {
    let step = PI / STAR_SPIKES as f32;
    let mut rot = PI / 2.0 * 3.0;
    let mut vertices = Vec::with_capacity(STAR_SPIKES * 2);

    for _ in 0..STAR_SPIKES {
        vertices.push((cx + rot.cos() * outer, cy + rot.sin() * outer));
        rot += step;
        vertices.push((cx + rot.cos() * inner, cy + rot.sin() * inner));
        rot += step;
    }

    vertices
}
