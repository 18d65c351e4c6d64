//! Rotating particle tree for the noel greeting card.
//!
//! Owns the procedural geometry (a conical spiral of colored particles, a
//! wider light-ribbon spiral, a star at the apex), the scene clock, and the
//! per-frame 3D-to-2D projection, painted onto a ratatui braille canvas.

mod geometry;
mod project;
mod render;
mod scene;

pub use geometry::{PALETTE, PARTICLE_COUNT, Particle, RIBBON_POINTS, Vec3};
pub use project::{Projected, Projection};
pub use render::{SUBPIXELS_X, SUBPIXELS_Y, tree_canvas};
pub use scene::{TreeScene, Viewport};
