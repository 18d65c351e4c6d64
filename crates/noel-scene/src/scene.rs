//! Scene state: owned geometry, clock and viewport with an explicit
//! start/stop lifecycle.

use rand::Rng;

use noel_core::AnimationSpeed;

use crate::geometry::{self, Particle, Vec3};
use crate::project::Projection;

/// Current drawing-surface dimensions in subpixels.
///
/// Updated on resize; read every tick for the projection math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// The mounted tree scene.
///
/// Geometry is generated once from the mount-time viewport and never
/// regenerated; a resize only moves the projection anchor. The scene clock
/// advances a fixed step per drawn frame, so animation speed follows the
/// host's refresh cadence.
#[derive(Debug)]
pub struct TreeScene {
    particles: Vec<Particle>,
    ribbon: Vec<Vec3>,
    /// Tree dimensions, fixed at mount time.
    tree_height: f32,
    tree_base_width: f32,
    viewport: Viewport,
    clock: f32,
    speed: AnimationSpeed,
    running: bool,
}

impl TreeScene {
    /// Mount a new scene for a surface of the given subpixel dimensions.
    pub fn new<R: Rng>(rng: &mut R, width: f32, height: f32, speed: AnimationSpeed) -> Self {
        let tree_height = height * 0.7;
        let tree_base_width = width * 0.4;

        Self {
            particles: geometry::generate_particles(rng, tree_height, tree_base_width),
            ribbon: geometry::generate_ribbon(tree_height, tree_base_width),
            tree_height,
            tree_base_width,
            viewport: Viewport { width, height },
            clock: 0.0,
            speed,
            running: true,
        }
    }

    /// Advance the scene clock by one frame. No-op once stopped.
    pub fn tick(&mut self) {
        if self.running {
            self.clock += self.speed.clock_step();
        }
    }

    /// Update the viewport after a resize. Geometry stays untouched.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport { width, height };
    }

    /// Stop the scene: freezes the clock and suppresses all painting.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn clock(&self) -> f32 {
        self.clock
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn ribbon(&self) -> &[Vec3] {
        &self.ribbon
    }

    /// The point the star is centered on, just above the tree tip.
    pub fn apex(&self) -> Vec3 {
        Vec3 {
            x: 0.0,
            y: -self.tree_height - 10.0,
            z: 0.0,
        }
    }

    /// Projection for the current clock and viewport.
    pub fn projection(&self) -> Projection {
        Projection::new(self.clock, self.viewport, self.tree_base_width)
    }

    /// Sparkle brightness for a particle at the current clock, in 0..=1.
    pub fn sparkle(&self, particle: &Particle) -> f32 {
        (self.clock * 5.0 + particle.phase).sin() * 0.5 + 0.5
    }
}
