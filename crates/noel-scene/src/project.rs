//! 3D-to-2D projection under the scene clock's rotation.

use crate::geometry::Vec3;
use crate::scene::Viewport;

/// A point projected onto the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen x in subpixels.
    pub x: f32,
    /// Screen y in subpixels (downward).
    pub y: f32,
    /// Pseudo-depth scale factor, 0.8 (far) to 1.2 (near).
    pub scale: f32,
    /// Draw opacity derived from depth.
    pub opacity: f32,
}

/// Pure projection of scene-space points for one clock value.
///
/// Rotates around the vertical axis, applies a pseudo-depth scale instead of
/// true perspective division, and translates to the tree's screen anchor.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    angle: f32,
    tree_base_width: f32,
    center_x: f32,
    center_y: f32,
}

impl Projection {
    /// Build the projection for the given clock value and viewport.
    pub fn new(clock: f32, viewport: Viewport, tree_base_width: f32) -> Self {
        Self {
            angle: clock * 0.5,
            tree_base_width,
            center_x: viewport.width / 2.0,
            // Tree base sits near the bottom of the surface
            center_y: viewport.height * 0.85,
        }
    }

    /// Project a scene-space point to screen coordinates.
    pub fn project(&self, point: Vec3) -> Projected {
        let (sin, cos) = self.angle.sin_cos();
        let rot_x = point.x * cos - point.z * sin;
        let rot_z = point.x * sin + point.z * cos;

        let scale = (rot_z + self.tree_base_width) / (self.tree_base_width * 2.0) * 0.4 + 0.8;

        Projected {
            x: self.center_x + rot_x * scale,
            y: self.center_y + point.y * scale,
            scale,
            opacity: scale * 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn point(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[test]
    fn projection_is_pure() {
        let proj = Projection::new(1.234, VIEWPORT, 320.0);
        let p = point(40.0, -100.0, -25.0);
        assert_eq!(proj.project(p), proj.project(p));
    }

    #[test]
    fn origin_projects_to_tree_anchor() {
        // At the rotation axis the depth term is zero, so scale is exactly 1
        let proj = Projection::new(0.0, VIEWPORT, 320.0);
        let projected = proj.project(point(0.0, 0.0, 0.0));
        assert_eq!(projected.x, 400.0);
        assert_eq!(projected.y, 510.0);
        assert_eq!(projected.scale, 1.0);
        assert_eq!(projected.opacity, 0.8);
    }

    #[test]
    fn scale_stays_within_depth_band() {
        let proj = Projection::new(2.0, VIEWPORT, 320.0);
        for i in 0..64 {
            let angle = i as f32 / 64.0 * PI * 2.0;
            let p = point(angle.cos() * 160.0, -50.0, angle.sin() * 160.0);
            let projected = proj.project(p);
            assert!((0.8..=1.2).contains(&projected.scale));
            assert!((projected.opacity - projected.scale * 0.8).abs() < 1e-6);
        }
    }

    #[test]
    fn rotation_has_full_period_at_four_pi() {
        // The rotation angle is clock * 0.5, so one revolution takes 4π
        let p = point(123.0, -77.0, -9.0);
        let a = Projection::new(1.0, VIEWPORT, 320.0).project(p);
        let b = Projection::new(1.0 + 4.0 * PI, VIEWPORT, 320.0).project(p);
        assert!((a.x - b.x).abs() < 1e-2);
        assert!((a.y - b.y).abs() < 1e-2);
        assert!((a.scale - b.scale).abs() < 1e-4);
    }

    #[test]
    fn nearer_points_scale_up() {
        let proj = Projection::new(0.0, VIEWPORT, 320.0);
        let near = proj.project(point(0.0, 0.0, 320.0));
        let far = proj.project(point(0.0, 0.0, -320.0));
        assert!((near.scale - 1.2).abs() < 1e-6);
        assert!((far.scale - 0.8).abs() < 1e-6);
    }
}
