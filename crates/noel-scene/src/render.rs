//! Painting the scene onto a ratatui braille canvas.
//!
//! The scene works in subpixel coordinates with y growing downward, matching
//! the braille painter grid, so projected points are painted directly without
//! going through the canvas' bottom-up coordinate transform.

use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Painter, Shape};

use noel_core::color::fade;

use crate::geometry::{self, PALETTE, STAR_INNER_RADIUS, STAR_OUTER_RADIUS};
use crate::scene::TreeScene;

/// Horizontal subpixels per terminal cell under the braille marker.
pub const SUBPIXELS_X: u16 = 2;

/// Vertical subpixels per terminal cell under the braille marker.
pub const SUBPIXELS_Y: u16 = 4;

const RIBBON_COLOR: Color = Color::Rgb(255, 255, 255);
const STAR_COLOR: Color = Color::Rgb(255, 215, 0);

/// Build the canvas widget painting this scene.
///
/// Bounds span the scene's subpixel viewport so one canvas point is one
/// braille dot.
pub fn tree_canvas(scene: &TreeScene) -> impl Widget + '_ {
    let viewport = scene.viewport();
    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport.width as f64])
        .y_bounds([0.0, viewport.height as f64])
        .paint(move |ctx| ctx.draw(scene))
}

impl Shape for TreeScene {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        if !self.is_running() {
            return;
        }

        let viewport = self.viewport();
        let bounds = (viewport.width, viewport.height);
        let projection = self.projection();

        // Tree body
        for particle in self.particles() {
            let projected = projection.project(particle.base);
            let alpha = projected.opacity * self.sparkle(particle);
            let color = fade(PALETTE[particle.color], alpha);
            fill_circle(
                painter,
                projected.x,
                projected.y,
                particle.size * projected.scale,
                color,
                bounds,
            );
        }

        // Light ribbon, stroked as one connected path
        let mut previous = None;
        for point in self.ribbon() {
            let projected = projection.project(*point);
            if let Some((px, py)) = previous {
                let color = fade(RIBBON_COLOR, projected.opacity * 0.6);
                draw_line(painter, px, py, projected.x, projected.y, color, bounds);
            }
            previous = Some((projected.x, projected.y));
        }

        // Star at the apex
        let apex = projection.project(self.apex());
        let star = geometry::star_vertices(apex.x, apex.y, STAR_OUTER_RADIUS, STAR_INNER_RADIUS);
        fill_polygon(painter, &star, fade(STAR_COLOR, apex.opacity), bounds);

        // Faint halo standing in for the canvas blur glow
        let halo = geometry::star_vertices(
            apex.x,
            apex.y,
            STAR_OUTER_RADIUS * 1.4,
            STAR_INNER_RADIUS * 1.4,
        );
        stroke_polygon(painter, &halo, fade(STAR_COLOR, apex.opacity * 0.3), bounds);
    }
}

/// Paint a single subpixel if it lies inside the viewport.
fn plot(painter: &mut Painter<'_, '_>, x: f32, y: f32, color: Color, bounds: (f32, f32)) {
    if x >= 0.0 && y >= 0.0 && x < bounds.0 && y < bounds.1 {
        painter.paint(x as usize, y as usize, color);
    }
}

/// Fill a disc. Radii below one subpixel collapse to a single dot.
fn fill_circle(
    painter: &mut Painter<'_, '_>,
    cx: f32,
    cy: f32,
    radius: f32,
    color: Color,
    bounds: (f32, f32),
) {
    if radius < 1.0 {
        plot(painter, cx, cy, color, bounds);
        return;
    }

    let r2 = radius * radius;
    let min_y = (cy - radius).floor() as i32;
    let max_y = (cy + radius).ceil() as i32;
    let min_x = (cx - radius).floor() as i32;
    let max_x = (cx + radius).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= r2 {
                plot(painter, x as f32, y as f32, color, bounds);
            }
        }
    }
}

/// Bresenham line between two subpixel positions.
fn draw_line(
    painter: &mut Painter<'_, '_>,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Color,
    bounds: (f32, f32),
) {
    let (mut x0, mut y0) = (x0.round() as i32, y0.round() as i32);
    let (x1, y1) = (x1.round() as i32, y1.round() as i32);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(painter, x0 as f32, y0 as f32, color, bounds);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Stroke a closed polygon through the given vertices.
fn stroke_polygon(
    painter: &mut Painter<'_, '_>,
    vertices: &[(f32, f32)],
    color: Color,
    bounds: (f32, f32),
) {
    for i in 0..vertices.len() {
        let (x0, y0) = vertices[i];
        let (x1, y1) = vertices[(i + 1) % vertices.len()];
        draw_line(painter, x0, y0, x1, y1, color, bounds);
    }
}

/// Fill a closed polygon with an even-odd scanline over its bounding box.
fn fill_polygon(
    painter: &mut Painter<'_, '_>,
    vertices: &[(f32, f32)],
    color: Color,
    bounds: (f32, f32),
) {
    let min_y = vertices.iter().map(|v| v.1).fold(f32::INFINITY, f32::min);
    let max_y = vertices
        .iter()
        .map(|v| v.1)
        .fold(f32::NEG_INFINITY, f32::max);

    let mut crossings = Vec::with_capacity(vertices.len());
    let mut y = min_y.floor();
    while y <= max_y.ceil() {
        crossings.clear();
        for i in 0..vertices.len() {
            let (x0, y0) = vertices[i];
            let (x1, y1) = vertices[(i + 1) % vertices.len()];
            if (y0 <= y && y1 > y) || (y1 <= y && y0 > y) {
                crossings.push(x0 + (y - y0) / (y1 - y0) * (x1 - x0));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let mut x = pair[0].ceil();
            while x <= pair[1].floor() {
                plot(painter, x, y, color, bounds);
                x += 1.0;
            }
        }
        y += 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noel_core::AnimationSpeed;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_dot_count(scene: &TreeScene) -> usize {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(tree_canvas(scene), frame.area()))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count()
    }

    fn scene() -> TreeScene {
        let mut rng = StdRng::seed_from_u64(11);
        TreeScene::new(
            &mut rng,
            (80 * SUBPIXELS_X) as f32,
            (30 * SUBPIXELS_Y) as f32,
            AnimationSpeed::Normal,
        )
    }

    #[test]
    fn running_scene_paints_dots() {
        let scene = scene();
        assert!(rendered_dot_count(&scene) > 100);
    }

    #[test]
    fn stopped_scene_paints_nothing() {
        let mut scene = scene();
        scene.stop();
        assert_eq!(rendered_dot_count(&scene), 0);
    }
}
