//! Falling-snow overlay.
//!
//! Fifty flakes, each with its own start offset, fall duration and delay,
//! looping independently. A flake's position is a pure function of elapsed
//! time, so the overlay carries no per-frame mutable state beyond the flake
//! set itself.

use std::collections::HashMap;
use std::f32::consts::PI;

use rand::Rng;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use noel_core::AnimationSpeed;

use crate::chars::SNOW_CHARS;

/// Number of flakes in the overlay.
pub const FLAKE_COUNT: usize = 50;

/// A single snowflake. Immutable after initialization.
#[derive(Debug, Clone)]
pub struct Snowflake {
    /// Home column in cells.
    pub x: f32,
    /// Start position above the top edge (negative rows).
    pub start_y: f32,
    /// Size category, 1 (smallest) to 4.
    pub size: u8,
    /// Time for one full fall in milliseconds.
    pub duration_ms: u64,
    /// Delay before the first fall in milliseconds.
    pub delay_ms: u64,
    /// Phase offset for the horizontal drift.
    pub drift_phase: f32,
    /// Seed for glyph selection.
    pub char_seed: usize,
}

/// Initialize the flake set for the given terminal dimensions.
pub fn init_flakes<R: Rng>(rng: &mut R, width: u16, height: u16) -> Vec<Snowflake> {
    (0..FLAKE_COUNT)
        .map(|_| Snowflake {
            x: rng.random_range(0.0..width.max(1) as f32),
            start_y: -rng.random_range(0.0..(height.max(1) as f32 * 0.2).max(1.0)),
            size: rng.random_range(1..=4),
            duration_ms: rng.random_range(5_000..15_000),
            delay_ms: rng.random_range(0..5_000),
            drift_phase: rng.random_range(0.0..1.0),
            char_seed: rng.random_range(0..usize::MAX),
        })
        .collect()
}

/// Position of a flake at the given elapsed time, or `None` while its start
/// delay has not passed. The fall loops indefinitely.
pub fn flake_position(
    flake: &Snowflake,
    elapsed_ms: u64,
    height: u16,
    speed: AnimationSpeed,
) -> Option<(f32, f32)> {
    let since_start = elapsed_ms.checked_sub(flake.delay_ms)?;

    // Faster speed shortens the fall
    let duration = (flake.duration_ms as f32 / speed.snow_fall_speed()).max(1.0) as u64;
    let progress = (since_start % duration) as f32 / duration as f32;

    // Fall from the start offset to just below the bottom edge
    let y = flake.start_y + progress * (height as f32 - flake.start_y + 2.0);
    let drift = ((progress * 2.0 + flake.drift_phase) * 2.0 * PI).sin() * 1.5;

    Some((flake.x + drift, y))
}

/// Glyph and color for a flake's size category.
fn flake_style(flake: &Snowflake) -> (char, Color) {
    let (chars, color) = match flake.size {
        1 => (&SNOW_CHARS[0..2], Color::Rgb(120, 130, 160)),
        2 => (&SNOW_CHARS[2..3], Color::Rgb(160, 170, 200)),
        3 => (&SNOW_CHARS[3..6], Color::Rgb(200, 210, 235)),
        _ => (&SNOW_CHARS[6..8], Color::Rgb(240, 245, 255)),
    };
    (chars[flake.char_seed % chars.len()], color)
}

/// Snowfall overlay state.
///
/// Flakes are re-randomized whenever the terminal dimensions change; their
/// columns are relative to the current width.
#[derive(Debug, Default)]
pub struct SnowState {
    flakes: Vec<Snowflake>,
    last_width: u16,
    last_height: u16,
}

impl SnowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flakes(&self) -> &[Snowflake] {
        &self.flakes
    }

    /// Build the overlay lines for one frame.
    pub fn lines<R: Rng>(
        &mut self,
        rng: &mut R,
        width: u16,
        height: u16,
        elapsed_ms: u64,
        speed: AnimationSpeed,
    ) -> Vec<Line<'static>> {
        if width != self.last_width || height != self.last_height || self.flakes.is_empty() {
            self.flakes = init_flakes(rng, width, height);
            self.last_width = width;
            self.last_height = height;
        }

        let mut grid: HashMap<(u16, u16), (char, Color)> = HashMap::with_capacity(FLAKE_COUNT);
        for flake in &self.flakes {
            let Some((x, y)) = flake_position(flake, elapsed_ms, height, speed) else {
                continue;
            };
            if x < 0.0 || y < 0.0 {
                continue;
            }
            let (cx, cy) = (x as u16, y as u16);
            if cx < width && cy < height {
                grid.insert((cx, cy), flake_style(flake));
            }
        }

        (0..height)
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| match grid.get(&(x, y)) {
                        Some((ch, color)) => {
                            Span::styled(ch.to_string(), Style::new().fg(*color))
                        }
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}
