//! Core types shared across the noel greeting card crates.

pub mod color;

use serde::{Deserialize, Serialize};

/// Playback speed for the card's animations.
///
/// The scene clock advances a fixed amount per drawn frame, so the speed is a
/// plain multiplier rather than a wall-clock rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Base multiplier applied to all animations.
    pub fn multiplier(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Scene clock increment per drawn frame.
    pub fn clock_step(self) -> f32 {
        0.01 * self.multiplier()
    }

    /// Divisor applied to snowflake fall durations.
    pub fn snow_fall_speed(self) -> f32 {
        self.multiplier()
    }

    /// Period of the title brightness pulse in milliseconds.
    pub fn title_pulse_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 4000,
            AnimationSpeed::Normal => 2000,
            AnimationSpeed::Fast => 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_step_scales_with_speed() {
        assert_eq!(AnimationSpeed::Normal.clock_step(), 0.01);
        assert!(AnimationSpeed::Slow.clock_step() < AnimationSpeed::Fast.clock_step());
    }

    #[test]
    fn normal_is_the_default_and_identity() {
        assert_eq!(AnimationSpeed::default(), AnimationSpeed::Normal);
        assert_eq!(AnimationSpeed::Normal.multiplier(), 1.0);
        assert_eq!(AnimationSpeed::Normal.snow_fall_speed(), 1.0);
    }
}
