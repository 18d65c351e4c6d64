//! Character constants for the snowfall overlay.

/// Snowflake glyphs by size category, smallest first.
pub const SNOW_CHARS: &[char] = &['·', '•', '*', '❄', '❅', '❆', '✦', '✧'];
