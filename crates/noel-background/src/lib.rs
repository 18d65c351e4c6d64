//! Decorative background layers for the noel greeting card.
//!
//! Currently a single effect: a falling-snow overlay of independently
//! looping flakes, rendered as a full-area text layer the other card layers
//! draw over.

mod chars;
mod snow;

pub use snow::{FLAKE_COUNT, SnowState, Snowflake, flake_position, init_flakes};
