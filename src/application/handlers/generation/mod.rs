//! Generation handlers.
//!
//! ## Commands
//! - Generating a song once its order is verified

mod generate_track;

pub use generate_track::{GenerateTrackCommand, GenerateTrackHandler};
