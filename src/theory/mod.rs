//! Music Theory: Pitch classes and fretboard geometry
//!
//! # Components
//! - `notes.rs`: 12-entry pitch table with enharmonic alternates and answer matching
//! - `fretboard.rs`: String/fret positions and open-string tuning

pub mod fretboard;
pub mod notes;

pub use fretboard::{Fretboard, Position, FRETS_PER_STRING, STRING_COUNT};
pub use notes::{PitchClass, PITCH_CLASS_COUNT};
