//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture using crossterm
//! - `display.rs`: Fretboard grid and stats rendering

pub mod display;
pub mod input;

pub use display::{Display, DisplayMode};
pub use input::{Control, InputHandler};
