//! Quiz Engine: Question generation and selection
//!
//! # Components
//! - `question.rs`: A single drill question with response timing
//! - `picker.rs`: Uniform and weak-spot weighted position selection

pub mod picker;
pub mod question;

pub use picker::{Picker, PickerWeights};
pub use question::Question;
