//! Session Management: State tracking, accuracy statistics, and persistence
//!
//! # Components
//! - `state.rs`: SessionState struct for per-run progress
//! - `stats.rs`: Per-pitch correct/incorrect counters
//! - `errors.rs`: Per-position incorrect-answer log
//! - `store.rs`: JSON persistence for the statistics blobs

pub mod errors;
pub mod state;
pub mod stats;
pub mod store;

pub use errors::ErrorLog;
pub use state::SessionState;
pub use stats::{NoteCounts, NoteStats};
pub use store::StatsStore;
