//! JSON persistence for statistics blobs
//!
//! Two files live in the data directory: note_stats.json and
//! error_log.json. Both are reloaded at startup and rewritten after every
//! graded answer. A missing or unparsable file yields fresh zeroed state
//! rather than an error.

use crate::session::{ErrorLog, NoteStats};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const NOTE_STATS_FILE: &str = "note_stats.json";
const ERROR_LOG_FILE: &str = "error_log.json";

/// File-backed store for the persisted statistics
pub struct StatsStore {
    dir: PathBuf,
}

impl StatsStore {
    /// Create a store rooted at a data directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        StatsStore { dir: dir.into() }
    }

    fn note_stats_path(&self) -> PathBuf {
        self.dir.join(NOTE_STATS_FILE)
    }

    fn error_log_path(&self) -> PathBuf {
        self.dir.join(ERROR_LOG_FILE)
    }

    fn load_or_default<T: serde::de::DeserializeOwned + Default>(path: &Path) -> T {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Load per-pitch stats, falling back to zeroed state
    pub fn load_note_stats(&self) -> NoteStats {
        Self::load_or_default(&self.note_stats_path())
    }

    /// Load the position error log, falling back to zeroed state
    pub fn load_error_log(&self) -> ErrorLog {
        Self::load_or_default(&self.error_log_path())
    }

    /// Write per-pitch stats to disk
    pub fn save_note_stats(&self, stats: &NoteStats) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.note_stats_path(), serde_json::to_string_pretty(stats)?)?;
        Ok(())
    }

    /// Write the position error log to disk
    pub fn save_error_log(&self, log: &ErrorLog) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.error_log_path(), serde_json::to_string_pretty(log)?)?;
        Ok(())
    }

    /// Write both blobs
    pub fn save_all(&self, stats: &NoteStats, log: &ErrorLog) -> Result<(), Box<dyn Error>> {
        self.save_note_stats(stats)?;
        self.save_error_log(log)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::{PitchClass, Position};

    #[test]
    fn test_load_missing_files_yields_zeroed_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path());
        assert_eq!(store.load_note_stats().total_answers(), 0);
        assert_eq!(store.load_error_log().total_misses(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path());

        let mut stats = NoteStats::new();
        stats.record(PitchClass::new(4), true);
        let mut log = ErrorLog::new();
        log.record_miss(Position::new(2, 3).unwrap());

        store.save_all(&stats, &log).unwrap();

        assert_eq!(store.load_note_stats().counts(PitchClass::new(4)).correct, 1);
        assert_eq!(
            store.load_error_log().count_at(Position::new(2, 3).unwrap()),
            1
        );
    }

    #[test]
    fn test_corrupt_file_yields_zeroed_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path());
        fs::write(dir.path().join(NOTE_STATS_FILE), "not json").unwrap();
        assert_eq!(store.load_note_stats().total_answers(), 0);
    }
}
