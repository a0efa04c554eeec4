//! Error log: incorrect-answer counts per fretboard position
//!
//! Keys follow the "string_fret" form used by the persisted blob, so the
//! on-disk layout stays a flat map of position key to count.

use crate::theory::Position;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Incorrect-answer counts keyed by position storage key
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorLog {
    counts: FxHashMap<String, u32>,
}

impl ErrorLog {
    /// Create a log with every position zeroed
    pub fn new() -> Self {
        let mut counts = FxHashMap::default();
        for position in Position::all() {
            counts.insert(position.storage_key(), 0);
        }
        ErrorLog { counts }
    }

    /// Record one incorrect answer at a position
    pub fn record_miss(&mut self, position: Position) {
        *self.counts.entry(position.storage_key()).or_insert(0) += 1;
    }

    /// Incorrect-answer count at a position
    pub fn count_at(&self, position: Position) -> u32 {
        self.counts
            .get(&position.storage_key())
            .copied()
            .unwrap_or(0)
    }

    /// Total misses recorded across all positions
    pub fn total_misses(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Positions with the most misses, sorted descending, zero-count
    /// positions excluded
    pub fn worst_positions(&self, limit: usize) -> Vec<(Position, u32)> {
        let mut ranked: Vec<(Position, u32)> = self
            .counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .filter_map(|(key, &count)| Position::parse_key(key).map(|pos| (pos, count)))
            .collect();

        ranked.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.storage_key().cmp(&b.0.storage_key()))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        *self = ErrorLog::new();
    }
}

impl Default for ErrorLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(string: u8, fret: u8) -> Position {
        Position::new(string, fret).unwrap()
    }

    #[test]
    fn test_new_prefills_all_positions() {
        let log = ErrorLog::new();
        assert_eq!(log.total_misses(), 0);
        assert_eq!(log.count_at(pos(3, 7)), 0);
    }

    #[test]
    fn test_record_miss_increments() {
        let mut log = ErrorLog::new();
        log.record_miss(pos(2, 5));
        log.record_miss(pos(2, 5));
        log.record_miss(pos(6, 0));
        assert_eq!(log.count_at(pos(2, 5)), 2);
        assert_eq!(log.count_at(pos(6, 0)), 1);
        assert_eq!(log.total_misses(), 3);
    }

    #[test]
    fn test_worst_positions_sorted() {
        let mut log = ErrorLog::new();
        log.record_miss(pos(1, 1));
        log.record_miss(pos(4, 9));
        log.record_miss(pos(4, 9));
        log.record_miss(pos(4, 9));
        log.record_miss(pos(5, 2));
        log.record_miss(pos(5, 2));

        let worst = log.worst_positions(2);
        assert_eq!(worst.len(), 2);
        assert_eq!(worst[0], (pos(4, 9), 3));
        assert_eq!(worst[1], (pos(5, 2), 2));
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut log = ErrorLog::new();
        log.record_miss(pos(1, 0));
        log.reset();
        assert_eq!(log.total_misses(), 0);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut log = ErrorLog::new();
        log.record_miss(pos(3, 3));
        let json = serde_json::to_string(&log).unwrap();
        let restored: ErrorLog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.count_at(pos(3, 3)), 1);
    }
}
