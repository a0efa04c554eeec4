//! Per-pitch answer statistics
//!
//! Maintains correct/incorrect counters keyed by primary pitch name,
//! persisted between sessions and rewritten after every answer.

use crate::theory::PitchClass;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Counters for one pitch class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCounts {
    pub correct: u32,
    pub incorrect: u32,
}

impl NoteCounts {
    /// Total graded answers for this pitch
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Fraction answered correctly (0.0 when never asked)
    pub fn hit_rate(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.correct as f32 / self.total() as f32
        }
    }

    /// Fraction answered incorrectly (0.0 when never asked)
    pub fn miss_rate(&self) -> f32 {
        if self.total() == 0 {
            0.0
        } else {
            self.incorrect as f32 / self.total() as f32
        }
    }
}

/// Accuracy statistics per pitch class, keyed by primary name
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStats {
    counts: FxHashMap<String, NoteCounts>,
}

impl NoteStats {
    /// Create stats with all 12 pitch names zeroed
    pub fn new() -> Self {
        let mut counts = FxHashMap::default();
        for pitch in PitchClass::all() {
            counts.insert(pitch.primary_name().to_string(), NoteCounts::default());
        }
        NoteStats { counts }
    }

    /// Record one graded answer for a pitch
    pub fn record(&mut self, pitch: PitchClass, correct: bool) {
        let entry = self
            .counts
            .entry(pitch.primary_name().to_string())
            .or_default();
        if correct {
            entry.correct += 1;
        } else {
            entry.incorrect += 1;
        }
    }

    /// Counters for a pitch (zeroed if never recorded)
    pub fn counts(&self, pitch: PitchClass) -> NoteCounts {
        self.counts
            .get(pitch.primary_name())
            .copied()
            .unwrap_or_default()
    }

    /// Miss rate for a pitch (0.0 when never asked)
    pub fn miss_rate(&self, pitch: PitchClass) -> f32 {
        self.counts(pitch).miss_rate()
    }

    /// All 12 rows in chromatic order: (primary name, counters)
    pub fn rows(&self) -> Vec<(&'static str, NoteCounts)> {
        PitchClass::all()
            .map(|pitch| (pitch.primary_name(), self.counts(pitch)))
            .collect()
    }

    /// Total graded answers across all pitches
    pub fn total_answers(&self) -> u32 {
        self.counts.values().map(NoteCounts::total).sum()
    }

    /// Zero every counter
    pub fn reset(&mut self) {
        *self = NoteStats::new();
    }
}

impl Default for NoteStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prefills_all_pitches() {
        let stats = NoteStats::new();
        assert_eq!(stats.rows().len(), 12);
        assert_eq!(stats.total_answers(), 0);
    }

    #[test]
    fn test_record_and_rates() {
        let mut stats = NoteStats::new();
        let c = PitchClass::new(0);
        stats.record(c, true);
        stats.record(c, true);
        stats.record(c, false);

        let counts = stats.counts(c);
        assert_eq!(counts.correct, 2);
        assert_eq!(counts.incorrect, 1);
        assert!((counts.hit_rate() - 2.0 / 3.0).abs() < 1e-6);
        assert!((stats.miss_rate(c) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_unasked_pitch_has_zero_rates() {
        let stats = NoteStats::new();
        let pitch = PitchClass::new(7);
        assert_eq!(stats.counts(pitch).total(), 0);
        assert_eq!(stats.miss_rate(pitch), 0.0);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = NoteStats::new();
        stats.record(PitchClass::new(4), false);
        stats.reset();
        assert_eq!(stats.total_answers(), 0);
        assert_eq!(stats.rows().len(), 12);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut stats = NoteStats::new();
        stats.record(PitchClass::new(1), true);
        let json = serde_json::to_string(&stats).unwrap();
        let restored: NoteStats = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.counts(PitchClass::new(1)).correct, 1);
    }
}
