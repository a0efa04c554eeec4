//! Position selection: uniform random or weak-spot weighted
//!
//! Weak-spot mode combines two signals per position: how often that exact
//! position has been missed, and the overall miss rate of its pitch class.
//! Every position keeps a base weight so coverage stays complete.

use crate::session::{ErrorLog, NoteStats};
use crate::theory::{Fretboard, Position};
use rand::distributions::WeightedIndex;
use rand::prelude::*;

/// Weights for the weak-spot scoring components
#[derive(Clone, Debug)]
pub struct PickerWeights {
    /// Floor weight applied to every position
    pub base: f32,
    /// Per-miss weight for the exact position
    pub position_miss: f32,
    /// Weight on the pitch class's overall miss rate
    pub note_miss_rate: f32,
}

impl Default for PickerWeights {
    fn default() -> Self {
        PickerWeights {
            base: 1.0,
            position_miss: 2.0,
            note_miss_rate: 4.0,
        }
    }
}

/// Selects the next drill position
pub struct Picker {
    weights: PickerWeights,
}

impl Picker {
    /// Create a picker with default weights
    pub fn new() -> Self {
        Picker {
            weights: PickerWeights::default(),
        }
    }

    /// Create with custom weights
    pub fn with_weights(weights: PickerWeights) -> Self {
        Picker { weights }
    }

    /// Weak-spot weight for one position
    pub fn weight(
        &self,
        fretboard: &Fretboard,
        position: Position,
        stats: &NoteStats,
        errors: &ErrorLog,
    ) -> f32 {
        let position_misses = errors.count_at(position) as f32;
        let note_miss_rate = stats.miss_rate(fretboard.note_at(position));

        self.weights.base
            + self.weights.position_miss * position_misses
            + self.weights.note_miss_rate * note_miss_rate
    }

    /// Pick a position uniformly at random
    pub fn pick_uniform<R: Rng>(&self, rng: &mut R) -> Position {
        let positions: Vec<Position> = Position::all().collect();
        *positions
            .choose(rng)
            .unwrap_or(&Position { string: 1, fret: 0 })
    }

    /// Pick a position weighted toward recorded weak spots.
    ///
    /// Falls back to uniform selection when the weight table is degenerate
    /// (cannot happen with a positive base weight, but WeightedIndex
    /// construction is fallible).
    pub fn pick_weighted<R: Rng>(
        &self,
        rng: &mut R,
        fretboard: &Fretboard,
        stats: &NoteStats,
        errors: &ErrorLog,
    ) -> Position {
        let positions: Vec<Position> = Position::all().collect();
        let weights: Vec<f32> = positions
            .iter()
            .map(|&pos| self.weight(fretboard, pos, stats, errors))
            .collect();

        match WeightedIndex::new(&weights) {
            Ok(dist) => positions[dist.sample(rng)],
            Err(_) => self.pick_uniform(rng),
        }
    }

    /// Pick the next position for the given mode
    pub fn pick<R: Rng>(
        &self,
        rng: &mut R,
        fretboard: &Fretboard,
        stats: &NoteStats,
        errors: &ErrorLog,
        focus: bool,
    ) -> Position {
        if focus {
            self.pick_weighted(rng, fretboard, stats, errors)
        } else {
            self.pick_uniform(rng)
        }
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::PitchClass;

    fn pos(string: u8, fret: u8) -> Position {
        Position::new(string, fret).unwrap()
    }

    #[test]
    fn test_uniform_pick_in_range() {
        let picker = Picker::new();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let p = picker.pick_uniform(&mut rng);
            assert!(Position::new(p.string, p.fret).is_some());
        }
    }

    #[test]
    fn test_weight_grows_with_position_misses() {
        let picker = Picker::new();
        let board = Fretboard::standard();
        let stats = NoteStats::new();
        let mut errors = ErrorLog::new();

        let clean = picker.weight(&board, pos(1, 1), &stats, &errors);
        errors.record_miss(pos(1, 1));
        errors.record_miss(pos(1, 1));
        let missed = picker.weight(&board, pos(1, 1), &stats, &errors);

        assert!(missed > clean);
        assert!((missed - clean - 4.0).abs() < 1e-6); // 2 misses * 2.0
    }

    #[test]
    fn test_weight_grows_with_note_miss_rate() {
        let picker = Picker::new();
        let board = Fretboard::standard();
        let mut stats = NoteStats::new();
        let errors = ErrorLog::new();

        // String 5 fret 3 is C; make C a weak note
        assert_eq!(board.note_at(pos(5, 3)), PitchClass::new(0));
        let before = picker.weight(&board, pos(5, 3), &stats, &errors);
        stats.record(PitchClass::new(0), false);
        let after = picker.weight(&board, pos(5, 3), &stats, &errors);

        assert!(after > before);
    }

    #[test]
    fn test_weighted_pick_favors_weak_spot() {
        let picker = Picker::with_weights(PickerWeights {
            base: 0.01,
            position_miss: 100.0,
            note_miss_rate: 0.0,
        });
        let board = Fretboard::standard();
        let stats = NoteStats::new();
        let mut errors = ErrorLog::new();
        let weak = pos(4, 7);
        for _ in 0..50 {
            errors.record_miss(weak);
        }

        let mut rng = rand::thread_rng();
        let hits = (0..200)
            .filter(|_| picker.pick_weighted(&mut rng, &board, &stats, &errors) == weak)
            .count();

        // Weak spot carries ~5000 of ~5000.8 total weight
        assert!(hits > 150);
    }
}
