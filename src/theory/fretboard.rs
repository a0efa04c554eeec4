//! Fretboard geometry: strings, frets, and note lookup
//!
//! Handles:
//! - Position validation (strings 1-6, frets 0-12)
//! - Open-string tuning offsets
//! - Constant-time note lookup: (base + fret) mod 12

use crate::theory::notes::PitchClass;
use std::fmt;

/// Number of strings
pub const STRING_COUNT: u8 = 6;

/// Frets per string (fret 0 is the open string)
pub const FRETS_PER_STRING: u8 = 13;

/// Open-string chromatic indices for standard tuning,
/// strings 1 (high E) through 6 (low E): E B G D A E
const OPEN_STRING_PITCHES: [i32; STRING_COUNT as usize] = [4, 11, 7, 2, 9, 4];

/// A single string/fret location on the fretboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// String number, 1 (highest) to 6 (lowest)
    pub string: u8,
    /// Fret number, 0 (open) to 12
    pub fret: u8,
}

impl Position {
    /// Create a position, validating string and fret ranges
    pub fn new(string: u8, fret: u8) -> Option<Self> {
        if (1..=STRING_COUNT).contains(&string) && fret < FRETS_PER_STRING {
            Some(Position { string, fret })
        } else {
            None
        }
    }

    /// Storage key used in the persisted error log, e.g. "2_5"
    pub fn storage_key(&self) -> String {
        format!("{}_{}", self.string, self.fret)
    }

    /// Parse a storage key back into a position
    pub fn parse_key(key: &str) -> Option<Self> {
        let (string, fret) = key.split_once('_')?;
        Position::new(string.parse().ok()?, fret.parse().ok()?)
    }

    /// All 78 positions in string-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=STRING_COUNT).flat_map(|string| {
            (0..FRETS_PER_STRING).map(move |fret| Position { string, fret })
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "string {}, fret {}", self.string, self.fret)
    }
}

/// A tuned fretboard that maps positions to pitch classes
#[derive(Clone, Debug)]
pub struct Fretboard {
    open_pitches: [PitchClass; STRING_COUNT as usize],
}

impl Fretboard {
    /// Standard-tuning fretboard (E B G D A E, high to low)
    pub fn standard() -> Self {
        let mut open_pitches = [PitchClass::new(0); STRING_COUNT as usize];
        for (slot, &index) in open_pitches.iter_mut().zip(OPEN_STRING_PITCHES.iter()) {
            *slot = PitchClass::new(index);
        }
        Fretboard { open_pitches }
    }

    /// Pitch class sounded at a position: (open pitch + fret) mod 12
    pub fn note_at(&self, position: Position) -> PitchClass {
        let base = self.open_pitches[(position.string - 1) as usize];
        PitchClass::new(base.index() as i32 + position.fret as i32)
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_strings_standard_tuning() {
        let board = Fretboard::standard();
        let expected = ["E", "B", "G", "D", "A", "E"];
        for (string, name) in (1..=6).zip(expected) {
            let pos = Position::new(string, 0).unwrap();
            assert_eq!(board.note_at(pos).primary_name(), name);
        }
    }

    #[test]
    fn test_fret_twelve_wraps_to_open() {
        let board = Fretboard::standard();
        for string in 1..=6 {
            let open = board.note_at(Position::new(string, 0).unwrap());
            let octave = board.note_at(Position::new(string, 12).unwrap());
            assert_eq!(open, octave);
        }
    }

    #[test]
    fn test_known_positions() {
        let board = Fretboard::standard();
        // String 2 (B) fret 1 is C, string 3 (G) fret 2 is A
        assert_eq!(
            board.note_at(Position::new(2, 1).unwrap()).primary_name(),
            "C"
        );
        assert_eq!(
            board.note_at(Position::new(3, 2).unwrap()).primary_name(),
            "A"
        );
        // String 6 (low E) fret 5 is A
        assert_eq!(
            board.note_at(Position::new(6, 5).unwrap()).primary_name(),
            "A"
        );
    }

    #[test]
    fn test_position_validation() {
        assert!(Position::new(0, 0).is_none());
        assert!(Position::new(7, 0).is_none());
        assert!(Position::new(1, 13).is_none());
        assert!(Position::new(6, 12).is_some());
    }

    #[test]
    fn test_storage_key_roundtrip() {
        let pos = Position::new(4, 11).unwrap();
        assert_eq!(pos.storage_key(), "4_11");
        assert_eq!(Position::parse_key("4_11"), Some(pos));
        assert_eq!(Position::parse_key("9_1"), None);
        assert_eq!(Position::parse_key("garbage"), None);
    }

    #[test]
    fn test_all_positions_count() {
        assert_eq!(Position::all().count(), 78);
    }
}
