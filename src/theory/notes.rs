//! Pitch-class table: 12 chromatic pitch names with enharmonic alternates
//!
//! Handles:
//! - Index arithmetic modulo 12
//! - Primary/secondary (enharmonic) naming
//! - Answer matching (case-insensitive, accidental-symbol tolerant)

use std::fmt;

/// Number of chromatic pitch classes
pub const PITCH_CLASS_COUNT: usize = 12;

/// (primary name, enharmonic alternate) per chromatic index, C = 0
const PITCH_NAMES: [(&str, Option<&str>); PITCH_CLASS_COUNT] = [
    ("C", None),
    ("C#", Some("Db")),
    ("D", None),
    ("D#", Some("Eb")),
    ("E", None),
    ("F", None),
    ("F#", Some("Gb")),
    ("G", None),
    ("G#", Some("Ab")),
    ("A", None),
    ("A#", Some("Bb")),
    ("B", None),
];

/// A chromatic pitch class (octave-independent note identity)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create from any integer offset, reduced modulo 12
    pub fn new(index: i32) -> Self {
        PitchClass(index.rem_euclid(PITCH_CLASS_COUNT as i32) as u8)
    }

    /// Chromatic index (0-11)
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Primary spelling (sharp-based), e.g. "C#"
    pub fn primary_name(self) -> &'static str {
        PITCH_NAMES[self.index()].0
    }

    /// Enharmonic alternate spelling (flat-based), e.g. "Db"
    pub fn secondary_name(self) -> Option<&'static str> {
        PITCH_NAMES[self.index()].1
    }

    /// Combined label as shown to the user, e.g. "C#/Db" or "E"
    pub fn label(self) -> String {
        match self.secondary_name() {
            Some(alt) => format!("{}/{}", self.primary_name(), alt),
            None => self.primary_name().to_string(),
        }
    }

    /// All 12 pitch classes in chromatic order
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASS_COUNT as u8).map(PitchClass)
    }

    /// Normalize a typed answer: trim, lowercase, unify accidental symbols
    fn normalize(answer: &str) -> String {
        answer
            .trim()
            .to_lowercase()
            .replace('♯', "#")
            .replace('♭', "b")
    }

    /// Check a typed answer against this pitch class.
    ///
    /// Accepts the primary name, the enharmonic alternate, or a combined
    /// "X/Y" form any part of which names this pitch class.
    pub fn matches(self, answer: &str) -> bool {
        let normalized = Self::normalize(answer);
        if normalized.is_empty() {
            return false;
        }

        let primary = self.primary_name().to_lowercase();
        let secondary = self.secondary_name().map(|s| s.to_lowercase());

        normalized.split('/').map(str::trim).any(|part| {
            part == primary || secondary.as_deref() == Some(part)
        })
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
