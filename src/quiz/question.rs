//! A single drill question: target position, correct pitch, response timer

use crate::theory::{Fretboard, PitchClass, Position};
use std::time::Instant;

/// One highlighted position the user must name
#[derive(Clone, Debug)]
pub struct Question {
    /// The highlighted string/fret target
    pub position: Position,
    /// The pitch class sounded at the target
    pub answer: PitchClass,
    asked_at: Instant,
}

impl Question {
    /// Create a question for a position, deriving the correct pitch
    pub fn new(fretboard: &Fretboard, position: Position) -> Self {
        Question {
            position,
            answer: fretboard.note_at(position),
            asked_at: Instant::now(),
        }
    }

    /// Grade a typed answer against the correct pitch
    pub fn grade(&self, input: &str) -> bool {
        self.answer.matches(input)
    }

    /// Seconds elapsed since the question was shown
    pub fn response_time_secs(&self) -> f64 {
        self.asked_at.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_derived_from_position() {
        let board = Fretboard::standard();
        // String 5 (A) fret 3 is C
        let question = Question::new(&board, Position::new(5, 3).unwrap());
        assert_eq!(question.answer.primary_name(), "C");
        assert!(question.grade("c"));
        assert!(!question.grade("B"));
    }

    #[test]
    fn test_grade_accepts_enharmonics() {
        let board = Fretboard::standard();
        // String 2 (B) fret 2 is C#/Db
        let question = Question::new(&board, Position::new(2, 2).unwrap());
        assert!(question.grade("C#"));
        assert!(question.grade("Db"));
        assert!(question.grade("C#/Db"));
    }
}
