//! Session state tracking
//!
//! Maintains:
//! - Questions asked and answered correctly this run
//! - Running and EMA accuracy
//! - Current and best answer streaks
//! - Session timer

use std::time::Instant;

/// Per-run counters; never persisted
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Questions graded this session
    pub questions_answered: u32,
    /// Questions answered correctly this session
    pub correct_answers: u32,
    /// Running accuracy (0.0-1.0)
    pub total_accuracy: f32,
    /// EMA accuracy (exponential moving average)
    pub ema_accuracy: f32,
    /// EMA decay factor
    ema_alpha: f32,
    /// Consecutive correct answers
    pub streak: u32,
    /// Longest correct streak this session
    pub best_streak: u32,
    /// Session start time
    start_time: Option<Instant>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            questions_answered: 0,
            correct_answers: 0,
            total_accuracy: 1.0,
            ema_accuracy: 1.0,
            ema_alpha: 0.1,
            streak: 0,
            best_streak: 0,
            start_time: None,
        }
    }

    /// Start the session timer
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Session duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Record a graded answer
    pub fn record_answer(&mut self, correct: bool) {
        self.questions_answered += 1;
        if correct {
            self.correct_answers += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        self.total_accuracy = self.correct_answers as f32 / self.questions_answered as f32;

        let sample = if correct { 1.0 } else { 0.0 };
        self.ema_accuracy = self.ema_alpha * sample + (1.0 - self.ema_alpha) * self.ema_accuracy;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_answer_accuracy() {
        let mut state = SessionState::new();
        state.record_answer(true);
        state.record_answer(true);
        state.record_answer(false);
        state.record_answer(true);

        assert_eq!(state.questions_answered, 4);
        assert_eq!(state.correct_answers, 3);
        assert!((state.total_accuracy - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_streak_tracking() {
        let mut state = SessionState::new();
        state.record_answer(true);
        state.record_answer(true);
        state.record_answer(false);
        state.record_answer(true);

        assert_eq!(state.streak, 1);
        assert_eq!(state.best_streak, 2);
    }

    #[test]
    fn test_ema_moves_toward_samples() {
        let mut state = SessionState::new();
        for _ in 0..20 {
            state.record_answer(false);
        }
        assert!(state.ema_accuracy < 0.2);
    }
}
