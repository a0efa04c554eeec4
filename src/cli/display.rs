//! Terminal display and UI rendering
//!
//! Features:
//! - Fretboard grid with highlighted target cell
//! - All-notes study view
//! - Answer echo and per-answer feedback
//! - Session accuracy overlay and per-pitch breakdown

#[allow(unused_imports)]
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};

use crate::session::{NoteStats, SessionState};
use crate::theory::{Fretboard, PitchClass, Position, FRETS_PER_STRING, STRING_COUNT};

/// What the question prompt reveals
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Highlight the fretboard cell only
    Fretboard,
    /// Describe the position in text only
    Text,
    /// Both highlight and text
    Both,
}

impl DisplayMode {
    /// Map the numeric CLI flag (1-3) to a mode
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            1 => Some(DisplayMode::Fretboard),
            2 => Some(DisplayMode::Text),
            3 => Some(DisplayMode::Both),
            _ => None,
        }
    }

    /// Cycle 1 → 2 → 3 → 1
    pub fn cycle(self) -> Self {
        match self {
            DisplayMode::Fretboard => DisplayMode::Text,
            DisplayMode::Text => DisplayMode::Both,
            DisplayMode::Both => DisplayMode::Fretboard,
        }
    }

    pub fn shows_fretboard(self) -> bool {
        matches!(self, DisplayMode::Fretboard | DisplayMode::Both)
    }

    pub fn shows_text(self) -> bool {
        matches!(self, DisplayMode::Text | DisplayMode::Both)
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Fretboard => "fretboard only",
            DisplayMode::Text => "text only",
            DisplayMode::Both => "fretboard + text",
        }
    }
}

// Fixed screen rows for absolute positioning
const ROW_TITLE: u16 = 0;
const ROW_GRID: u16 = 2;
const ROW_PROMPT: u16 = ROW_GRID + STRING_COUNT as u16 + 2;
const ROW_INPUT: u16 = ROW_PROMPT + 1;
const ROW_FEEDBACK: u16 = ROW_INPUT + 2;
const ROW_SESSION: u16 = ROW_FEEDBACK + 3;
const ROW_NOTE_STATS: u16 = ROW_SESSION + 1;
const ROW_MODES: u16 = ROW_NOTE_STATS + 1;
const ROW_HELP: u16 = ROW_MODES + 1;
const ROW_MESSAGE: u16 = ROW_HELP + 2;

const CELL_WIDTH: usize = 4;

/// Terminal display manager
pub struct Display {
    /// Whether we're using alternate screen
    use_alternate_screen: bool,
}

impl Display {
    /// Create display without alternate screen (simpler mode)
    pub fn simple() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Display {
            use_alternate_screen: false,
        })
    }

    /// Clear screen
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Title line
    pub fn show_title(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_TITLE),
            SetForegroundColor(Color::Cyan),
            Print("Fretboard Note Trainer"),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Render the 6 x 13 fretboard grid.
    ///
    /// The target cell is highlighted in red; in all-notes mode every cell
    /// shows its primary note name (study view, answer included).
    pub fn show_fretboard(
        &self,
        fretboard: &Fretboard,
        target: Option<Position>,
        all_notes: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        // Fret number header
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_GRID),
            SetForegroundColor(Color::DarkGrey),
            Print("      "),
        )?;
        for fret in 0..FRETS_PER_STRING {
            execute!(stdout, Print(format!("{:^width$}", fret, width = CELL_WIDTH)))?;
        }
        execute!(stdout, ResetColor)?;

        for string in 1..=STRING_COUNT {
            execute!(
                stdout,
                cursor::MoveTo(0, ROW_GRID + string as u16),
                SetForegroundColor(Color::DarkGrey),
                Print(format!("str {} ", string)),
                ResetColor,
            )?;

            for fret in 0..FRETS_PER_STRING {
                let position = Position { string, fret };
                let is_target = target == Some(position);

                let text = if all_notes {
                    fretboard.note_at(position).primary_name().to_string()
                } else if is_target {
                    "●".to_string()
                } else {
                    "·".to_string()
                };
                let cell = format!("{:^width$}", text, width = CELL_WIDTH);

                if is_target {
                    execute!(
                        stdout,
                        SetBackgroundColor(Color::Red),
                        SetForegroundColor(Color::White),
                        Print(cell),
                        ResetColor,
                    )?;
                } else if all_notes {
                    execute!(stdout, Print(cell))?;
                } else {
                    execute!(
                        stdout,
                        SetForegroundColor(Color::DarkGrey),
                        Print(cell),
                        ResetColor,
                    )?;
                }
            }
        }

        execute!(stdout, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Question prompt line, subject to the display mode
    pub fn show_prompt(
        &self,
        target: Position,
        mode: DisplayMode,
        all_notes: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, ROW_PROMPT),
            SetForegroundColor(Color::Cyan),
            Print("Name the note: "),
            ResetColor,
        )?;

        // All-notes mode always names the position
        if all_notes || mode.shows_text() {
            execute!(stdout, Print(format!("{}", target)))?;
        } else {
            execute!(
                stdout,
                SetForegroundColor(Color::DarkGrey),
                Print("(highlighted on the fretboard)"),
                ResetColor,
            )?;
        }

        execute!(stdout, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Echo the typed answer
    pub fn show_input(&self, input: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_INPUT),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print("Your answer: "),
            ResetColor,
            Print(input),
            Print("\n"),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Per-answer feedback with the correct name(s) and response time
    pub fn show_feedback(
        &self,
        correct: bool,
        answer: PitchClass,
        response_secs: f64,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, ROW_FEEDBACK),
            SetForegroundColor(Color::Blue),
            Print("─".repeat(56)),
            Print("\n"),
            ResetColor,
            cursor::MoveTo(0, ROW_FEEDBACK + 1),
        )?;

        if correct {
            execute!(
                stdout,
                SetForegroundColor(Color::Green),
                Print("Correct!"),
                ResetColor,
            )?;
        } else {
            execute!(
                stdout,
                SetForegroundColor(Color::Red),
                Print("Incorrect"),
                ResetColor,
                Print(format!("  the answer was {}", answer.label())),
            )?;
        }

        execute!(
            stdout,
            Print(format!("  ({:.1}s)", response_secs)),
            Print("\n"),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Session accuracy overlay
    pub fn show_session_line(
        &self,
        state: &SessionState,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        let accuracy = state.total_accuracy;

        execute!(
            stdout,
            cursor::MoveTo(0, ROW_SESSION),
            SetForegroundColor(Color::Magenta),
            Print("Session: "),
            ResetColor,
            Print(format!(
                "{}/{} correct",
                state.correct_answers, state.questions_answered
            )),
            Print("  |  Accuracy: "),
            SetForegroundColor(if accuracy > 0.9 {
                Color::Green
            } else if accuracy > 0.8 {
                Color::Yellow
            } else {
                Color::Red
            }),
            Print(format!("{:.0}%", accuracy * 100.0)),
            ResetColor,
            Print(format!(
                "  |  Streak: {} (best {})\n",
                state.streak, state.best_streak
            )),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Compact per-pitch hit-rate breakdown (all 12 pitch names)
    pub fn show_note_stats(&self, stats: &NoteStats) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        execute!(
            stdout,
            cursor::MoveTo(0, ROW_NOTE_STATS),
            SetForegroundColor(Color::Magenta),
            Print("Notes:   "),
            ResetColor,
        )?;

        for (name, counts) in stats.rows() {
            execute!(stdout, Print(format!("{}:", name)))?;
            if counts.total() == 0 {
                execute!(
                    stdout,
                    SetForegroundColor(Color::DarkGrey),
                    Print("--% "),
                    ResetColor
                )?;
            } else {
                let rate = counts.hit_rate();
                let color = if rate > 0.9 {
                    Color::Green
                } else if rate > 0.8 {
                    Color::Yellow
                } else {
                    Color::Red
                };
                execute!(
                    stdout,
                    SetForegroundColor(color),
                    Print(format!("{:.0}% ", rate * 100.0)),
                    ResetColor
                )?;
            }
        }

        execute!(stdout, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Active mode indicators
    pub fn show_modes(
        &self,
        mode: DisplayMode,
        focus: bool,
        all_notes: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_MODES),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "Mode: {}  |  Focus: {}  |  All notes: {}\n",
                mode.label(),
                if focus { "on" } else { "off" },
                if all_notes { "on" } else { "off" },
            )),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Show help text
    pub fn show_help(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_HELP),
            SetForegroundColor(Color::DarkGrey),
            Print("Type a note name (e.g. C, F#, Bb) and press ENTER"),
            cursor::MoveTo(0, ROW_HELP + 1),
            Print("Ctrl+D display mode | Ctrl+F focus | Ctrl+A all notes | Ctrl+R reset | Esc quit\n"),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// One-line status message (mode toggles, reset confirmation)
    pub fn show_message(&self, message: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, ROW_MESSAGE),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(message),
            ResetColor,
            Print("\n"),
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();

        if self.use_alternate_screen {
            execute!(stdout, LeaveAlternateScreen, cursor::Show,)?;
        }

        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        // Return simple display that doesn't use alternate screen
        Display {
            use_alternate_screen: false,
        }
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}

/// Plain (non-positioned) per-pitch stats table, printed after the
/// session ends or after a reset
pub fn print_stats_table(stats: &NoteStats) {
    println!("Note   Correct  Incorrect  Hit rate  Miss rate");
    for (name, counts) in stats.rows() {
        if counts.total() == 0 {
            println!("{:<6} {:>7}  {:>9}      --        --", name, 0, 0);
        } else {
            println!(
                "{:<6} {:>7}  {:>9}  {:>6.1}%   {:>6.1}%",
                name,
                counts.correct,
                counts.incorrect,
                counts.hit_rate() * 100.0,
                counts.miss_rate() * 100.0,
            );
        }
    }
}
