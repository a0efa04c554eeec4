//! Fretboard Note Trainer - guitar note drills in the terminal
//!
//! Single-session, self-contained CLI application. Highlights a string/fret
//! position, grades the typed pitch name, and persists per-pitch accuracy
//! and per-position error counts between sessions.

mod cli;
mod quiz;
mod session;
mod theory;

use clap::Parser;
use cli::display::{print_stats_table, Display, DisplayMode};
use cli::input::{Control, InputHandler};
use quiz::{Picker, Question};
use rand::rngs::ThreadRng;
use session::{ErrorLog, NoteStats, SessionState, StatsStore};
use std::error::Error;
use theory::Fretboard;

#[derive(Parser, Debug)]
#[command(name = "Fretboard Note Trainer")]
#[command(about = "Guitar fretboard note drills with persistent accuracy stats")]
struct Args {
    /// Directory for the persisted statistics files
    #[arg(short, long, default_value = "data")]
    data_dir: String,

    /// Initial display mode (1 fretboard, 2 text, 3 both)
    #[arg(short = 'm', long, default_value = "1")]
    display_mode: u8,

    /// Start in weak-spot focus mode (weighted toward past mistakes)
    #[arg(short, long)]
    focus: bool,

    /// Show every note name on the fretboard (study view)
    #[arg(short, long)]
    all_notes: bool,

    /// Clear persisted statistics and exit
    #[arg(long)]
    reset_stats: bool,
}

/// Pick the next question for the current mode
fn next_question(
    rng: &mut ThreadRng,
    picker: &Picker,
    fretboard: &Fretboard,
    stats: &NoteStats,
    errors: &ErrorLog,
    focus: bool,
) -> Question {
    let position = picker.pick(rng, fretboard, stats, errors, focus);
    Question::new(fretboard, position)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let store = StatsStore::new(&args.data_dir);

    if args.reset_stats {
        store.save_all(&NoteStats::new(), &ErrorLog::new())?;
        println!("Statistics reset.");
        return Ok(());
    }

    let mut mode = DisplayMode::from_flag(args.display_mode)
        .ok_or("display mode must be 1, 2, or 3")?;
    let mut focus = args.focus;
    let mut all_notes = args.all_notes;

    // Persisted state; missing or corrupt files start zeroed
    let mut stats = store.load_note_stats();
    let mut errors = store.load_error_log();

    let fretboard = Fretboard::standard();
    let picker = Picker::new();
    let mut rng = rand::thread_rng();

    let mut session = SessionState::new();
    session.start();

    // Initialize display
    let display = Display::simple()?;
    display.clear()?;

    // Initialize input handler
    InputHandler::enable_raw_mode()?;
    let input = InputHandler::new();

    let mut question = next_question(&mut rng, &picker, &fretboard, &stats, &errors, focus);
    let mut user_input = String::new();
    let mut message: Option<String> = None;

    // Event loop
    'session: loop {
        // Display current state
        display.clear()?;
        display.show_title()?;

        let highlight = if all_notes || mode.shows_fretboard() {
            Some(question.position)
        } else {
            None
        };
        display.show_fretboard(&fretboard, highlight, all_notes)?;
        display.show_prompt(question.position, mode, all_notes)?;
        display.show_input(&user_input)?;
        display.show_session_line(&session)?;
        display.show_note_stats(&stats)?;
        display.show_modes(mode, focus, all_notes)?;
        display.show_help()?;
        if let Some(ref msg) = message {
            display.show_message(msg)?;
        }

        // Read input
        let key = match input.read_key()? {
            Some(key) => key,
            None => continue, // Timeout
        };

        // Check for exit
        if InputHandler::is_exit(&key) {
            break 'session;
        }

        // Mode toggles; each starts a fresh question
        if let Some(control) = InputHandler::control(&key) {
            match control {
                Control::CycleDisplayMode => {
                    mode = mode.cycle();
                    message = Some(format!("Display mode: {}", mode.label()));
                }
                Control::ToggleFocus => {
                    focus = !focus;
                    message = Some(if focus {
                        "Focus mode on: weighted toward past mistakes".to_string()
                    } else {
                        "Focus mode off: uniform random questions".to_string()
                    });
                }
                Control::ToggleAllNotes => {
                    all_notes = !all_notes;
                    message = Some(format!(
                        "All-notes view {}",
                        if all_notes { "on" } else { "off" }
                    ));
                }
                Control::ResetStats => {
                    display.show_message("Reset all statistics? (y/n)")?;
                    let answer = input.wait_key()?;
                    if InputHandler::key_to_char(&answer) == Some('y') {
                        stats.reset();
                        errors.reset();
                        store.save_all(&stats, &errors)?;
                        message = Some("All statistics reset.".to_string());
                    } else {
                        message = Some("Reset cancelled.".to_string());
                    }
                }
                Control::NewQuestion => {
                    message = None;
                }
            }
            question = next_question(&mut rng, &picker, &fretboard, &stats, &errors, focus);
            user_input.clear();
            continue;
        }

        // Handle backspace
        if InputHandler::is_backspace(&key) {
            user_input.pop();
            continue;
        }

        // Handle enter/submit
        if InputHandler::is_enter(&key) {
            if user_input.is_empty() {
                continue;
            }

            let correct = question.grade(&user_input);
            let response_secs = question.response_time_secs();

            // Update counters
            stats.record(question.answer, correct);
            if !correct {
                errors.record_miss(question.position);
            }
            session.record_answer(correct);

            // Rewrite both blobs before the next question
            store.save_all(&stats, &errors)?;

            // Show result with the target revealed
            display.clear()?;
            display.show_title()?;
            display.show_fretboard(&fretboard, Some(question.position), all_notes)?;
            display.show_prompt(question.position, DisplayMode::Both, all_notes)?;
            display.show_input(&user_input)?;
            display.show_feedback(correct, question.answer, response_secs)?;
            display.show_session_line(&session)?;
            display.show_note_stats(&stats)?;
            display.show_message("Press any key for the next question (Esc to quit)...")?;

            let next = input.wait_key()?;
            if InputHandler::is_exit(&next) {
                break 'session;
            }

            question = next_question(&mut rng, &picker, &fretboard, &stats, &errors, focus);
            user_input.clear();
            message = None;
            continue;
        }

        // Add character to answer
        if let Some(c) = InputHandler::key_to_char(&key) {
            user_input.push(c);
        }
    }

    // Cleanup
    InputHandler::disable_raw_mode()?;
    display.shutdown()?;

    // Summary
    println!("\nSession complete!");
    println!(
        "{}/{} correct ({:.0}%) | best streak {} | {:.1}s",
        session.correct_answers,
        session.questions_answered,
        session.total_accuracy * 100.0,
        session.best_streak,
        session.duration_secs()
    );

    let worst = errors.worst_positions(5);
    if !worst.is_empty() {
        println!("\nMost missed positions:");
        for (position, count) in worst {
            println!("  {} — {} misses", position, count);
        }
    }

    println!();
    print_stats_table(&stats);

    Ok(())
}
