//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture
//! - Note-name character input (letters, accidentals, '/')
//! - Control-key chords for mode toggles
//! - Ctrl+C graceful exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// In-session control actions bound to Ctrl chords
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Ctrl+D: cycle display mode
    CycleDisplayMode,
    /// Ctrl+F: toggle weak-spot focus mode
    ToggleFocus,
    /// Ctrl+A: toggle all-notes study view
    ToggleAllNotes,
    /// Ctrl+R: reset persisted statistics (confirmed separately)
    ResetStats,
    /// Ctrl+N: skip to a new question
    NewQuestion,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations (milliseconds)
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> Result<Option<KeyEvent>, Box<dyn std::error::Error>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) => Ok(Some(key_event)),
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Block until the next keystroke
    pub fn wait_key(&self) -> Result<KeyEvent, Box<dyn std::error::Error>> {
        loop {
            if let Some(key) = self.read_key()? {
                return Ok(key);
            }
        }
    }

    /// Check if key event is an exit signal (Ctrl+C or Escape)
    pub fn is_exit(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
            KeyCode::Esc => true,
            _ => false,
        }
    }

    /// Map Ctrl chords to control actions
    pub fn control(key: &KeyEvent) -> Option<Control> {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Char('d') => Some(Control::CycleDisplayMode),
            KeyCode::Char('f') => Some(Control::ToggleFocus),
            KeyCode::Char('a') => Some(Control::ToggleAllNotes),
            KeyCode::Char('r') => Some(Control::ResetStats),
            KeyCode::Char('n') => Some(Control::NewQuestion),
            _ => None,
        }
    }

    /// Convert key event to an answer character (note letters, accidentals)
    pub fn key_to_char(key: &KeyEvent) -> Option<char> {
        match key.code {
            KeyCode::Char(c) => {
                // Only return if no special modifiers (not Ctrl, not Alt)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    Some(c)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Check if key is backspace
    pub fn is_backspace(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Backspace)
    }

    /// Check if key is enter/return
    pub fn is_enter(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_exit_keys() {
        assert!(InputHandler::is_exit(&key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(InputHandler::is_exit(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!InputHandler::is_exit(&key(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_control_chords() {
        assert_eq!(
            InputHandler::control(&key(KeyCode::Char('f'), KeyModifiers::CONTROL)),
            Some(Control::ToggleFocus)
        );
        assert_eq!(
            InputHandler::control(&key(KeyCode::Char('f'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            InputHandler::control(&key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(Control::CycleDisplayMode)
        );
    }

    #[test]
    fn test_key_to_char_ignores_chords() {
        assert_eq!(
            InputHandler::key_to_char(&key(KeyCode::Char('b'), KeyModifiers::NONE)),
            Some('b')
        );
        assert_eq!(
            InputHandler::key_to_char(&key(KeyCode::Char('b'), KeyModifiers::CONTROL)),
            None
        );
    }
}
