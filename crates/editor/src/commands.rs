//! Key binding resolution.
//!
//! Chord resolution is a stateless pure function: every binding is a single
//! modifier+key combination, so no state machine is needed. The control
//! decides afterwards whether a resolved command applies to it (single-line
//! controls drop vertical movement, read-only controls drop mutations).

use textkit_input::{Key, KeyEvent};

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The event was consumed by the control
    Yes,
    /// The event was not handled (should propagate or be ignored)
    No,
}

/// Where a movement command sends the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// One grapheme cluster left
    Left,
    /// One grapheme cluster right
    Right,
    WordLeft,
    WordRight,
    Up,
    Down,
    PageUp,
    PageDown,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
}

impl Motion {
    /// Returns true for motions that change rows by pixel position.
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            Motion::Up | Motion::Down | Motion::PageUp | Motion::PageDown
        )
    }
}

/// Commands that can be executed on a text control.
///
/// These are resolved from key events by the stateless `resolve_command` function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert a character, replacing the selection
    InsertChar(char),
    /// Insert a tab character
    InsertTab,
    /// Return: a line break in multi-line controls, activation in single-line ones
    Return,
    /// Delete the selection or the codepoint before the cursor (Backspace)
    DeleteBackward,
    /// Delete the selection or the codepoint after the cursor (Delete key)
    DeleteForward,
    /// Delete back to the previous word boundary
    DeleteWordBackward,
    /// Delete forward to the next word boundary
    DeleteWordForward,
    /// Move the cursor; `extend` grows the selection from its fixed end
    Move { motion: Motion, extend: bool },
    SelectAll,
    Copy,
    Cut,
    Paste,
}

impl Command {
    /// Returns true if the command can change the document text.
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
                | Command::DeleteWordBackward
                | Command::DeleteWordForward
                | Command::Cut
                | Command::Paste
        )
    }
}

/// Resolves a key event to a command.
///
/// This is a pure stateless function: (modifiers, key) → Option<Command>.
pub fn resolve_command(event: &KeyEvent) -> Option<Command> {
    let mods = &event.modifiers;
    let ctrl = mods.control;
    let extend = mods.shift;
    let motion = |motion| Some(Command::Move { motion, extend });

    match event.key {
        // Ctrl+letter chords; shift state does not matter
        Key::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
            'a' => Some(Command::SelectAll),
            'c' => Some(Command::Copy),
            'x' => Some(Command::Cut),
            'v' => Some(Command::Paste),
            _ => None,
        },

        // Printable characters
        Key::Char(ch) if !ch.is_control() => Some(Command::InsertChar(ch)),
        Key::Char(_) => None,

        Key::Tab if !ctrl => Some(Command::InsertTab),
        Key::Return if !ctrl => Some(Command::Return),

        Key::Backspace if ctrl => Some(Command::DeleteWordBackward),
        Key::Backspace => Some(Command::DeleteBackward),
        Key::Delete if ctrl => Some(Command::DeleteWordForward),
        Key::Delete => Some(Command::DeleteForward),

        // Arrow keys; Ctrl moves by word horizontally
        Key::Left if ctrl => motion(Motion::WordLeft),
        Key::Left => motion(Motion::Left),
        Key::Right if ctrl => motion(Motion::WordRight),
        Key::Right => motion(Motion::Right),
        Key::Up => motion(Motion::Up),
        Key::Down => motion(Motion::Down),
        Key::PageUp => motion(Motion::PageUp),
        Key::PageDown => motion(Motion::PageDown),

        // Home/End; Ctrl goes to the document bounds
        Key::Home if ctrl => motion(Motion::DocumentStart),
        Key::Home => motion(Motion::LineStart),
        Key::End if ctrl => motion(Motion::DocumentEnd),
        Key::End => motion(Motion::LineEnd),

        // Escape is left to the host (closing popups, dropping focus)
        Key::Escape => None,

        // Ctrl+Tab, Ctrl+Return
        _ => None,
    }
}
