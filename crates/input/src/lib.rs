//! Input event types for keyboard, pointer, and scroll handling.
//!
//! These types abstract over platform event details and provide a small
//! Rust-native vocabulary the text controls dispatch on. The platform layer
//! converts its native events into these before calling the control.

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for a key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::default())
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    /// Creates a KeyEvent for a key with shift held.
    pub fn shifted(key: Key) -> Self {
        Self::new(key, Modifiers::SHIFT)
    }

    /// Creates a KeyEvent for a key with control held.
    pub fn ctrl(key: Key) -> Self {
        Self::new(key, Modifiers::CONTROL)
    }
}

/// Modifier keys that can be held during a key or pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key
    pub shift: bool,
    /// Control key (Ctrl/⌃, or Cmd/⌘ as mapped by the platform layer)
    pub control: bool,
    /// Alt key (Option/⌥)
    pub alt: bool,
}

impl Modifiers {
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        alt: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        shift: false,
        control: true,
        alt: false,
    };
}

/// Keys that can be pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace / Delete backward
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Tab key
    Tab,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
    /// Escape key
    Escape,
}

/// A point in view coordinates: pixels from the top-left corner of the
/// control, y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Scroll delta from trackpad or mouse wheel, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDelta {
    /// Horizontal scroll amount (positive = right)
    pub dx: f32,
    /// Vertical scroll amount (positive = down)
    pub dy: f32,
}

impl ScrollDelta {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// A pointer (mouse or touch) event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event
    pub kind: PointerEventKind,
    /// Position in view coordinates
    pub position: Point,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
    /// Number of consecutive clicks (1 for single, 2 for double, etc.)
    pub click_count: u32,
}

impl PointerEvent {
    /// A single-click press at `(x, y)` with no modifiers.
    pub fn press(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Press,
            position: Point::new(x, y),
            modifiers: Modifiers::default(),
            click_count: 1,
        }
    }

    /// A drag to `(x, y)` with the button held.
    pub fn drag(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Drag,
            ..Self::press(x, y)
        }
    }

    /// A button release at `(x, y)`.
    pub fn release(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Release,
            ..Self::press(x, y)
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_click_count(mut self, click_count: u32) -> Self {
        self.click_count = click_count;
        self
    }
}

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Button pressed
    Press,
    /// Pointer moved with the button held
    Drag,
    /// Button released
    Release,
}
