//! textkit: a single- and multi-line text editing control.
//!
//! [`TextEdit`] combines the document model from `textkit-buffer` with pixel
//! layout, scrolling, key bindings and observer notifications. It never draws
//! or talks to a windowing system: the host supplies [`FontMetrics`] for
//! measuring, a [`Clipboard`] for copy and paste, and a [`Painter`] that
//! receives a [`Frame`] to render.
//!
//! ```
//! use textkit::{Clipboard, Key, KeyEvent, MemoryClipboard, MonospaceMetrics, TextEdit, TextEditConfig};
//!
//! let mut edit = TextEdit::new(TextEditConfig::default(), MonospaceMetrics::default());
//! edit.update_size(200.0, 100.0);
//!
//! let mut clipboard = MemoryClipboard::new();
//! for ch in "hello".chars() {
//!     edit.handle_key(KeyEvent::char(ch), &mut clipboard);
//! }
//! edit.handle_key(KeyEvent::shifted(Key::Home), &mut clipboard);
//! edit.handle_key(KeyEvent::ctrl(Key::Char('c')), &mut clipboard);
//! assert_eq!(clipboard.get_text(), "hello");
//! ```
//!
//! Input types are defined in `textkit-input` and re-exported here so hosts
//! only need one dependency.

mod align;
mod clipboard;
mod commands;
mod config;
mod dirty_region;
mod font;
mod layout;
mod notify;
mod paint;
mod text_edit;
mod viewport;

pub use align::{AlignStrategy, Alignment, CenterAlign, LeftAlign, RightAlign};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use commands::{resolve_command, Command, Handled, Motion};
pub use config::{ConfigError, TextEditConfig};
pub use dirty_region::DirtyRegion;
pub use font::{FontMetrics, MonospaceMetrics};
pub use layout::{Extent, LineLayout};
pub use notify::{Notification, Observers, SubscriptionId};
pub use paint::{Frame, Painter};
pub use text_edit::TextEdit;
pub use viewport::{Viewport, ViewportOffset};

pub use textkit_buffer::{DirtyLines, Position, Range, SeparatorClass, TextBuffer};
pub use textkit_input::{
    Key, KeyEvent, Modifiers, Point, PointerEvent, PointerEventKind, ScrollDelta,
};
