//! The text control.
//!
//! `TextEdit` exclusively owns a [`TextBuffer`], a [`Viewport`] and the
//! collaborators it measures text with. The input layer calls
//! [`TextEdit::handle_key`], [`TextEdit::handle_pointer`] and
//! [`TextEdit::handle_scroll`] synchronously; each call is one complete state
//! transition, after which the control:
//!
//! 1. accumulates the screen rows that need repainting
//! 2. scrolls the caret into view if the text or selection moved
//! 3. notifies observers of what actually changed
//!
//! The same control serves single-line fields and multi-line editors; the
//! differences are driven entirely by [`TextEditConfig`].

use std::fmt;

use textkit_buffer::{DirtyLines, Position, Range, TextBuffer};
use textkit_input::{KeyEvent, Point, PointerEvent, PointerEventKind, ScrollDelta};

use crate::align::AlignStrategy;
use crate::clipboard::Clipboard;
use crate::commands::{resolve_command, Command, Handled, Motion};
use crate::config::TextEditConfig;
use crate::dirty_region::DirtyRegion;
use crate::font::FontMetrics;
use crate::layout::{Extent, LineLayout};
use crate::notify::{Notification, Observers, SubscriptionId};
use crate::paint::{Frame, Painter};
use crate::viewport::{Viewport, ViewportOffset};

/// Everything observers can be notified about, captured before a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Snapshot {
    cursor: Position,
    selection: Range,
    offset: ViewportOffset,
}

/// Returns `text` up to its first line feed.
fn first_line(text: &str) -> &str {
    text.find('\n').map_or(text, |idx| &text[..idx])
}

/// A single- or multi-line editable text control.
pub struct TextEdit {
    buffer: TextBuffer,
    viewport: Viewport,
    metrics: Box<dyn FontMetrics>,
    align: Box<dyn AlignStrategy>,
    config: TextEditConfig,
    observers: Observers,
    /// Screen rows needing repaint since the last `take_dirty_region`
    dirty: DirtyRegion,
    /// True between a single-click press and its release
    dragging: bool,
    /// Remembered x for a run of vertical movements
    goal_x: Option<f32>,
}

impl TextEdit {
    /// Creates an empty control.
    pub fn new(config: TextEditConfig, metrics: impl FontMetrics + 'static) -> Self {
        Self::with_metrics(config, Box::new(metrics))
    }

    /// Creates an empty control from boxed metrics.
    pub fn with_metrics(config: TextEditConfig, metrics: Box<dyn FontMetrics>) -> Self {
        let config = config.sanitized();
        let buffer = TextBuffer::with_separators(config.separator_class());
        let viewport = Viewport::new(metrics.line_height());
        let align = config.alignment.strategy();
        tracing::debug!(
            multiline = config.multiline,
            read_only = config.read_only,
            alignment = ?config.alignment,
            "text control created"
        );
        Self {
            buffer,
            viewport,
            metrics,
            align,
            config,
            observers: Observers::new(),
            dirty: DirtyRegion::FullViewport,
            dragging: false,
            goal_x: None,
        }
    }

    // ==================== Accessors ====================

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Read access to the document, cursor and selection.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.buffer.cursor()
    }

    pub fn selection(&self) -> Range {
        self.buffer.selection()
    }

    pub fn selected_text(&self) -> String {
        self.buffer.selected_text()
    }

    pub fn has_selection(&self) -> bool {
        self.buffer.has_selection()
    }

    pub fn config(&self) -> &TextEditConfig {
        &self.config
    }

    pub fn is_multiline(&self) -> bool {
        self.config.multiline
    }

    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.config.read_only = read_only;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // ==================== Observers ====================

    /// Registers an observer called after every state change it describes.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&Notification) + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ==================== Layout ====================

    fn layout_for_width(&self, view_width: f32) -> LineLayout<'_> {
        LineLayout::new(
            self.buffer.lines(),
            self.metrics.as_ref(),
            self.align.as_ref(),
            view_width - self.config.caret_width,
        )
    }

    fn layout(&self) -> LineLayout<'_> {
        self.layout_for_width(self.viewport.width())
    }

    fn content_extent(&self) -> Extent {
        self.layout().content_extent(self.config.caret_width)
    }

    /// Document position under a view-space point.
    pub fn position_at_point(&self, pt: Point) -> Position {
        let (x, y) = self.viewport.to_document(pt);
        self.layout().position_at(x, y)
    }

    /// Top-left of the caret in document-space pixels.
    pub fn cursor_point(&self) -> Point {
        let (x, y) = self.layout().caret_point(self.buffer.cursor());
        Point::new(x, y)
    }

    // ==================== State transitions ====================

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.buffer.cursor(),
            selection: self.buffer.selection(),
            offset: self.viewport.offset(),
        }
    }

    /// Runs one state transition and then settles repaint, scroll and
    /// notification state.
    fn apply(&mut self, op: impl FnOnce(&mut Self) -> DirtyLines) {
        let before = self.snapshot();
        let edit = op(self);
        self.finish(before, edit);
    }

    fn finish(&mut self, before: Snapshot, edit: DirtyLines) {
        let rows = self.buffer.row_count();
        let text_changed = !edit.is_none();
        let sel = self.buffer.selection();
        let selection_changed = before.cursor != self.buffer.cursor() || before.selection != sel;

        if text_changed {
            let region = self.viewport.dirty_lines_to_region(&edit, rows);
            self.dirty.merge(region);
            // A shorter document can leave the view scrolled past its end
            let offset = self.viewport.offset();
            let content = self.content_extent();
            self.viewport.scroll_to(offset.x, offset.y, content);
        }
        if selection_changed {
            // Old and new highlight rows, cursor rows included
            let from = before.selection.first.row.min(sel.first.row);
            let to = (before.selection.last.row.max(sel.last.row) + 1).min(rows);
            let region = self
                .viewport
                .dirty_lines_to_region(&DirtyLines::Range { from, to }, rows);
            self.dirty.merge(region);
        }
        if text_changed || selection_changed {
            self.scroll_cursor_into_view();
        }

        let scrolled = self.viewport.offset() != before.offset;
        if scrolled {
            self.dirty = DirtyRegion::FullViewport;
        }

        if text_changed {
            self.observers.emit(Notification::TextChanged);
        }
        if selection_changed {
            self.observers.emit(Notification::SelectionChanged);
        }
        if scrolled {
            self.observers.emit(Notification::Scrolled);
        }
    }

    fn scroll_cursor_into_view(&mut self) -> bool {
        let caret = self.layout().caret_point(self.buffer.cursor());
        self.viewport.make_visible(caret, self.config.caret_width)
    }

    /// Screen rows changed since the last call, resetting the accumulator.
    pub fn take_dirty_region(&mut self) -> DirtyRegion {
        std::mem::take(&mut self.dirty)
    }

    // ==================== Programmatic editing ====================

    /// Replaces the whole text, moving the cursor to (0, 0).
    ///
    /// Single-line controls keep only the text before the first line feed.
    pub fn set_text(&mut self, text: &str) {
        let text = if self.config.multiline {
            text
        } else {
            first_line(text)
        };
        let changed = self.buffer.text() != text;
        self.goal_x = None;
        self.dragging = false;
        self.apply(|te| {
            let dirty = te.buffer.set_text(text);
            if changed {
                dirty
            } else {
                DirtyLines::None
            }
        });
        self.dirty = DirtyRegion::FullViewport;
    }

    /// Replaces the selection with `text` and returns the rows that changed.
    ///
    /// This is the programmatic entry point and ignores `read_only`; key
    /// handling checks it before getting here.
    pub fn replace_selection(&mut self, text: &str) -> DirtyLines {
        let text = if self.config.multiline {
            text
        } else {
            first_line(text)
        };
        self.goal_x = None;
        let mut result = DirtyLines::None;
        self.apply(|te| {
            result = te.buffer.replace_selection(text);
            result
        });
        result
    }

    /// Deletes the whole document, leaving one empty row.
    pub fn clear(&mut self) -> DirtyLines {
        self.goal_x = None;
        let mut result = DirtyLines::None;
        self.apply(|te| {
            result = te.buffer.clear();
            result
        });
        result
    }

    /// Moves the cursor to `pos` (clamped); `extend` grows the selection.
    pub fn set_cursor_pos(&mut self, pos: Position, extend: bool) {
        self.goal_x = None;
        self.apply(|te| {
            te.buffer.set_cursor_pos(pos, extend);
            DirtyLines::None
        });
    }

    /// Selects `range`, cursor at its end.
    pub fn select(&mut self, range: Range) {
        self.goal_x = None;
        self.apply(|te| {
            te.buffer.select(range);
            DirtyLines::None
        });
    }

    pub fn select_all(&mut self) {
        self.goal_x = None;
        self.apply(|te| {
            te.buffer.select_all();
            DirtyLines::None
        });
    }

    /// Selects the word under `pos`, as a double-click does.
    pub fn select_word_at(&mut self, pos: Position) {
        self.goal_x = None;
        self.apply(|te| {
            te.buffer.select_word_at(pos);
            DirtyLines::None
        });
    }


    /// Copies the selection. Does nothing when the selection is collapsed.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        if self.buffer.has_selection() {
            clipboard.set_text(&self.buffer.selected_text());
        }
    }

    /// Copies the selection and deletes it. Returns false (and leaves the
    /// clipboard alone) for read-only controls or a collapsed selection.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        if self.config.read_only || !self.buffer.has_selection() {
            return false;
        }
        clipboard.set_text(&self.buffer.selected_text());
        self.replace_selection("");
        true
    }

    /// Replaces the selection with the clipboard text. Returns false for
    /// read-only controls or when there is nothing to paste.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        if self.config.read_only {
            return false;
        }
        let text = clipboard.get_text();
        let text = if self.config.multiline {
            text.as_str()
        } else {
            first_line(&text)
        };
        if text.is_empty() {
            return false;
        }
        self.replace_selection(text);
        true
    }

    // ==================== Scrolling ====================

    /// Called when the host lays the control out.
    pub fn update_size(&mut self, width: f32, height: f32) {
        let before = self.viewport.offset();
        let content = self
            .layout_for_width(width)
            .content_extent(self.config.caret_width);
        self.viewport.update_size(width, height, content);
        self.dirty = DirtyRegion::FullViewport;
        if self.viewport.offset() != before {
            self.observers.emit(Notification::Scrolled);
        }
    }

    /// Scrolls by a relative amount, clamped to the content. Returns true if
    /// the view moved.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) -> bool {
        let content = self.content_extent();
        let scrolled = self.viewport.scroll_by(dx, dy, content);
        self.after_scroll(scrolled)
    }

    /// Scrolls so document point `(x, y)` is at the top-left, clamped to the
    /// content. Returns true if the view moved.
    pub fn scroll_to(&mut self, x: f32, y: f32) -> bool {
        let content = self.content_extent();
        let scrolled = self.viewport.scroll_to(x, y, content);
        self.after_scroll(scrolled)
    }

    /// Scrolls minimally so the caret is fully visible. Returns true if the
    /// view moved.
    pub fn make_cursor_visible(&mut self) -> bool {
        let scrolled = self.scroll_cursor_into_view();
        self.after_scroll(scrolled)
    }

    fn after_scroll(&mut self, scrolled: bool) -> bool {
        if scrolled {
            self.dirty = DirtyRegion::FullViewport;
            self.observers.emit(Notification::Scrolled);
        }
        scrolled
    }

    // ==================== Input dispatch ====================

    /// Handles a keyboard event.
    ///
    /// The clipboard is only touched by copy, cut and paste chords.
    pub fn handle_key(&mut self, event: KeyEvent, clipboard: &mut dyn Clipboard) -> Handled {
        match resolve_command(&event) {
            Some(cmd) => self.execute(cmd, clipboard),
            None => Handled::No,
        }
    }

    /// Handles a trackpad or mouse wheel scroll. Returns `Handled::No` when
    /// the view is already at the limit, so the host can pass the scroll on.
    pub fn handle_scroll(&mut self, delta: ScrollDelta) -> Handled {
        if self.scroll_by(delta.dx, delta.dy) {
            Handled::Yes
        } else {
            Handled::No
        }
    }

    /// Handles a pointer press, drag or release.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Handled {
        let pos = self.position_at_point(event.position);
        match event.kind {
            PointerEventKind::Press => {
                self.goal_x = None;
                if event.click_count >= 2 {
                    self.dragging = false;
                    self.apply(|te| {
                        te.buffer.select_word_at(pos);
                        DirtyLines::None
                    });
                } else {
                    self.dragging = true;
                    let extend = event.modifiers.shift;
                    self.apply(|te| {
                        te.buffer.set_cursor_pos(pos, extend);
                        DirtyLines::None
                    });
                }
                Handled::Yes
            }
            PointerEventKind::Drag => {
                if !self.dragging {
                    return Handled::No;
                }
                self.apply(|te| {
                    te.buffer.set_cursor_pos(pos, true);
                    DirtyLines::None
                });
                Handled::Yes
            }
            PointerEventKind::Release => {
                if std::mem::replace(&mut self.dragging, false) {
                    Handled::Yes
                } else {
                    Handled::No
                }
            }
        }
    }

    /// Executes a resolved command.
    fn execute(&mut self, cmd: Command, clipboard: &mut dyn Clipboard) -> Handled {
        if cmd.is_mutation() && self.config.read_only {
            tracing::trace!(?cmd, "ignored by read-only control");
            return Handled::No;
        }

        let vertical = matches!(cmd, Command::Move { motion, .. } if motion.is_vertical());
        if vertical && !self.config.multiline {
            return Handled::No;
        }
        if !vertical {
            self.goal_x = None;
        }

        match cmd {
            Command::Return => {
                if !self.config.multiline {
                    self.observers.emit(Notification::Activated);
                    return Handled::Yes;
                }
                if self.config.read_only {
                    return Handled::No;
                }
                self.apply(|te| te.buffer.insert_newline());
            }
            Command::InsertChar(ch) => self.apply(|te| te.buffer.insert_char(ch)),
            Command::InsertTab => self.apply(|te| te.buffer.insert_char('\t')),
            Command::DeleteBackward => self.apply(|te| te.buffer.delete_backward()),
            Command::DeleteForward => self.apply(|te| te.buffer.delete_forward()),
            Command::DeleteWordBackward => self.apply(|te| te.buffer.delete_word_backward()),
            Command::DeleteWordForward => self.apply(|te| te.buffer.delete_word_forward()),
            Command::Move { motion, extend } => self.apply(|te| {
                te.move_cursor(motion, extend);
                DirtyLines::None
            }),
            Command::SelectAll => self.apply(|te| {
                te.buffer.select_all();
                DirtyLines::None
            }),
            Command::Copy => self.copy(clipboard),
            Command::Cut => {
                self.cut(clipboard);
            }
            Command::Paste => {
                self.paste(clipboard);
            }
        }
        Handled::Yes
    }

    fn move_cursor(&mut self, motion: Motion, extend: bool) {
        let page = self.viewport.visible_lines().max(1) as isize;
        match motion {
            Motion::Left => self.buffer.move_left(extend),
            Motion::Right => self.buffer.move_right(extend),
            Motion::WordLeft => self.buffer.move_word_left(extend),
            Motion::WordRight => self.buffer.move_word_right(extend),
            Motion::LineStart => self.buffer.move_to_line_start(extend),
            Motion::LineEnd => self.buffer.move_to_line_end(extend),
            Motion::DocumentStart => self.buffer.move_to_document_start(extend),
            Motion::DocumentEnd => self.buffer.move_to_document_end(extend),
            Motion::Up => self.move_vertically(-1, extend),
            Motion::Down => self.move_vertically(1, extend),
            Motion::PageUp => self.move_vertically(-page, extend),
            Motion::PageDown => self.move_vertically(page, extend),
        }
    }

    /// Moves `rows` rows up (negative) or down, keeping the caret's x
    /// position. No-op when already on the first or last row.
    fn move_vertically(&mut self, rows: isize, extend: bool) {
        let cursor = self.buffer.cursor();
        let last_row = self.buffer.row_count() - 1;
        let target = if rows < 0 {
            cursor.row.saturating_sub(rows.unsigned_abs())
        } else {
            cursor.row.saturating_add(rows.unsigned_abs()).min(last_row)
        };
        if target == cursor.row {
            return;
        }

        let layout = self.layout();
        let goal = self
            .goal_x
            .unwrap_or_else(|| layout.caret_point(cursor).0);
        let column = layout.column_nearest_x(target, goal);

        self.buffer
            .set_cursor_pos(Position::new(target, column), extend);
        self.goal_x = Some(goal);
    }

    // ==================== Painting ====================

    /// Hands the visible state to `painter`.
    pub fn paint(&self, painter: &mut dyn Painter) {
        let layout = self.layout();
        let visible_rows = self.viewport.visible_rows(self.buffer.row_count());
        let row_origins = visible_rows.clone().map(|row| layout.origin_x(row)).collect();
        let (caret_x, caret_y) = layout.caret_point(self.buffer.cursor());

        let frame = Frame {
            lines: self.buffer.lines(),
            selection: self.buffer.selection(),
            cursor: self.buffer.cursor(),
            caret: Point::new(caret_x, caret_y),
            caret_width: self.config.caret_width,
            offset: self.viewport.offset(),
            line_height: layout.line_height(),
            visible_rows,
            row_origins,
        };
        painter.paint(&frame);
    }
}

impl fmt::Debug for TextEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEdit")
            .field("buffer", &self.buffer)
            .field("viewport", &self.viewport)
            .field("config", &self.config)
            .field("observers", &self.observers)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}
