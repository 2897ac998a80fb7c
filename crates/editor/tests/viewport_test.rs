//! Integration tests for scrolling, hit-testing and painting.
//!
//! These tests verify:
//! - Points map to document positions through scroll offset and alignment
//! - Edits and cursor moves scroll the caret into view
//! - DirtyLines from edits become the expected DirtyRegion
//! - Painters receive only the visible rows

use std::cell::RefCell;
use std::rc::Rc;

use textkit::{
    Alignment, DirtyRegion, Frame, Handled, Key, KeyEvent, MemoryClipboard, MonospaceMetrics,
    Notification, Painter, Point, PointerEvent, Position, ScrollDelta, TextEdit, TextEditConfig,
};

/// 10px wide cells, 20px rows, in a 100x100 view: 5 visible rows.
fn control(text: &str) -> TextEdit {
    control_with(TextEditConfig::default(), text)
}

fn control_with(config: TextEditConfig, text: &str) -> TextEdit {
    let mut edit = TextEdit::new(config, MonospaceMetrics::new(10.0, 20.0));
    edit.update_size(100.0, 100.0);
    edit.set_text(text);
    edit.take_dirty_region();
    edit
}

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("line{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(edit: &mut TextEdit, event: KeyEvent) -> Handled {
    edit.handle_key(event, &mut MemoryClipboard::new())
}

/// Painter that records what it was given.
#[derive(Default)]
struct RecordingPainter {
    rows: Vec<(usize, String, f32, f32)>,
    spans: Vec<Option<std::ops::Range<usize>>>,
    caret: Option<Point>,
}

impl Painter for RecordingPainter {
    fn paint(&mut self, frame: &Frame<'_>) {
        for (row, text, origin, top) in frame.rows() {
            self.rows.push((row, text.to_string(), origin, top));
            self.spans.push(frame.selection_span(row));
        }
        self.caret = Some(frame.caret);
    }
}

// =============================================================================
// Hit-testing
// =============================================================================

#[test]
fn test_point_to_position_unscrolled() {
    let edit = control("hello\nworld");
    assert_eq!(edit.position_at_point(Point::new(15.0, 25.0)), Position::new(1, 1));
    assert_eq!(edit.position_at_point(Point::new(99.0, 5.0)), Position::new(0, 5));
}

#[test]
fn test_point_below_document_hits_last_row() {
    let edit = control("a\nb");
    assert_eq!(edit.position_at_point(Point::new(0.0, 95.0)), Position::new(1, 0));
}

#[test]
fn test_point_to_position_accounts_for_scroll() {
    let mut edit = control(&numbered_lines(20));
    assert!(edit.scroll_to(0.0, 200.0));
    assert_eq!(edit.position_at_point(Point::new(0.0, 5.0)), Position::new(10, 0));
}

#[test]
fn test_point_to_position_right_aligned() {
    let config = TextEditConfig {
        alignment: Alignment::Right,
        ..TextEditConfig::default()
    };
    let edit = control_with(config, "abcd");
    // 99px available (view minus caret); line origin is 59
    assert_eq!(edit.position_at_point(Point::new(40.0, 5.0)), Position::new(0, 0));
    assert_eq!(edit.position_at_point(Point::new(70.0, 5.0)), Position::new(0, 1));
}

// =============================================================================
// Scroll into view
// =============================================================================

#[test]
fn test_moving_down_scrolls_minimally() {
    let mut edit = control(&numbered_lines(20));
    for _ in 0..5 {
        press(&mut edit, KeyEvent::plain(Key::Down));
    }
    // Row 5 spans 100..120
    assert_eq!(edit.viewport().offset().y, 20.0);

    press(&mut edit, KeyEvent::plain(Key::Up));
    assert_eq!(edit.viewport().offset().y, 20.0);
}

#[test]
fn test_document_end_scrolls_to_bottom() {
    let mut edit = control(&numbered_lines(20));
    press(&mut edit, KeyEvent::ctrl(Key::End));
    assert_eq!(edit.viewport().offset().y, 300.0);

    press(&mut edit, KeyEvent::ctrl(Key::Home));
    assert_eq!(edit.viewport().offset().y, 0.0);
}

#[test]
fn test_long_line_scrolls_horizontally() {
    let mut edit = control("");
    for _ in 0..15 {
        press(&mut edit, KeyEvent::char('x'));
    }
    // Caret at x=150, 1px wide, in a 100px view
    assert_eq!(edit.viewport().offset().x, 51.0);

    press(&mut edit, KeyEvent::plain(Key::Home));
    assert_eq!(edit.viewport().offset().x, 0.0);
}

#[test]
fn test_deleting_lines_reclamps_scroll() {
    let mut edit = control(&numbered_lines(20));
    press(&mut edit, KeyEvent::ctrl(Key::End));
    press(&mut edit, KeyEvent::ctrl(Key::Char('a')));
    press(&mut edit, KeyEvent::plain(Key::Backspace));

    assert_eq!(edit.text(), "");
    assert_eq!(edit.viewport().offset().y, 0.0);
}

// =============================================================================
// Explicit scrolling
// =============================================================================

#[test]
fn test_scroll_wheel_clamps_to_content() {
    let mut edit = control(&numbered_lines(20));
    assert_eq!(edit.handle_scroll(ScrollDelta::new(0.0, 1000.0)), Handled::Yes);
    assert_eq!(edit.viewport().offset().y, 300.0);
    assert_eq!(edit.handle_scroll(ScrollDelta::new(0.0, 10.0)), Handled::No);

    assert_eq!(edit.handle_scroll(ScrollDelta::new(0.0, -1000.0)), Handled::Yes);
    assert_eq!(edit.viewport().offset().y, 0.0);
}

#[test]
fn test_scroll_does_not_move_cursor() {
    let mut edit = control(&numbered_lines(20));
    edit.scroll_by(0.0, 100.0);
    assert_eq!(edit.cursor(), Position::new(0, 0));
}

#[test]
fn test_make_cursor_visible_after_scrolling_away() {
    let mut edit = control(&numbered_lines(20));
    edit.scroll_to(0.0, 300.0);
    assert!(edit.make_cursor_visible());
    assert_eq!(edit.viewport().offset().y, 0.0);
    assert!(!edit.make_cursor_visible());
}

#[test]
fn test_growing_view_reclamps_offset() {
    let mut edit = control(&numbered_lines(10));
    edit.scroll_to(0.0, 100.0);
    edit.update_size(100.0, 400.0);
    assert_eq!(edit.viewport().offset().y, 0.0);
}

// =============================================================================
// Notifications
// =============================================================================

#[test]
fn test_scroll_notifies_observers() {
    let mut edit = control(&numbered_lines(20));
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let id = edit.subscribe(move |n| sink.borrow_mut().push(*n));

    edit.scroll_by(0.0, 40.0);
    assert_eq!(*log.borrow(), vec![Notification::Scrolled]);

    assert!(edit.unsubscribe(id));
    edit.scroll_by(0.0, 40.0);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_click_notifies_selection_only() {
    let mut edit = control("hello");
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    edit.subscribe(move |n| sink.borrow_mut().push(*n));

    edit.handle_pointer(PointerEvent::press(25.0, 5.0));
    edit.handle_pointer(PointerEvent::release(25.0, 5.0));
    assert_eq!(*log.borrow(), vec![Notification::SelectionChanged]);
}

// =============================================================================
// Dirty regions
// =============================================================================

#[test]
fn test_typing_dirties_one_row() {
    let mut edit = control("abc\ndef\nghi");
    press(&mut edit, KeyEvent::plain(Key::Down));
    edit.take_dirty_region();

    press(&mut edit, KeyEvent::char('x'));
    let region = edit.take_dirty_region();
    assert_eq!(region, DirtyRegion::row(1));
    assert!(region.contains(1));
    assert!(!region.contains(0) && !region.contains(2));
}

#[test]
fn test_newline_dirties_to_bottom_of_view() {
    let mut edit = control("abc\ndef\nghi");
    press(&mut edit, KeyEvent::plain(Key::Down));
    edit.take_dirty_region();

    press(&mut edit, KeyEvent::plain(Key::Return));
    assert_eq!(edit.take_dirty_region(), DirtyRegion::Lines { from: 1, to: 5 });
}

#[test]
fn test_scrolling_dirties_full_viewport() {
    let mut edit = control(&numbered_lines(20));
    edit.scroll_by(0.0, 20.0);
    assert_eq!(edit.take_dirty_region(), DirtyRegion::FullViewport);
}

// =============================================================================
// Painting
// =============================================================================

#[test]
fn test_paint_visible_rows_only() {
    let mut edit = control(&numbered_lines(20));
    edit.scroll_to(0.0, 30.0);

    let mut painter = RecordingPainter::default();
    edit.paint(&mut painter);

    // 30..130 covers rows 1 through 6, partially at both ends
    let rows: Vec<usize> = painter.rows.iter().map(|r| r.0).collect();
    assert_eq!(rows, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(painter.rows[0], (1, "line1".to_string(), 0.0, 20.0));
}

#[test]
fn test_paint_selection_and_caret() {
    let mut edit = control("hello\nworld");
    edit.set_cursor_pos(Position::new(0, 3), false);
    edit.set_cursor_pos(Position::new(1, 2), true);

    let mut painter = RecordingPainter::default();
    edit.paint(&mut painter);

    assert_eq!(painter.spans, vec![Some(3..5), Some(0..2)]);
    assert_eq!(painter.caret, Some(Point::new(20.0, 20.0)));
}

#[test]
fn test_paint_centered_origins() {
    let config = TextEditConfig {
        alignment: Alignment::Center,
        caret_width: 2.0,
        ..TextEditConfig::default()
    };
    let edit = control_with(config, "ab\nabcdef");

    let mut painter = RecordingPainter::default();
    edit.paint(&mut painter);

    // 98px available: (98 - 20) / 2 and (98 - 60) / 2
    assert_eq!(painter.rows[0].2, 39.0);
    assert_eq!(painter.rows[1].2, 19.0);
}
