//! Property tests for buffer invariants.
//!
//! Every operation sequence must leave the buffer non-empty, the cursor and
//! selection clamped, the selection ordered, and the cursor on one of the
//! selection endpoints.

use proptest::prelude::*;
use textkit_buffer::{Position, Range, TextBuffer};

fn assert_invariants(buf: &TextBuffer) -> Result<(), TestCaseError> {
    let sel = buf.selection();
    let cursor = buf.cursor();
    prop_assert!(buf.row_count() >= 1);
    prop_assert!(sel.first <= sel.last, "unordered selection {:?}", sel);
    prop_assert_eq!(buf.clamp(sel.first), sel.first);
    prop_assert_eq!(buf.clamp(sel.last), sel.last);
    prop_assert!(
        cursor == sel.first || cursor == sel.last,
        "cursor {:?} detached from {:?}",
        cursor,
        sel
    );
    Ok(())
}

fn apply(buf: &mut TextBuffer, op: u8, arg: usize) {
    let extend = arg % 2 == 0;
    match op {
        0 => buf.move_left(extend),
        1 => buf.move_right(extend),
        2 => buf.move_up(extend),
        3 => buf.move_down(extend),
        4 => buf.move_word_left(extend),
        5 => buf.move_word_right(extend),
        6 => buf.move_to_line_start(extend),
        7 => buf.move_to_line_end(extend),
        8 => {
            buf.insert_char(['x', 'é', ' ', '\n', '😀'][arg % 5]);
        }
        9 => {
            buf.delete_backward();
        }
        10 => {
            buf.delete_forward();
        }
        11 => {
            buf.delete_word_backward();
        }
        12 => {
            buf.replace_selection("a\nb");
        }
        13 => buf.set_cursor_pos(Position::new(arg % 7, arg % 13), extend),
        _ => buf.select_word_at(Position::new(arg % 5, arg % 11)),
    }
}

proptest! {
    #[test]
    fn set_text_round_trips(text in "[a-zA-Z0-9 é😀\\n]{0,80}") {
        let mut buf = TextBuffer::new();
        buf.set_text(&text);
        prop_assert_eq!(buf.text(), text.clone());
        prop_assert_eq!(buf.row_count(), text.matches('\n').count() + 1);
        prop_assert_eq!(buf.cursor(), Position::new(0, 0));
    }

    #[test]
    fn clamp_is_total_and_idempotent(
        text in "[a-zé\\n]{0,40}",
        row in 0usize..20,
        column in 0usize..60,
    ) {
        let buf = TextBuffer::from_str(&text);
        let clamped = buf.clamp(Position::new(row, column));
        prop_assert!(clamped.row < buf.row_count());
        prop_assert!(clamped.column <= buf.line_length(clamped.row));
        prop_assert!(buf.line_text(clamped.row).is_char_boundary(clamped.column));
        prop_assert_eq!(buf.clamp(clamped), clamped);
    }

    #[test]
    fn operation_sequences_preserve_invariants(
        text in "[a-z (){}.\\n]{0,40}",
        ops in proptest::collection::vec((0u8..15, 0usize..100), 1..40),
    ) {
        let mut buf = TextBuffer::from_str(&text);
        for (op, arg) in ops {
            apply(&mut buf, op, arg);
            assert_invariants(&buf)?;
        }
    }

    #[test]
    fn empty_replace_at_document_end_is_noop(text in "[a-z\\n]{0,40}") {
        let mut buf = TextBuffer::from_str(&text);
        buf.move_to_document_end(false);
        let dirty = buf.replace_selection("");
        prop_assert!(dirty.is_none());
        prop_assert_eq!(buf.text(), text);
        prop_assert_eq!(buf.cursor(), buf.end_position());
    }

    #[test]
    fn replace_then_slice_recovers_inserted_text(
        text in "[a-z\\n]{0,30}",
        insert in "[a-z\\n]{0,12}",
        at in 0usize..40,
    ) {
        let mut buf = TextBuffer::from_str(&text);
        let start = buf.clamp(Position::new(at % 5, at));
        buf.set_cursor_pos(start, false);
        buf.replace_selection(&insert);
        buf.select(Range::new(start, buf.cursor()));
        prop_assert_eq!(buf.selected_text(), insert);
    }

    #[test]
    fn select_all_then_delete_leaves_one_empty_row(text in "[a-z\\n]{0,40}") {
        let mut buf = TextBuffer::from_str(&text);
        buf.select_all();
        buf.delete_backward();
        prop_assert!(buf.is_empty());
        prop_assert_eq!(buf.row_count(), 1);
        prop_assert_eq!(buf.cursor(), Position::new(0, 0));
    }
}
