use std::cmp::Ordering;

/// A document coordinate as (row, column), both 0-indexed.
///
/// `column` is a byte offset into the row's UTF-8 text and always sits on a
/// `char` boundary once it has been through [`LineBuffer::clamp`].
///
/// [`LineBuffer::clamp`]: crate::LineBuffer::clamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        // Row-major: row first, then column
        match self.row.cmp(&other.row) {
            Ordering::Equal => self.column.cmp(&other.column),
            ord => ord,
        }
    }
}

/// An ordered pair of positions delimiting a span of text.
///
/// `first <= last` always holds; every constructor sorts its endpoints.
/// An empty range (`first == last`) means "cursor only, no selection".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub first: Position,
    pub last: Position,
}

impl Range {
    /// Builds a range from two endpoints in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { first: a, last: b }
        } else {
            Self { first: b, last: a }
        }
    }

    /// An empty range sitting at `pos`.
    pub fn collapsed(pos: Position) -> Self {
        Self {
            first: pos,
            last: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Returns true if the range spans more than one row.
    pub fn is_multiline(&self) -> bool {
        self.first.row != self.last.row
    }

    /// Half-open containment: `first <= pos < last`.
    pub fn contains(&self, pos: Position) -> bool {
        self.first <= pos && pos < self.last
    }
}

/// Information about which rows were dirtied by a mutation.
/// Used by the owning control to decide what needs repainting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyLines {
    /// No rows changed (cursor-only movement or a no-op edit).
    None,
    /// A single row changed (edits that stay inside one row).
    Single(usize),
    /// Rows in `[from, to)` changed.
    Range { from: usize, to: usize },
    /// Everything from a row to the end of the document changed.
    /// Used when rows are split or joined and later rows shift.
    FromLineToEnd(usize),
}

impl DirtyLines {
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the first dirty row, if any.
    pub fn start_line(&self) -> Option<usize> {
        match *self {
            DirtyLines::None => None,
            DirtyLines::Single(row) | DirtyLines::FromLineToEnd(row) => Some(row),
            DirtyLines::Range { from, .. } => Some(from),
        }
    }

    /// Merges another dirty region into this one, producing the smallest
    /// region that covers both.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (*self, other) {
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            (DirtyLines::FromLineToEnd(a), b) | (b, DirtyLines::FromLineToEnd(a)) => {
                let start = b.start_line().map_or(a, |b| a.min(b));
                DirtyLines::FromLineToEnd(start)
            }

            (DirtyLines::Single(a), DirtyLines::Single(b)) if a == b => DirtyLines::Single(a),
            (DirtyLines::Single(a), DirtyLines::Single(b)) => DirtyLines::Range {
                from: a.min(b),
                to: a.max(b) + 1,
            },

            (DirtyLines::Single(a), DirtyLines::Range { from, to })
            | (DirtyLines::Range { from, to }, DirtyLines::Single(a)) => DirtyLines::Range {
                from: from.min(a),
                to: to.max(a + 1),
            },

            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: a.min(c),
                    to: b.max(d),
                }
            }
        };
    }
}
