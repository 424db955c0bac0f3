//! Sidebar selection state
//!
//! One constraint per string plus a cursor on the string being edited.
//! Every change produces a new query; the table itself is never touched.

use fretmap::{FretQuery, StringConstraint, STRING_COUNT};

/// Selection shown on start-up: third fret on both E strings
pub const INITIAL_SELECTION: [StringConstraint; STRING_COUNT] = [
    StringConstraint::Fret(3),
    StringConstraint::Any,
    StringConstraint::Any,
    StringConstraint::Any,
    StringConstraint::Any,
    StringConstraint::Fret(3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    query: FretQuery,
    /// String currently being edited
    cursor: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            query: FretQuery::new(INITIAL_SELECTION),
            cursor: 0,
        }
    }

    pub fn query(&self) -> &FretQuery {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_left(&mut self) {
        self.cursor = (self.cursor + STRING_COUNT - 1) % STRING_COUNT;
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1) % STRING_COUNT;
    }

    /// Step the current string to the next option (towards higher frets)
    pub fn next_option(&mut self) {
        let next = self.query.get(self.cursor).next();
        self.query.set(self.cursor, next);
    }

    /// Step the current string to the previous option
    pub fn previous_option(&mut self) {
        let previous = self.query.get(self.cursor).previous();
        self.query.set(self.cursor, previous);
    }

    pub fn set_current(&mut self, constraint: StringConstraint) {
        self.query.set(self.cursor, constraint);
    }

    /// Reset every string to "any"
    pub fn clear(&mut self) {
        self.query = FretQuery::any();
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
