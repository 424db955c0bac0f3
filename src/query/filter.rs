/*
Fret Query
==========

A query holds one constraint per string. A constraint either ignores the
string (`?`), demands it be muted (`x`), or demands an exact fret. A chord
matches when every string satisfies its constraint:

    ?  x  ?  ?  ?  3     -> A string muted, high E at the third fret

A query with nothing but `?` matches the whole table.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chords::DerivedChord;
use crate::fretboard::{Fret, FretAssignment, MUTED_MARKER};
use crate::STRING_COUNT;

/// Highest fret offered by the per-string selectors
pub const MAX_SELECTABLE_FRET: Fret = 14;

/// Every selectable constraint, in selector order: `?`, `x`, then frets 0 to 14
pub const SELECTOR_OPTIONS: [StringConstraint; MAX_SELECTABLE_FRET as usize + 3] = {
    let mut options = [StringConstraint::Any; MAX_SELECTABLE_FRET as usize + 3];
    options[1] = StringConstraint::Muted;
    let mut fret = 0;
    while fret <= MAX_SELECTABLE_FRET {
        options[fret as usize + 2] = StringConstraint::Fret(fret);
        fret += 1;
    }
    options
};

/// What one string must look like for a chord to match
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringConstraint {
    /// Don't care
    #[default]
    Any,
    /// String must not sound
    Muted,
    /// String must be fretted exactly here
    Fret(Fret),
}

impl StringConstraint {
    /// Whether a string's fret satisfies this constraint
    pub fn matches(self, fret: Option<Fret>) -> bool {
        match self {
            StringConstraint::Any => true,
            StringConstraint::Muted => fret.is_none(),
            StringConstraint::Fret(want) => fret == Some(want),
        }
    }

    /// Position of this constraint in `SELECTOR_OPTIONS`, if selectable
    pub fn selector_index(self) -> Option<usize> {
        SELECTOR_OPTIONS.iter().position(|&option| option == self)
    }

    /// Next selector option, wrapping after the highest fret
    pub fn next(self) -> Self {
        let index = self.selector_index().map_or(0, |i| (i + 1) % SELECTOR_OPTIONS.len());
        SELECTOR_OPTIONS[index]
    }

    /// Previous selector option, wrapping before `?`
    pub fn previous(self) -> Self {
        let len = SELECTOR_OPTIONS.len();
        let index = self.selector_index().map_or(0, |i| (i + len - 1) % len);
        SELECTOR_OPTIONS[index]
    }
}

impl std::fmt::Display for StringConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringConstraint::Any => write!(f, "?"),
            StringConstraint::Muted => write!(f, "{}", MUTED_MARKER),
            StringConstraint::Fret(fret) => write!(f, "{}", fret),
        }
    }
}

impl std::str::FromStr for StringConstraint {
    type Err = ParseConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "?" => Ok(StringConstraint::Any),
            s if s.eq_ignore_ascii_case(MUTED_MARKER) => Ok(StringConstraint::Muted),
            s => s
                .parse::<Fret>()
                .map(StringConstraint::Fret)
                .map_err(|_| ParseConstraintError(s.to_string())),
        }
    }
}

/// Text that is neither `?`, `x`, nor a fret number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConstraintError(pub String);

impl std::fmt::Display for ParseConstraintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not '?', '{}' or a fret number", self.0, MUTED_MARKER)
    }
}

impl std::error::Error for ParseConstraintError {}

/// One constraint per string, all of which must hold
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FretQuery([StringConstraint; STRING_COUNT]);

impl FretQuery {
    pub fn new(constraints: [StringConstraint; STRING_COUNT]) -> Self {
        Self(constraints)
    }

    /// Query that matches everything
    pub fn any() -> Self {
        Self::default()
    }

    /// Replace the constraint on one string; out-of-range strings are ignored
    pub fn set(&mut self, string: usize, constraint: StringConstraint) {
        if let Some(slot) = self.0.get_mut(string) {
            *slot = constraint;
        }
    }

    /// Builder form of `set`
    pub fn with(mut self, string: usize, constraint: StringConstraint) -> Self {
        self.set(string, constraint);
        self
    }

    pub fn get(&self, string: usize) -> StringConstraint {
        self.0.get(string).copied().unwrap_or_default()
    }

    pub fn constraints(&self) -> &[StringConstraint; STRING_COUNT] {
        &self.0
    }

    /// True when no string is constrained
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == StringConstraint::Any)
    }

    pub fn matches(&self, frets: &FretAssignment) -> bool {
        self.0
            .iter()
            .zip(frets.frets())
            .all(|(constraint, &fret)| constraint.matches(fret))
    }

    /// Chords satisfying every constraint, in table order
    pub fn apply<'a>(&self, chords: &'a [DerivedChord]) -> Vec<&'a DerivedChord> {
        if self.is_empty() {
            return chords.iter().collect();
        }
        chords.iter().filter(|chord| self.matches(&chord.frets)).collect()
    }
}

/// The filter as an expression over the derived columns, e.g.
/// `FRETS_0 == 3 & FRETS_1 == x`; `*` when nothing is constrained
impl std::fmt::Display for FretQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "*");
        }

        let mut first = true;
        for (string, constraint) in self.0.iter().enumerate() {
            if *constraint == StringConstraint::Any {
                continue;
            }
            if !first {
                write!(f, " & ")?;
            }
            write!(f, "FRETS_{} == {}", string, constraint)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chords::{ChordRecord, ChordTable};
    use crate::fretboard::Fretboard;

    fn table() -> ChordTable {
        ChordTable::from_records(
            Fretboard::standard(),
            vec![
                ChordRecord::new("E", "major", "1,3,5", "E,B,E,G#,B,E"),
                ChordRecord::new("C", "major", "1,3,5", "C,E,G,C,E").with_positions("x,3,2,0,1,0"),
                ChordRecord::new("D", "major", "1,3,5", "D,A,D,F#").with_positions("x,x,0,2,3,2"),
                ChordRecord::new("G", "major", "1,3,5", "G,B,D,G,B,G").with_positions("3,2,0,0,0,3"),
                ChordRecord::new("A", "minor", "1,b3,5", "A,E,A,C,E").with_positions("x,0,2,2,1,0"),
            ],
        )
    }

    fn roots(chords: &[&DerivedChord]) -> Vec<String> {
        chords.iter().map(|c| c.record.root.clone()).collect()
    }

    #[test]
    fn selector_has_seventeen_options() {
        assert_eq!(SELECTOR_OPTIONS.len(), 17);
        assert_eq!(SELECTOR_OPTIONS[0], StringConstraint::Any);
        assert_eq!(SELECTOR_OPTIONS[1], StringConstraint::Muted);
        assert_eq!(SELECTOR_OPTIONS[2], StringConstraint::Fret(0));
        assert_eq!(SELECTOR_OPTIONS[16], StringConstraint::Fret(14));
    }

    #[test]
    fn options_cycle_both_ways() {
        assert_eq!(StringConstraint::Any.next(), StringConstraint::Muted);
        assert_eq!(StringConstraint::Fret(14).next(), StringConstraint::Any);
        assert_eq!(StringConstraint::Any.previous(), StringConstraint::Fret(14));
        assert_eq!(StringConstraint::Fret(0).previous(), StringConstraint::Muted);
        assert_eq!(StringConstraint::Fret(20).next(), StringConstraint::Any);
    }

    #[test]
    fn parses_selector_labels() {
        assert_eq!("?".parse::<StringConstraint>(), Ok(StringConstraint::Any));
        assert_eq!("X".parse::<StringConstraint>(), Ok(StringConstraint::Muted));
        assert_eq!("12".parse::<StringConstraint>(), Ok(StringConstraint::Fret(12)));
        assert!("twelve".parse::<StringConstraint>().is_err());
    }

    #[test]
    fn empty_query_returns_everything() {
        let table = table();
        assert_eq!(FretQuery::any().apply(table.chords()).len(), table.len());
    }

    #[test]
    fn muted_a_string_returns_exactly_muted_rows() {
        let table = table();
        let query = FretQuery::any().with(1, StringConstraint::Muted);
        let hits = query.apply(table.chords());
        assert_eq!(roots(&hits), vec!["D"]);
        assert!(table
            .chords()
            .iter()
            .filter(|c| !hits.iter().any(|h| std::ptr::eq(*h, *c)))
            .all(|c| !c.frets.is_muted(1)));
    }

    #[test]
    fn constraints_are_conjunctive() {
        let table = table();
        let query = FretQuery::any()
            .with(0, StringConstraint::Muted)
            .with(5, StringConstraint::Fret(0));
        assert_eq!(roots(&query.apply(table.chords())), vec!["C", "A"]);

        let query = FretQuery::new([
            StringConstraint::Fret(3),
            StringConstraint::Any,
            StringConstraint::Any,
            StringConstraint::Any,
            StringConstraint::Any,
            StringConstraint::Fret(3),
        ]);
        assert_eq!(roots(&query.apply(table.chords())), vec!["G"]);
    }

    #[test]
    fn displays_as_expression() {
        assert_eq!(FretQuery::any().to_string(), "*");
        let query = FretQuery::any()
            .with(0, StringConstraint::Fret(3))
            .with(1, StringConstraint::Muted);
        assert_eq!(query.to_string(), "FRETS_0 == 3 & FRETS_1 == x");
    }

    #[test]
    fn out_of_range_string_is_ignored() {
        let query = FretQuery::any().with(9, StringConstraint::Muted);
        assert!(query.is_empty());
        assert_eq!(query.get(9), StringConstraint::Any);
    }
}
