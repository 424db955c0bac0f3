//! Chord records and the table of derived fret assignments built from them

pub mod record;
pub mod table;

pub use record::ChordRecord;
pub use table::{ChordError, ChordTable, DerivedChord, SkippedRow};
