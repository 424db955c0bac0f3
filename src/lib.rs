pub mod chords; // Chord records and the derived chord table
pub mod fretboard; // Note-to-fret resolution and fret series
#[cfg(feature = "csv")]
pub mod io; // Chord files in and out
pub mod query; // Per-string filtering and statistics
pub mod theory; // Pitch cycle, tunings, note spellings

/// Number of strings on the instrument every table is built for
pub const STRING_COUNT: usize = 6;

/// Widest span (in frets) a fingering may cover before distant notes are raised an octave
pub const MAX_FRET_SPAN: i32 = 7;

pub use chords::{ChordRecord, ChordTable, DerivedChord};
pub use fretboard::{FretAssignment, Fretboard};
pub use query::{FretQuery, StringConstraint};
pub use theory::{PitchCycle, Tuning};
