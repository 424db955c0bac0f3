//! Fretboard mapping
//!
//! Turns note spellings into fret numbers on a fixed tuning, and whole chord
//! voicings into six-string fret assignments.

pub mod assignment;
pub mod resolver;
pub mod series;

pub use assignment::{Fret, FretAssignment};
pub use resolver::{Fretboard, ResolveError};
pub use series::{align_strings, normalize_octaves, SeriesError, MUTED_MARKER};
