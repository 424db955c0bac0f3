/*
Chord Table
===========

The table is built once: every record is resolved on the fretboard and the
result stored next to it. Rows that cannot be resolved are set aside with the
reason, so one bad row never sinks the load.

After construction the table is read-only. Filtering borrows from it and
never copies records.
*/

use log::{debug, info, warn};

use super::record::ChordRecord;
use crate::fretboard::{FretAssignment, Fretboard, ResolveError, SeriesError};

/// A chord record together with its fret assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedChord {
    pub record: ChordRecord,
    pub frets: FretAssignment,
}

/// A row left out of the table, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row (header not counted)
    pub row: usize,
    pub error: ChordError,
}

/// Every resolvable chord, plus a report of the rows that were not
#[derive(Debug, Clone)]
pub struct ChordTable {
    fretboard: Fretboard,
    chords: Vec<DerivedChord>,
    skipped: Vec<SkippedRow>,
}

impl ChordTable {
    /// Derive fret assignments for every record, skipping malformed rows
    pub fn from_records(
        fretboard: Fretboard,
        records: impl IntoIterator<Item = ChordRecord>,
    ) -> Self {
        Self::from_rows(
            fretboard,
            records.into_iter().map(Ok::<_, ChordError>),
        )
    }

    /// Like `from_records`, for sources where a row may already have failed to read
    pub fn from_rows(
        fretboard: Fretboard,
        rows: impl IntoIterator<Item = Result<ChordRecord, ChordError>>,
    ) -> Self {
        let mut chords = Vec::new();
        let mut skipped = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            let derived = row.and_then(|record| {
                let frets = record.fret_assignment(&fretboard)?;
                Ok(DerivedChord { record, frets })
            });

            match derived {
                Ok(chord) => {
                    debug!("row {}: {} -> {}", row_number, chord.record.name(), chord.frets);
                    chords.push(chord);
                }
                Err(error) => {
                    warn!("skipping row {}: {}", row_number, error);
                    skipped.push(SkippedRow {
                        row: row_number,
                        error,
                    });
                }
            }
        }

        info!(
            "chord table ready: {} chords, {} rows skipped",
            chords.len(),
            skipped.len()
        );

        Self {
            fretboard,
            chords,
            skipped,
        }
    }

    pub fn fretboard(&self) -> &Fretboard {
        &self.fretboard
    }

    pub fn chords(&self) -> &[DerivedChord] {
        &self.chords
    }

    pub fn skipped(&self) -> &[SkippedRow] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

/// Errors that keep a single chord row out of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// A note name could not be placed on its string
    InvalidNote { chord: String, source: ResolveError },
    /// The row's lists do not describe a playable six-string voicing
    Malformed { chord: String, reason: SeriesError },
    /// The row could not be read from the source at all
    Unreadable { message: String },
}

impl std::fmt::Display for ChordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChordError::InvalidNote { chord, source } => {
                write!(f, "chord '{}': {}", chord, source)
            }
            ChordError::Malformed { chord, reason } => {
                write!(f, "malformed chord record '{}': {}", chord, reason)
            }
            ChordError::Unreadable { message } => write!(f, "unreadable row: {}", message),
        }
    }
}

impl std::error::Error for ChordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChordError::InvalidNote { source, .. } => Some(source),
            ChordError::Malformed { reason, .. } => Some(reason),
            ChordError::Unreadable { .. } => None,
        }
    }
}
