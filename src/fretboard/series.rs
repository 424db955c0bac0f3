/*
Chord Fret Series
=================

A chord voicing arrives as a list of note names for the strings that sound,
plus (usually) a six-entry finger-position list where `x` marks a muted string:

    FINGER_POSITIONS  x,3,2,0,1,0
    NOTE_NAMES          C,E,G,C,E

The position list fixes the shape. Note names fill its non-`x` slots in order,
and the counts must agree exactly. Without a position list the note list must
already cover all six strings, using empty entries (or `x`) for muted strings.

Each string is then resolved on the fretboard, notes below the nut are lifted
an octave, and the whole voicing is pulled into a playable span: any fret more
than seven below the highest fret is raised by twelve.

    [3, x, 14, 2, x, 3]  depth 14  ->  [15, x, 14, 14, x, 15]
*/

use super::assignment::{Fret, FretAssignment};
use super::resolver::{Fretboard, ResolveError};
use crate::theory::pitch_cycle::CYCLE_LEN;
use crate::{MAX_FRET_SPAN, STRING_COUNT};

/// Finger-position entry marking a muted string
pub const MUTED_MARKER: &str = "x";

const OCTAVE: i32 = CYCLE_LEN as i32;

fn is_muted_marker(entry: &str) -> bool {
    entry.eq_ignore_ascii_case(MUTED_MARKER)
}

/// Spread note names across the six strings
///
/// With `positions`, the note list must hold exactly one entry per non-muted
/// position. Without it, the note list must hold one entry per string.
pub fn align_strings<'a>(
    notes: &[&'a str],
    positions: Option<&[&str]>,
) -> Result<[&'a str; STRING_COUNT], SeriesError> {
    let mut aligned = [""; STRING_COUNT];

    match positions {
        Some(positions) => {
            if positions.len() != STRING_COUNT {
                return Err(SeriesError::PositionCount {
                    actual: positions.len(),
                });
            }

            let played = positions.iter().filter(|p| !is_muted_marker(p)).count();
            if notes.len() != played {
                return Err(SeriesError::NoteCount {
                    expected: played,
                    actual: notes.len(),
                });
            }

            let mut notes = notes.iter();
            for (string, (slot, position)) in aligned.iter_mut().zip(positions).enumerate() {
                if is_muted_marker(position) {
                    continue;
                }
                if let Some(&note) = notes.next() {
                    if note.is_empty() || is_muted_marker(note) {
                        return Err(SeriesError::BlankNote { string });
                    }
                    *slot = note;
                }
            }
        }
        None => {
            if notes.len() != STRING_COUNT {
                return Err(SeriesError::NoteCount {
                    expected: STRING_COUNT,
                    actual: notes.len(),
                });
            }

            for (slot, &note) in aligned.iter_mut().zip(notes) {
                if !is_muted_marker(note) {
                    *slot = note;
                }
            }
        }
    }

    Ok(aligned)
}

/// Raise every fret lying more than `MAX_FRET_SPAN` below the highest fret by one octave
///
/// Single pass against the depth of the input.
pub fn normalize_octaves(frets: [Option<i32>; STRING_COUNT]) -> [Option<i32>; STRING_COUNT] {
    let Some(depth) = frets.iter().flatten().max().copied() else {
        return frets;
    };

    frets.map(|fret| {
        fret.map(|f| {
            if depth - f > MAX_FRET_SPAN {
                f + OCTAVE
            } else {
                f
            }
        })
    })
}

/// Notes resolved below the nut are played an octave up
fn lift_below_nut(fret: i32) -> i32 {
    if fret < 0 {
        fret.rem_euclid(OCTAVE)
    } else {
        fret
    }
}

impl Fretboard {
    /// Resolve six aligned note names into a normalized fret assignment
    pub fn fret_series(&self, strings: &[&str; STRING_COUNT]) -> Result<FretAssignment, SeriesError> {
        let mut raw = [None; STRING_COUNT];
        for (string, note) in strings.iter().enumerate() {
            raw[string] = self
                .resolve(note, string)
                .map_err(SeriesError::InvalidNote)?
                .map(lift_below_nut);
        }

        if raw.iter().all(Option::is_none) {
            return Err(SeriesError::NoPlayableStrings);
        }

        let mut frets = [None; STRING_COUNT];
        for (string, fret) in normalize_octaves(raw).into_iter().enumerate() {
            frets[string] = match fret {
                Some(fret) => Some(
                    Fret::try_from(fret)
                        .map_err(|_| SeriesError::FretOutOfRange { string, fret })?,
                ),
                None => None,
            };
        }

        Ok(FretAssignment::new(frets))
    }
}

/// Errors that can occur when building a chord's fret series
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Finger-position list does not have one entry per string
    PositionCount { actual: usize },
    /// Note list does not fill the played strings exactly
    NoteCount { expected: usize, actual: usize },
    /// A string the position list frets has no note name
    BlankNote { string: usize },
    /// A note could not be placed on its string
    InvalidNote(ResolveError),
    /// Every string is muted
    NoPlayableStrings,
    /// Accidentals pushed a note off any real fretboard
    FretOutOfRange { string: usize, fret: i32 },
}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::PositionCount { actual } => write!(
                f,
                "finger positions list {} entries, expected {}",
                actual, STRING_COUNT
            ),
            SeriesError::NoteCount { expected, actual } => write!(
                f,
                "{} note names for {} played strings",
                actual, expected
            ),
            SeriesError::InvalidNote(err) => write!(f, "{}", err),
            SeriesError::BlankNote { string } => {
                write!(f, "string {} is fretted but has no note name", string)
            }
            SeriesError::NoPlayableStrings => write!(f, "every string is muted"),
            SeriesError::FretOutOfRange { string, fret } => {
                write!(f, "fret {} on string {} is not playable", fret, string)
            }
        }
    }
}

impl std::error::Error for SeriesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeriesError::InvalidNote(err) => Some(err),
            _ => None,
        }
    }
}
