#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fretboard::{align_strings, FretAssignment, Fretboard, SeriesError};

use super::table::ChordError;

/// One row of the chord table, as read from the source data
///
/// Field names follow the source columns: `CHORD_ROOT`, `CHORD_TYPE`,
/// `CHORD_STRUCTURE`, `FINGER_POSITIONS`, `NOTE_NAMES`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChordRecord {
    #[cfg_attr(feature = "serde", serde(rename = "CHORD_ROOT"))]
    pub root: String,
    #[cfg_attr(feature = "serde", serde(rename = "CHORD_TYPE"))]
    pub chord_type: String,
    #[cfg_attr(feature = "serde", serde(rename = "CHORD_STRUCTURE"))]
    pub structure: String,
    /// Comma-separated per-string positions, `x` for muted strings
    #[cfg_attr(feature = "serde", serde(rename = "FINGER_POSITIONS", default))]
    pub finger_positions: Option<String>,
    /// Comma-separated note names, one per played string
    #[cfg_attr(feature = "serde", serde(rename = "NOTE_NAMES"))]
    pub note_names: String,
}

impl ChordRecord {
    pub fn new(root: &str, chord_type: &str, structure: &str, note_names: &str) -> Self {
        Self {
            root: root.to_string(),
            chord_type: chord_type.to_string(),
            structure: structure.to_string(),
            finger_positions: None,
            note_names: note_names.to_string(),
        }
    }

    /// Attach a six-entry finger-position list
    pub fn with_positions(mut self, finger_positions: &str) -> Self {
        self.finger_positions = Some(finger_positions.to_string());
        self
    }

    /// Human-readable name used in reports, e.g. "E major (1,3,5)"
    pub fn name(&self) -> String {
        if self.structure.is_empty() {
            format!("{} {}", self.root, self.chord_type)
        } else {
            format!("{} {} ({})", self.root, self.chord_type, self.structure)
        }
    }

    /// Note names, trimmed; a blank field has no notes
    pub fn notes(&self) -> Vec<&str> {
        split_list(&self.note_names)
    }

    /// Finger positions, if the row carries a non-blank position list
    pub fn positions(&self) -> Option<Vec<&str>> {
        self.finger_positions
            .as_deref()
            .filter(|field| !field.trim().is_empty())
            .map(split_list)
    }

    /// Align this chord's notes to the strings and resolve them on `fretboard`
    pub fn fret_assignment(&self, fretboard: &Fretboard) -> Result<FretAssignment, ChordError> {
        let notes = self.notes();
        let positions = self.positions();
        align_strings(&notes, positions.as_deref())
            .and_then(|strings| fretboard.fret_series(&strings))
            .map_err(|err| match err {
                SeriesError::InvalidNote(source) => ChordError::InvalidNote {
                    chord: self.name(),
                    source,
                },
                reason => ChordError::Malformed {
                    chord: self.name(),
                    reason,
                },
            })
    }
}

fn split_list(field: &str) -> Vec<&str> {
    if field.trim().is_empty() {
        return Vec::new();
    }
    field.split(',').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_lists() {
        let record = ChordRecord::new("C", "major", "1,3,5", "C, E ,G,C,E").with_positions("x,3,2,0,1,0");
        assert_eq!(record.notes(), vec!["C", "E", "G", "C", "E"]);
        assert_eq!(
            record.positions(),
            Some(vec!["x", "3", "2", "0", "1", "0"])
        );
    }

    #[test]
    fn blank_fields_are_empty_lists() {
        let record = ChordRecord::new("C", "major", "", "  ").with_positions(" ");
        assert!(record.notes().is_empty());
        assert_eq!(record.positions(), None);
    }

    #[test]
    fn name_includes_structure_when_present() {
        assert_eq!(
            ChordRecord::new("E", "major", "1,3,5", "").name(),
            "E major (1,3,5)"
        );
        assert_eq!(ChordRecord::new("E", "5", "", "").name(), "E 5");
    }

    #[test]
    fn resolves_open_c_major() {
        let record = ChordRecord::new("C", "major", "1,3,5", "C,E,G,C,E").with_positions("x,3,2,0,1,0");
        let frets = record.fret_assignment(&Fretboard::standard()).unwrap();
        assert_eq!(frets.to_string(), "x,3,2,0,1,0");
    }

    #[test]
    fn misaligned_lists_name_the_chord() {
        let record = ChordRecord::new("E", "major", "1,3,5", "E,B,E,G#,B,E").with_positions("0,2,2,1,0");
        let err = record.fret_assignment(&Fretboard::standard()).unwrap_err();
        assert_eq!(
            err,
            ChordError::Malformed {
                chord: "E major (1,3,5)".to_string(),
                reason: SeriesError::PositionCount { actual: 5 },
            }
        );
    }
}
