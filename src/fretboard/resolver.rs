/*
Note-to-Fret Resolution
=======================

A note is located on a string by walking up the pitch cycle from the open
string, one fret per semitone, until the walk lands on the natural pitch class
named by the note's letter. Accidentals are then applied on top of that fret:
each `#` adds one, each `b` removes one.

    E string, "G#":  E F F# G        -> fret 3, +1 sharp -> 4
    A string, "C":   A A# B C        -> fret 3
    E string, "Eb":  E               -> fret 0, -1 flat  -> -1

A negative result means the note sits below the nut; the fret series lifts it
an octave before use.

One spelling short-circuits the walk: the pitch class one semitone below the
open string, sharped again (on an E string: "D#" + "#" = "D##"), is the open
string itself and resolves to fret 0.

The walk never takes more than one full cycle. A letter that is not a natural
pitch class of the cycle is reported as an invalid note.
*/

use crate::theory::pitch_cycle::CYCLE_LEN;
use crate::theory::{NoteName, PitchCycle, Tuning};
use crate::STRING_COUNT;

/// Cycle positions of `Tuning::STANDARD` within `PitchCycle::CHROMATIC`
const STANDARD_OPEN_POSITIONS: [usize; STRING_COUNT] = [4, 9, 2, 7, 11, 4];

/// A tuning bound to the pitch cycle its open strings are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fretboard {
    cycle: PitchCycle,
    tuning: Tuning,
    /// Cycle position of each open string
    open_positions: [usize; STRING_COUNT],
}

impl Fretboard {
    /// Bind a tuning to a cycle, checking every open string is in the cycle
    pub fn new(cycle: PitchCycle, tuning: Tuning) -> Result<Self, ResolveError> {
        let mut open_positions = [0; STRING_COUNT];
        for (string, &name) in tuning.strings().iter().enumerate() {
            open_positions[string] = cycle
                .position(name)
                .ok_or(ResolveError::UnknownOpenString { string, name })?;
        }

        Ok(Self {
            cycle,
            tuning,
            open_positions,
        })
    }

    /// Standard tuning over the chromatic cycle
    pub fn standard() -> Self {
        Self {
            cycle: PitchCycle::CHROMATIC,
            tuning: Tuning::STANDARD,
            open_positions: STANDARD_OPEN_POSITIONS,
        }
    }

    pub fn cycle(&self) -> &PitchCycle {
        &self.cycle
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Fret at which `note` is played on `string`
    ///
    /// Returns `Ok(None)` for an empty note (muted string). The result may be
    /// negative when flats push a note below the open string.
    pub fn resolve(&self, note: &str, string: usize) -> Result<Option<i32>, ResolveError> {
        if note.is_empty() {
            return Ok(None);
        }

        let open = *self
            .open_positions
            .get(string)
            .ok_or(ResolveError::StringOutOfRange { string })?;

        // Open string spelled as a sharp on the semitone below
        if note.strip_suffix('#') == Some(self.cycle.below(open)) {
            return Ok(Some(0));
        }

        let invalid = || ResolveError::InvalidNote {
            note: note.to_string(),
            string,
        };
        let parsed = NoteName::parse(note).map_err(|_| invalid())?;

        let fret = (0..CYCLE_LEN)
            .find(|&step| is_natural(self.cycle.name_at(open + step), parsed.letter()))
            .ok_or_else(invalid)?;

        Ok(Some(fret as i32 + parsed.accidental_offset()))
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::standard()
    }
}

/// True when a pitch-class name is exactly the bare letter
fn is_natural(name: &str, letter: char) -> bool {
    let mut chars = name.chars();
    chars.next() == Some(letter) && chars.next().is_none()
}

/// Errors that can occur when resolving a note on the fretboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Note spelling whose letter is not a natural of the cycle, or with junk accidentals
    InvalidNote { note: String, string: usize },
    /// String index past the last string
    StringOutOfRange { string: usize },
    /// Tuning names an open string the cycle does not contain
    UnknownOpenString { string: usize, name: &'static str },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::InvalidNote { note, string } => {
                write!(f, "invalid note '{}' on string {}", note, string)
            }
            ResolveError::StringOutOfRange { string } => {
                write!(
                    f,
                    "string {} out of range (instrument has {} strings)",
                    string, STRING_COUNT
                )
            }
            ResolveError::UnknownOpenString { string, name } => {
                write!(
                    f,
                    "open string {} tuned to '{}', which is not in the pitch cycle",
                    string, name
                )
            }
        }
    }
}

impl std::error::Error for ResolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    const NATURALS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

    fn fret(note: &str, string: usize) -> Option<i32> {
        Fretboard::standard().resolve(note, string).unwrap()
    }

    #[test]
    fn standard_matches_validated_construction() {
        let built = Fretboard::new(PitchCycle::CHROMATIC, Tuning::STANDARD).unwrap();
        assert_eq!(built, Fretboard::standard());
    }

    #[test]
    fn empty_note_is_muted_on_every_string() {
        for string in 0..STRING_COUNT {
            assert_eq!(fret("", string), None);
        }
    }

    #[test]
    fn open_string_is_fret_zero() {
        assert_eq!(fret("E", 0), Some(0));
        assert_eq!(fret("A", 1), Some(0));
        assert_eq!(fret("D", 2), Some(0));
        assert_eq!(fret("G", 3), Some(0));
        assert_eq!(fret("B", 4), Some(0));
        assert_eq!(fret("E", 5), Some(0));
    }

    #[test]
    fn walks_up_to_the_letter() {
        assert_eq!(fret("B", 0), Some(7));
        assert_eq!(fret("C", 1), Some(3));
        assert_eq!(fret("G", 4), Some(8));
        assert_eq!(fret("D", 0), Some(10));
    }

    #[test]
    fn accidentals_shift_by_one_semitone() {
        for string in 0..STRING_COUNT {
            for letter in NATURALS {
                let base = fret(letter, string).unwrap();
                let sharp = fret(&format!("{}#", letter), string).unwrap();
                let flat = fret(&format!("{}b", letter), string).unwrap();
                assert_eq!(sharp, base + 1, "{}# on string {}", letter, string);
                assert_eq!(flat, base - 1, "{}b on string {}", letter, string);
            }
        }
    }

    #[test]
    fn flat_on_open_letter_goes_below_nut() {
        assert_eq!(fret("Eb", 0), Some(-1));
        assert_eq!(fret("Bbb", 4), Some(-2));
    }

    #[test]
    fn sharped_note_below_open_is_open_string() {
        // E string: D# is one below, so D## names the open E
        assert_eq!(fret("D##", 0), Some(0));
        assert_eq!(fret("G##", 1), Some(0));
        assert_eq!(fret("A##", 4), Some(0));
        // Plain D# is still a walk to D plus one
        assert_eq!(fret("D#", 0), Some(11));
    }

    #[test]
    fn shortcut_applies_to_natural_neighbours() {
        let fretboard =
            Fretboard::new(PitchCycle::CHROMATIC, Tuning::new(["F", "C", "F", "C", "F", "C"]))
                .unwrap();
        assert_eq!(fretboard.resolve("E#", 0).unwrap(), Some(0));
        assert_eq!(fretboard.resolve("B#", 1).unwrap(), Some(0));
    }

    #[test]
    fn resolution_is_deterministic() {
        let fretboard = Fretboard::standard();
        for _ in 0..3 {
            assert_eq!(fretboard.resolve("F#", 2).unwrap(), Some(4));
        }
    }

    #[test]
    fn unknown_letter_is_invalid_not_a_hang() {
        let err = Fretboard::standard().resolve("H", 3).unwrap_err();
        assert_eq!(
            err,
            ResolveError::InvalidNote {
                note: "H".to_string(),
                string: 3
            }
        );
        assert_eq!(err.to_string(), "invalid note 'H' on string 3");
    }

    #[test]
    fn junk_after_letter_is_invalid() {
        assert!(matches!(
            Fretboard::standard().resolve("Cmaj", 1),
            Err(ResolveError::InvalidNote { .. })
        ));
    }

    #[test]
    fn string_past_the_neck_is_rejected() {
        assert_eq!(
            Fretboard::standard().resolve("E", 6),
            Err(ResolveError::StringOutOfRange { string: 6 })
        );
    }

    #[test]
    fn tuning_outside_cycle_is_rejected() {
        let err = Fretboard::new(PitchCycle::CHROMATIC, Tuning::new(["E", "A", "D", "G", "Bb", "E"]))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownOpenString {
                string: 4,
                name: "Bb"
            }
        );
    }
}
