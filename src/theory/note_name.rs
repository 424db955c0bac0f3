//! Note spellings as they appear in chord data: a base letter followed by
//! any number of `b` (flat) or `#` (sharp) accidentals.

/// A parsed note spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteName {
    letter: char,
    flats: u32,
    sharps: u32,
}

impl NoteName {
    /// Parse a non-empty spelling such as "E", "G#", "Bb" or "D##"
    ///
    /// The base letter is not checked against a pitch cycle here; that
    /// happens when the note is resolved on a string.
    pub fn parse(spelling: &str) -> Result<Self, NoteNameError> {
        let mut chars = spelling.chars();
        let letter = chars.next().ok_or(NoteNameError::Empty)?;

        let mut flats = 0;
        let mut sharps = 0;
        for c in chars {
            match c {
                'b' => flats += 1,
                '#' => sharps += 1,
                other => return Err(NoteNameError::UnexpectedAccidental(other)),
            }
        }

        Ok(Self {
            letter,
            flats,
            sharps,
        })
    }

    /// Base letter, ignoring accidentals
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Net semitone shift of the accidentals (sharps minus flats)
    pub fn accidental_offset(&self) -> i32 {
        self.sharps as i32 - self.flats as i32
    }
}

/// Errors that can occur when parsing a note spelling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteNameError {
    /// Nothing to parse
    Empty,
    /// A character after the base letter that is neither `b` nor `#`
    UnexpectedAccidental(char),
}

impl std::fmt::Display for NoteNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteNameError::Empty => write!(f, "empty note name"),
            NoteNameError::UnexpectedAccidental(c) => {
                write!(f, "unexpected character '{}' after note letter", c)
            }
        }
    }
}

impl std::error::Error for NoteNameError {}
