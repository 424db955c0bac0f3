#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::series::MUTED_MARKER;
use crate::STRING_COUNT;

/// Fret number on a single string (0 = open)
pub type Fret = u8;

/// Where each of the six strings is fretted for one chord, `None` = muted
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FretAssignment([Option<Fret>; STRING_COUNT]);

impl FretAssignment {
    pub fn new(frets: [Option<Fret>; STRING_COUNT]) -> Self {
        Self(frets)
    }

    /// Per-string frets, lowest string first
    pub fn frets(&self) -> &[Option<Fret>; STRING_COUNT] {
        &self.0
    }

    /// Fret on one string; `None` when the string is muted or off the neck
    pub fn fret(&self, string: usize) -> Option<Fret> {
        self.0.get(string).copied().flatten()
    }

    pub fn is_muted(&self, string: usize) -> bool {
        matches!(self.0.get(string), Some(None))
    }

    /// Highest fretted position
    pub fn depth(&self) -> Option<Fret> {
        self.0.iter().flatten().max().copied()
    }

    /// Distance between the lowest and highest fretted positions
    pub fn span(&self) -> Option<Fret> {
        let low = self.0.iter().flatten().min()?;
        let high = self.0.iter().flatten().max()?;
        Some(high - low)
    }
}

/// Tab-style list: `x,3,2,0,1,0`
impl std::fmt::Display for FretAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (string, fret) in self.0.iter().enumerate() {
            if string > 0 {
                write!(f, ",")?;
            }
            match fret {
                Some(fret) => write!(f, "{}", fret)?,
                None => write!(f, "{}", MUTED_MARKER)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_major() -> FretAssignment {
        FretAssignment::new([None, Some(3), Some(2), Some(0), Some(1), Some(0)])
    }

    #[test]
    fn displays_muted_strings_as_x() {
        assert_eq!(c_major().to_string(), "x,3,2,0,1,0");
    }

    #[test]
    fn muted_differs_from_off_the_neck() {
        let chord = c_major();
        assert!(chord.is_muted(0));
        assert!(!chord.is_muted(1));
        assert!(!chord.is_muted(9));
        assert_eq!(chord.fret(9), None);
    }

    #[test]
    fn depth_and_span_ignore_muted() {
        let chord = c_major();
        assert_eq!(chord.depth(), Some(3));
        assert_eq!(chord.span(), Some(3));
        assert_eq!(FretAssignment::new([None; STRING_COUNT]).span(), None);
    }
}
