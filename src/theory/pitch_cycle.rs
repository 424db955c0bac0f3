/*
Pitch-Class Cycle
=================

The twelve chromatic pitch classes, in ascending order, treated as a ring:
stepping past the last entry wraps back to the first. One step is one
semitone, which on a fretted string is one fret.

Only sharp spellings are canonical. Flat spellings in chord data are resolved
by counting `b` accidentals against the natural letter, never by looking them
up here.
*/

/// Number of pitch classes in one octave
pub const CYCLE_LEN: usize = 12;

/// An ordered, cyclic set of pitch-class names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchCycle {
    names: [&'static str; CYCLE_LEN],
}

impl PitchCycle {
    /// Standard chromatic cycle starting at C, sharps only
    pub const CHROMATIC: PitchCycle = PitchCycle {
        names: [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ],
    };

    /// Create a cycle from twelve names in ascending semitone order
    pub const fn new(names: [&'static str; CYCLE_LEN]) -> Self {
        Self { names }
    }

    /// Position of a pitch-class name, if it belongs to the cycle
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|&n| n == name)
    }

    /// Name at a position, wrapping around the cycle
    pub fn name_at(&self, position: usize) -> &'static str {
        self.names[position % CYCLE_LEN]
    }

    /// Name one semitone below the given position, wrapping around the cycle
    pub fn below(&self, position: usize) -> &'static str {
        self.name_at(position + CYCLE_LEN - 1)
    }
}

impl Default for PitchCycle {
    fn default() -> Self {
        Self::CHROMATIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chromatic_starts_at_c() {
        assert_eq!(PitchCycle::CHROMATIC.position("C"), Some(0));
        assert_eq!(PitchCycle::CHROMATIC.position("E"), Some(4));
        assert_eq!(PitchCycle::CHROMATIC.position("B"), Some(11));
    }

    #[test]
    fn flats_are_not_canonical() {
        assert_eq!(PitchCycle::CHROMATIC.position("Bb"), None);
    }

    #[test]
    fn wraps_in_both_directions() {
        let cycle = PitchCycle::CHROMATIC;
        assert_eq!(cycle.name_at(12), "C");
        assert_eq!(cycle.name_at(13), "C#");
        assert_eq!(cycle.below(0), "B");
        assert_eq!(cycle.below(4), "D#");
    }
}
