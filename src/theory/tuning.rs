use crate::STRING_COUNT;

/// Open-string pitch classes, string 0 being the lowest string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    open: [&'static str; STRING_COUNT],
}

impl Tuning {
    /// Standard guitar tuning: E A D G B E
    pub const STANDARD: Tuning = Tuning {
        open: ["E", "A", "D", "G", "B", "E"],
    };

    /// Create a tuning from six open-string pitch classes, lowest string first
    pub const fn new(open: [&'static str; STRING_COUNT]) -> Self {
        Self { open }
    }

    /// Open pitch class of a string, or None if the index is off the neck
    pub fn open(&self, string: usize) -> Option<&'static str> {
        self.open.get(string).copied()
    }

    /// All open pitch classes, lowest string first
    pub fn strings(&self) -> &[&'static str; STRING_COUNT] {
        &self.open
    }

    /// Short per-string labels in tab style ("E|", "A|", ...)
    pub fn labels(&self) -> [String; STRING_COUNT] {
        self.open.map(|name| format!("{}|", name))
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_low_to_high() {
        assert_eq!(Tuning::STANDARD.open(0), Some("E"));
        assert_eq!(Tuning::STANDARD.open(4), Some("B"));
        assert_eq!(Tuning::STANDARD.open(6), None);
    }

    #[test]
    fn labels_match_tab_headers() {
        assert_eq!(
            Tuning::STANDARD.labels(),
            ["E|", "A|", "D|", "G|", "B|", "E|"].map(String::from)
        );
    }
}
