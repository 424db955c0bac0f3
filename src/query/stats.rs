use std::collections::BTreeMap;

use crate::chords::DerivedChord;

/// How many of a set of chords share one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootShare {
    pub root: String,
    pub count: usize,
    /// Size of the set the share was counted over
    pub total: usize,
}

impl RootShare {
    /// Fraction of the set with this root (0.0-1.0)
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }
}

/// Chord counts per root, most common first, ties broken by root name
pub fn root_distribution<'a>(chords: impl IntoIterator<Item = &'a DerivedChord>) -> Vec<RootShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut total = 0;
    for chord in chords {
        *counts.entry(chord.record.root.as_str()).or_default() += 1;
        total += 1;
    }

    let mut shares: Vec<RootShare> = counts
        .into_iter()
        .map(|(root, count)| RootShare {
            root: root.to_string(),
            count,
            total,
        })
        .collect();
    // stable: ties stay in root order
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}
