//! Filtering the derived chord table by per-string fret constraints

pub mod filter;
pub mod stats;

pub use filter::{FretQuery, ParseConstraintError, StringConstraint, MAX_SELECTABLE_FRET, SELECTOR_OPTIONS};
pub use stats::{root_distribution, RootShare};
