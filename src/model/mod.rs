//! Diff-based list reconciliation.
//!
//! # Flow
//!
//! ```text
//! new items ──→ compute_diff(old, new) ──→ DiffPlan ──→ view
//!                     │
//!        Diffable: identity, then content
//! ```
//!
//! Matching is identity-first: items that represent the same logical
//! entity pair up across the two sequences, and only paired items are
//! compared by content. [`DiffList`] adds a shared, swappable holder
//! for the sequence a screen currently shows.

mod diff;
mod diffable;
mod list;

pub use diff::{compute_diff, DiffPlan};
pub use diffable::Diffable;
pub use list::DiffList;
