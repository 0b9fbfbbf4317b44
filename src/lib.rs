//! List-view support utilities for screens that display remote
//! collections: diff-based list reconciliation, observable UI state,
//! network response normalization, and media file helpers.
//!
//! # Architecture
//!
//! ```text
//! transport ──→ net::normalize ──→ Result<T, FetchError>
//!                                        │
//!                           state::StateCell::drive
//!                                        │
//!                    UiState { Loading | Success | Error }
//!                                        ▼
//!          presentation layer (external) ←── model::DiffPlan
//! ```
//!
//! The presentation layer is an external collaborator: this crate
//! exposes diff plans and state transitions, never rendering.

pub mod media;
pub mod model;
pub mod net;
pub mod state;

pub use media::{MediaError, MediaKind, MediaStore};
pub use model::{compute_diff, DiffList, DiffPlan, Diffable};
pub use net::{normalize, normalize_ok, FetchError, RawResponse};
pub use state::{StateCell, UiState};
