//! Observable UI state for screens driven by fallible async operations.
//!
//! # Flow
//!
//! ```text
//! drive(op) ──→ Loading ──→ op.await ──┬──→ Success(payload)
//!                                      └──→ Error(cause)
//! ```
//!
//! One `Loading` and exactly one terminal state per operation. The
//! [`StateCell`] is the only shared mutable state between the worker
//! running the operation and the context rendering the screen; readers
//! subscribe and only observe.

mod cell;
mod ui_state;

pub use cell::StateCell;
pub use ui_state::UiState;
