//! The single source of truth for what a screen currently displays.

use std::sync::Arc;

/// What a screen shows right now: a spinner, content, or an error.
///
/// Exactly one variant is observable at a time; a new state fully
/// replaces the previous one, never merges with it. The error cause is
/// held behind an `Arc` so states stay cheap to clone for broadcast
/// without requiring the cause itself to be `Clone`.
#[derive(Debug, PartialEq)]
pub enum UiState<T, E> {
    /// An operation is in flight; nothing to render yet.
    Loading,
    /// The operation completed and produced a payload.
    Success(T),
    /// The operation failed; the cause is forwarded opaquely.
    Error(Arc<E>),
}

// Manual impls: the derives would demand `E: Clone`/`E: Default`, and
// the cause only ever travels behind the `Arc`.
impl<T: Clone, E> Clone for UiState<T, E> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Success(value) => Self::Success(value.clone()),
            Self::Error(cause) => Self::Error(Arc::clone(cause)),
        }
    }
}

impl<T, E> Default for UiState<T, E> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T, E> UiState<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Payload of a `Success` state.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Cause of an `Error` state.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error(cause) => Some(cause),
            _ => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for UiState<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Error(Arc::new(cause)),
        }
    }
}
