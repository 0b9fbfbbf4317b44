//! Media file creation and lookup on the local filesystem.
//!
//! File creation prefers an external-style directory when one is
//! configured and falls back to the app-private one; listings come
//! from the private directory ordered by last-modified time. The async
//! variants run the blocking filesystem work on the runtime's blocking
//! pool so callers on the UI-owning context never block.

mod error;
mod store;

pub use error::MediaError;
pub use store::{MediaKind, MediaStore};
