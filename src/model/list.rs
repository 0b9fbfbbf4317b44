//! Shared holder for the item sequence a list currently shows.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::diff::{compute_diff, DiffPlan};
use crate::model::diffable::Diffable;

/// Thread-safe holder for the currently displayed item sequence.
///
/// Uses a read-write lock pattern: many concurrent readers can snapshot
/// the items while a submission takes the lock exclusively for the
/// swap. Handles are cheap to clone and share one underlying sequence.
pub struct DiffList<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T> DiffList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a list pre-populated with `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True when no items are held.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<T: Clone> DiffList<T> {
    /// Snapshot of the current items.
    pub fn items(&self) -> Vec<T> {
        self.inner.read().clone()
    }
}

impl<T: Diffable> DiffList<T> {
    /// Reconcile `new` against the current items, swap them in, and
    /// return the plan describing the change.
    ///
    /// The diff is computed under the write lock so the returned plan
    /// always corresponds to the sequence it replaced.
    pub fn submit(&self, new: Vec<T>) -> DiffPlan {
        let mut guard = self.inner.write();
        let plan = compute_diff(&guard, &new);
        *guard = new;
        tracing::debug!(
            inserts = plan.inserts.len(),
            removes = plan.removes.len(),
            updates = plan.updates.len(),
            total = guard.len(),
            "list reconciled"
        );
        plan
    }
}

impl<T> Default for DiffList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DiffList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
