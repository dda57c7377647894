// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;
use std::sync::{Arc, Weak};

/// A non-owning reference from in-flight work back to the aggregator that started it.
///
/// Work holding a `BackRef` does not keep its aggregator alive. Every use goes through
/// [`BackRef::lookup`], which reports a torn-down target as `None` so the caller has to decide
/// what an absent aggregator means (for page fetches: an empty page).
///
/// ```
/// use reminders_core::BackRef;
/// use std::sync::Arc;
///
/// let owner = Arc::new(7);
/// let back_ref = BackRef::new(&owner);
/// assert_eq!(back_ref.lookup().as_deref(), Some(&7));
///
/// drop(owner);
/// assert!(back_ref.lookup().is_none());
/// ```
pub struct BackRef<T: ?Sized> {
    target: Weak<T>,
}

impl<T: ?Sized> BackRef<T> {
    #[must_use]
    pub fn new(owner: &Arc<T>) -> Self {
        Self {
            target: Arc::downgrade(owner),
        }
    }

    /// Resolve the reference, or `None` once the owner is gone.
    #[must_use]
    pub fn lookup(&self) -> Option<Arc<T>> {
        self.target.upgrade()
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.target.strong_count() > 0
    }
}

impl<T: ?Sized> Clone for BackRef<T> {
    fn clone(&self) -> Self {
        Self {
            target: Weak::clone(&self.target),
        }
    }
}

impl<T: ?Sized> fmt::Debug for BackRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackRef")
            .field("live", &self.is_live())
            .finish()
    }
}
