//! Non-owning observer of a shared instance.

use alloc::sync::Weak;
use core::fmt;

use super::shared::SharedImpl;

/// Weak counterpart of [`SharedImpl`]: observes the instance without keeping
/// it alive. Access requires [`WeakImpl::upgrade`].
pub struct WeakImpl<T> {
    inner: Weak<T>,
}

impl<T> WeakImpl<T> {
    /// An observer bound to no instance; `upgrade` always returns `None`.
    pub fn new() -> Self {
        Self { inner: Weak::new() }
    }

    pub(crate) fn from_weak(inner: Weak<T>) -> Self {
        Self { inner }
    }

    /// Reacquire shared ownership, or `None` if the instance is gone.
    pub fn upgrade(&self) -> Option<SharedImpl<T>> {
        self.inner.upgrade().map(SharedImpl::from_arc)
    }

    /// Number of live owning holders of the observed instance.
    pub fn holder_count(&self) -> usize {
        self.inner.strong_count()
    }
}

impl<T> Clone for WeakImpl<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T> Default for WeakImpl<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for WeakImpl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakImpl(..)")
    }
}
