//! Reference-counted ownership handle.

use alloc::sync::Arc;
use core::fmt;
use core::ops::Deref;

use super::weak::WeakImpl;
use super::OpaqueHandle;

/// Shared-ownership handle: cloning increments the holder count, the
/// instance is dropped exactly when the last holder releases it.
///
/// Backed by `Arc`, so the holder count is maintained atomically; any
/// cross-thread guarantee is exactly whatever `Arc` provides.
pub struct SharedImpl<T> {
    inner: Option<Arc<T>>,
}

impl<T> SharedImpl<T> {
    /// Allocate `value` and take shared ownership of it.
    pub fn new(value: T) -> Self {
        Self { inner: Some(Arc::new(value)) }
    }

    /// Share ownership of an already-allocated instance.
    pub fn from_arc(inner: Arc<T>) -> Self {
        Self { inner: Some(inner) }
    }

    /// A handle holding no instance.
    pub fn empty() -> Self {
        Self { inner: None }
    }

    /// A non-owning observer of the held instance.
    pub fn downgrade(&self) -> WeakImpl<T> {
        match &self.inner {
            Some(arc) => WeakImpl::from_weak(Arc::downgrade(arc)),
            None => WeakImpl::new(),
        }
    }
}

impl<T> Clone for SharedImpl<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T> Default for SharedImpl<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> OpaqueHandle for SharedImpl<T> {
    type Target = T;
    type Source = Arc<T>;

    fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    fn reset(&mut self, src: Option<Arc<T>>) {
        self.inner = src;
    }

    fn holder_count(&self) -> usize {
        self.inner.as_ref().map_or(0, Arc::strong_count)
    }
}

impl<T> Deref for SharedImpl<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.inner.as_deref() {
            Some(value) => value,
            None => panic!("dereferenced an empty SharedImpl"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedImpl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedImpl").field(&self.inner).finish()
    }
}
