//! Non-owning reference handle.

use core::fmt;
use core::ops::Deref;

use super::OpaqueHandle;

/// Non-owning alias to an externally owned instance.
///
/// Dropping the handle never drops the referent. `holder_count` is not
/// ownership-tracked; it reports 1 while bound and 0 while empty.
pub struct RefImpl<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> RefImpl<'a, T> {
    /// Alias an externally owned instance.
    pub fn new(value: &'a T) -> Self {
        Self { inner: Some(value) }
    }

    /// A handle bound to no instance.
    pub fn empty() -> Self {
        Self { inner: None }
    }
}

impl<T> Clone for RefImpl<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RefImpl<'_, T> {}

impl<T> Default for RefImpl<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T> OpaqueHandle for RefImpl<'a, T> {
    type Target = T;
    type Source = &'a T;

    fn get(&self) -> Option<&T> {
        self.inner
    }

    fn reset(&mut self, src: Option<&'a T>) {
        self.inner = src;
    }

    fn holder_count(&self) -> usize {
        if self.inner.is_some() { 1 } else { 0 }
    }
}

impl<T> Deref for RefImpl<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.inner {
            Some(value) => value,
            None => panic!("dereferenced an empty RefImpl"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RefImpl<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefImpl").field(&self.inner).finish()
    }
}
