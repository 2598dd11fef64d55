//! Exclusive-ownership handle.

use alloc::boxed::Box;
use core::fmt;
use core::ops::{Deref, DerefMut};

use super::OpaqueHandle;

/// Single-owner handle: copy is disallowed, moving transfers ownership.
///
/// `holder_count` reports 1 while occupied and 0 while empty.
pub struct UniqueImpl<T> {
    inner: Option<Box<T>>,
}

impl<T> UniqueImpl<T> {
    /// Box `value` and take exclusive ownership of it.
    pub fn new(value: T) -> Self {
        Self { inner: Some(Box::new(value)) }
    }

    /// Take exclusive ownership of an already-boxed instance.
    pub fn from_box(inner: Box<T>) -> Self {
        Self { inner: Some(inner) }
    }

    /// A handle holding no instance.
    pub fn empty() -> Self {
        Self { inner: None }
    }

    /// Mutably borrow the held instance.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.inner.as_deref_mut()
    }

    /// Give up the held instance, leaving the handle empty.
    pub fn take(&mut self) -> Option<Box<T>> {
        self.inner.take()
    }

    /// Consume the handle and return the held instance.
    pub fn into_inner(self) -> Option<Box<T>> {
        self.inner
    }
}

impl<T> Default for UniqueImpl<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> OpaqueHandle for UniqueImpl<T> {
    type Target = T;
    type Source = Box<T>;

    fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    // The prior box, if any, is dropped here exactly once.
    fn reset(&mut self, src: Option<Box<T>>) {
        self.inner = src;
    }

    fn holder_count(&self) -> usize {
        if self.inner.is_some() { 1 } else { 0 }
    }
}

impl<T> Deref for UniqueImpl<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.inner.as_deref() {
            Some(value) => value,
            None => panic!("dereferenced an empty UniqueImpl"),
        }
    }
}

impl<T> DerefMut for UniqueImpl<T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.inner.as_deref_mut() {
            Some(value) => value,
            None => panic!("dereferenced an empty UniqueImpl"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueImpl<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UniqueImpl").field(&self.inner).finish()
    }
}
