//! # Opaque Handles
//!
//! An indirection layer hiding an implementation type behind a stable public
//! shell, with the ownership discipline selected per use site. Pure
//! forwarding shims; no algorithmic content.
//!
//! | Variant | Backing | Copy/Clone | holder_count |
//! |---|---|---|---|
//! | [`UniqueImpl`] | `Option<Box<T>>` | move-only | 1 occupied, 0 empty |
//! | [`SharedImpl`] | `Option<Arc<T>>` | `Clone` increments | live holder count |
//! | [`RefImpl`] | `Option<&T>` | `Copy` | 1 bound, 0 empty (not ownership-tracked) |
//!
//! [`WeakImpl`] is the non-owning observer of a [`SharedImpl`]; it does not
//! implement [`OpaqueHandle`] because access requires an upgrade.
//!
//! All owning variants implement `Deref`; dereferencing an empty handle
//! panics. Check [`OpaqueHandle::get`] first where emptiness is possible.

pub mod reference;
#[cfg(feature = "alloc")]
pub mod shared;
#[cfg(feature = "alloc")]
pub mod unique;
#[cfg(feature = "alloc")]
pub mod weak;

pub use reference::RefImpl;
#[cfg(feature = "alloc")]
pub use shared::SharedImpl;
#[cfg(feature = "alloc")]
pub use unique::UniqueImpl;
#[cfg(feature = "alloc")]
pub use weak::WeakImpl;

/// The access surface shared by every ownership variant.
///
/// A default-constructed handle holds no instance. `reset` replaces the held
/// instance, releasing the previous one under the variant's discipline.
pub trait OpaqueHandle {
    /// The hidden implementation type.
    type Target: ?Sized;
    /// What `reset` accepts: the variant's owned (or borrowed) form.
    type Source;

    /// Borrow the held instance, or `None` when empty.
    fn get(&self) -> Option<&Self::Target>;

    /// Replace the held instance. The previous instance is released under
    /// this variant's ownership discipline.
    fn reset(&mut self, src: Option<Self::Source>);

    /// Number of live holders of the instance. See each variant for its
    /// exact semantics.
    fn holder_count(&self) -> usize;

    /// Whether the handle currently holds no instance.
    fn is_empty(&self) -> bool {
        self.get().is_none()
    }
}
