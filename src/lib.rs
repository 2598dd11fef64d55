#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std

//! # typeview
//!
//! Capability-dispatched value rendering and opaque ownership handles.
//!
//! ## Architecture
//!
//! `typeview` turns arbitrary values into human-readable text by resolving,
//! at compile time, which capability a type offers. The dispatch is a closed
//! priority chain; a type matching no strategy is rejected by the type
//! checker, never at runtime.
//!
//! ```text
//! Streamable (Display)
//!   > Text (AsRef<str>)
//!     > Integer (itoa)
//!       > StringCast (Into<String>)
//!         > RawBytes (bytemuck::Pod, lowercase hex dump)
//!           > compile error
//! ```
//!
//! We use **Autoref/Method Priority** to resolve the chain on stable Rust:
//! each strategy is a trait implemented at a distinct reference depth of a
//! probe wrapper, and method resolution walks the depths in order.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Detection                                               |
//! |  - Detect<T> probes, satisfies!, RenderStrategy, strategy_of!     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Rendering                                               |
//! |  - render!, compare_render!, render_joined!, render_tuple!        |
//! |  - hex dump for trivially-copyable values                         |
//! +-------------------------------------------------------------------+
//!
//! +-------------------------------------------------------------------+
//! |  Independent: Opaque Handles                                      |
//! |  - OpaqueHandle, UniqueImpl, SharedImpl, WeakImpl, RefImpl        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use typeview::render;
//!
//! // Streamable values render via their Display form.
//! assert_eq!(render!(255i32), "255");
//! assert_eq!(render!("abc"), "abc");
//!
//! // Trivially-copyable values with no textual form render as a hex dump.
//! #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
//! #[repr(C)]
//! struct Rgba { r: u8, g: u8, b: u8, a: u8 }
//!
//! assert_eq!(render!(Rgba { r: 255, g: 0, b: 0, a: 127 }), "ff00007f");
//! ```
//!
//! The handle family hides an implementation type behind a stable public
//! shell while selecting an ownership discipline per use site:
//!
//! ```
//! use typeview::{OpaqueHandle, SharedImpl};
//!
//! let a = SharedImpl::new(42);
//! let b = a.clone();
//! assert_eq!(a.holder_count(), 2);
//! assert_eq!(*b, 42);
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Detection (no dependencies between layers)
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 1: Rendering
// =============================================================================
#[cfg(feature = "alloc")]
pub mod render;

// =============================================================================
// Opaque Handles (independent of the render path)
// =============================================================================
pub mod handle;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use detect::{Detect, RenderStrategy};
pub use handle::{OpaqueHandle, RefImpl};
#[cfg(feature = "alloc")]
pub use handle::{SharedImpl, UniqueImpl, WeakImpl};
#[cfg(feature = "alloc")]
pub use render::hex::{bytes_to_hex, pod_to_hex};

/// Common items for rendering and handle selection.
pub mod prelude {
    pub use crate::detect::{Detect, RenderStrategy};
    pub use crate::handle::{OpaqueHandle, RefImpl};
    #[cfg(feature = "alloc")]
    pub use crate::handle::{SharedImpl, UniqueImpl, WeakImpl};
    // Note: render!, compare_render!, render_joined!, render_tuple!,
    // debug_check!, satisfies! and strategy_of! are #[macro_export] so
    // they're at crate root.
}
