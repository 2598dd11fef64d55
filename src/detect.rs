//! # Layer 0: Capability Detection
//!
//! Compile-time probes answering "which render capability does this concrete
//! type offer?", built on the "Inherent Const Fallback" pattern.
//!
//! ## How it works
//!
//! For each capability C we want to detect:
//! 1. Define a fallback trait with `const IS_C: bool = false`
//! 2. Implement the fallback for `Detect<T>` for all T
//! 3. Implement an inherent const `IS_C = true` for `Detect<T>` where the
//!    capability bound holds
//!
//! When resolving `Detect::<Concrete>::IS_C`, the compiler:
//! - If the bound holds, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`.
//!
//! ## User API
//!
//! `strategy_of!` reports which strategy `render!` resolves for a type:
//!
//! ```
//! use typeview::{strategy_of, RenderStrategy};
//!
//! assert_eq!(strategy_of!(i32), Some(RenderStrategy::Streamable));
//! assert_eq!(strategy_of!(String), Some(RenderStrategy::Streamable));
//! ```

use core::marker::PhantomData;

/// Detection probe type.
///
/// Carries no data; capability answers live in its associated consts.
pub struct Detect<T: ?Sized>(PhantomData<T>);

// =============================================================================
// Render Capability Detection (generated)
// =============================================================================

/// Generate fallback trait + inherent const for one render capability.
macro_rules! impl_detect {
    ($Cap:ident, $CONST:ident, $($bound:tt)+) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Cap Fallback>] {
                const $CONST: bool = false;
            }
            impl<T: ?Sized> [<$Cap Fallback>] for Detect<T> {}
            impl<T> Detect<T>
            where
                $($bound)+,
            {
                pub const $CONST: bool = true;
            }
        }
    };
}

impl_detect!(Streamable, IS_STREAMABLE, T: core::fmt::Display + ?Sized);
impl_detect!(Text, IS_TEXT, T: AsRef<str> + ?Sized);
impl_detect!(Integer, IS_INTEGER, T: itoa::Integer + Copy);
#[cfg(feature = "alloc")]
impl_detect!(StringCast, IS_STRING_CAST, T: Clone + Into<alloc::string::String>);
impl_detect!(RawBytes, IS_RAW_BYTES, T: bytemuck::Pod);

// =============================================================================
// Strategy Selection
// =============================================================================

/// The strategy `render!` resolves for a type: a closed, mutually-exclusive
/// set evaluated in this fixed priority order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Formatted output capture (`core::fmt::Display`).
    Streamable,
    /// Direct string construction (`AsRef<str>`).
    Text,
    /// Numeric-to-text conversion (`itoa::Integer`).
    Integer,
    /// Explicit textual cast (`Into<String>`).
    StringCast,
    /// Hex dump of the raw memory representation (`bytemuck::Pod`).
    RawBytes,
}

impl RenderStrategy {
    /// Resolve the priority chain over the five capability answers.
    ///
    /// Returns `None` when no strategy applies; `render!` rejects such
    /// types at compile time.
    pub const fn pick(
        streamable: bool,
        text: bool,
        integer: bool,
        string_cast: bool,
        raw_bytes: bool,
    ) -> Option<Self> {
        if streamable {
            Some(Self::Streamable)
        } else if text {
            Some(Self::Text)
        } else if integer {
            Some(Self::Integer)
        } else if string_cast {
            Some(Self::StringCast)
        } else if raw_bytes {
            Some(Self::RawBytes)
        } else {
            None
        }
    }
}

/// Report which strategy `render!` resolves for a concrete type.
///
/// Returns `Option<RenderStrategy>`; `None` means `render!` would not
/// compile for the type.
///
/// # Usage
///
/// ```
/// use typeview::{strategy_of, RenderStrategy};
///
/// assert_eq!(strategy_of!(&str), Some(RenderStrategy::Streamable));
///
/// struct Opaque;
/// assert_eq!(strategy_of!(Opaque), None);
/// ```
#[cfg(feature = "alloc")]
#[macro_export]
macro_rules! strategy_of {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::detect::{
            IntegerFallback as _, RawBytesFallback as _, StreamableFallback as _,
            StringCastFallback as _, TextFallback as _,
        };
        $crate::detect::RenderStrategy::pick(
            $crate::detect::Detect::<$T>::IS_STREAMABLE,
            $crate::detect::Detect::<$T>::IS_TEXT,
            $crate::detect::Detect::<$T>::IS_INTEGER,
            $crate::detect::Detect::<$T>::IS_STRING_CAST,
            $crate::detect::Detect::<$T>::IS_RAW_BYTES,
        )
    }};
}

// =============================================================================
// satisfies! - Low-level trait detection (concrete types only)
// =============================================================================

/// Check if a concrete type satisfies a trait bound at compile time.
///
/// Uses the same inherent-const-fallback pattern as `Detect<T>`: an inherent
/// const shadows a trait const when the bound is satisfied.
///
/// **Note**: Only works for concrete types, not generic parameters.
///
/// # Usage
///
/// ```
/// use typeview::satisfies;
///
/// assert!(satisfies!(String, Clone));
/// assert!(!satisfies!(String, Copy));
///
/// trait Marker {}
/// impl Marker for i32 {}
/// assert!(satisfies!(i32, Marker));
/// assert!(!satisfies!(u8, Marker));
/// ```
#[macro_export]
macro_rules! satisfies {
    ($T:ty, $Trait:path) => {{
        struct __Witness<T: ?Sized>(::core::marker::PhantomData<T>);

        trait __Otherwise {
            const SATISFIED: bool = false;
        }
        impl<T: ?Sized> __Otherwise for __Witness<T> {}

        impl<T: $Trait + ?Sized> __Witness<T> {
            #[allow(dead_code)]
            const SATISFIED: bool = true;
        }

        __Witness::<$T>::SATISFIED
    }};
}

// =============================================================================
// Tests
// =============================================================================
