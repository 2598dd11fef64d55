//! Tests for capability detection - Detect<T> consts, strategy_of!
//! and satisfies!.
//!
//! Detection works for concrete types known at the call site; the macros
//! agree with what render! actually selects.

use typeview::detect::{
    Detect, IntegerFallback as _, RawBytesFallback as _, StreamableFallback as _,
    StringCastFallback as _, TextFallback as _,
};
use typeview::{satisfies, strategy_of, RenderStrategy};

// =============================================================================
// Fixture types
// =============================================================================

struct Opaque;

#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
struct Raw {
    lo: u16,
    hi: u16,
}

struct Label(String);

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone)]
struct Tag(String);

impl From<Tag> for String {
    fn from(tag: Tag) -> String {
        tag.0
    }
}

// =============================================================================
// Detect consts
// =============================================================================

#[test]
fn streamable_const() {
    assert!(Detect::<i32>::IS_STREAMABLE);
    assert!(Detect::<String>::IS_STREAMABLE);
    assert!(Detect::<str>::IS_STREAMABLE);
    assert!(!Detect::<Opaque>::IS_STREAMABLE);
    assert!(!Detect::<Raw>::IS_STREAMABLE);
}

#[test]
fn text_const() {
    assert!(Detect::<String>::IS_TEXT);
    assert!(Detect::<str>::IS_TEXT);
    assert!(Detect::<Label>::IS_TEXT);
    assert!(!Detect::<i32>::IS_TEXT);
}

#[test]
fn integer_const() {
    assert!(Detect::<i32>::IS_INTEGER);
    assert!(Detect::<u64>::IS_INTEGER);
    assert!(!Detect::<f32>::IS_INTEGER);
    assert!(!Detect::<String>::IS_INTEGER);
}

#[test]
fn string_cast_const() {
    assert!(Detect::<String>::IS_STRING_CAST);
    assert!(Detect::<&str>::IS_STRING_CAST);
    assert!(Detect::<Tag>::IS_STRING_CAST);
    assert!(!Detect::<i32>::IS_STRING_CAST);
}

#[test]
fn raw_bytes_const() {
    assert!(Detect::<i32>::IS_RAW_BYTES);
    assert!(Detect::<Raw>::IS_RAW_BYTES);
    assert!(!Detect::<String>::IS_RAW_BYTES);
    assert!(!Detect::<Opaque>::IS_RAW_BYTES);
}

// =============================================================================
// Strategy selection
// =============================================================================

#[test]
fn priority_order() {
    // Streamable shadows every lower strategy.
    assert_eq!(strategy_of!(i32), Some(RenderStrategy::Streamable));
    assert_eq!(strategy_of!(String), Some(RenderStrategy::Streamable));
    assert_eq!(strategy_of!(&str), Some(RenderStrategy::Streamable));

    assert_eq!(strategy_of!(Label), Some(RenderStrategy::Text));
    assert_eq!(strategy_of!(Tag), Some(RenderStrategy::StringCast));
    assert_eq!(strategy_of!(Raw), Some(RenderStrategy::RawBytes));
}

#[test]
fn no_strategy_applies() {
    assert_eq!(strategy_of!(Opaque), None);
    assert_eq!(strategy_of!(Vec<u8>), None);
}

#[test]
fn pick_is_first_match() {
    assert_eq!(
        RenderStrategy::pick(true, true, true, true, true),
        Some(RenderStrategy::Streamable)
    );
    assert_eq!(
        RenderStrategy::pick(false, false, false, false, true),
        Some(RenderStrategy::RawBytes)
    );
    assert_eq!(RenderStrategy::pick(false, false, false, false, false), None);
}

// =============================================================================
// satisfies!
// =============================================================================

trait Marker {}
impl Marker for i32 {}

#[test]
fn satisfies_arbitrary_traits() {
    assert!(satisfies!(i32, Marker));
    assert!(!satisfies!(u8, Marker));
    assert!(satisfies!(String, Clone));
    assert!(!satisfies!(String, Copy));
    assert!(satisfies!(Raw, bytemuck::Pod));
}
