//! Autoref-based render dispatch.
//!
//! Each strategy is a trait implemented at a distinct reference depth of
//! [`RenderProbe`]. Method resolution walks the autoderef chain of the
//! receiver `&&&&&RenderProbe(&value)` outermost-first, so the impl with the
//! most references wins; each strategy bound is checked during the probe and
//! an unsatisfied bound falls through to the next depth.
//!
//! ```text
//! depth 4  &&&&RenderProbe  Streamable  (Display)
//! depth 3  &&&RenderProbe   Text        (AsRef<str>)
//! depth 2  &&RenderProbe    Integer     (itoa::Integer)
//! depth 1  &RenderProbe     StringCast  (Into<String>)
//! depth 0  RenderProbe      RawBytes    (bytemuck::Pod)
//! ```
//!
//! No depth left: `render!` fails method resolution, rejecting the type at
//! compile time.

use alloc::string::{String, ToString};
use core::fmt;

use super::hex;

/// Dispatch wrapper holding a borrow of the value under render.
pub struct RenderProbe<'a, T: ?Sized>(pub &'a T);

/// Strategy 1: capture the value's formatted output.
pub trait ViaStreamable {
    fn render_value(&self) -> String;
}

impl<T: fmt::Display + ?Sized> ViaStreamable for &&&&RenderProbe<'_, T> {
    #[inline]
    fn render_value(&self) -> String {
        self.0.to_string()
    }
}

/// Strategy 2: direct string construction.
pub trait ViaText {
    fn render_value(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> ViaText for &&&RenderProbe<'_, T> {
    #[inline]
    fn render_value(&self) -> String {
        let text: &str = self.0.as_ref();
        String::from(text)
    }
}

/// Strategy 3: numeric-to-text conversion.
pub trait ViaInteger {
    fn render_value(&self) -> String;
}

impl<T: itoa::Integer + Copy> ViaInteger for &&RenderProbe<'_, T> {
    #[inline]
    fn render_value(&self) -> String {
        let mut buf = itoa::Buffer::new();
        String::from(buf.format(*self.0))
    }
}

/// Strategy 4: explicit textual cast.
pub trait ViaStringCast {
    fn render_value(&self) -> String;
}

impl<T: Clone + Into<String>> ViaStringCast for &RenderProbe<'_, T> {
    #[inline]
    fn render_value(&self) -> String {
        self.0.clone().into()
    }
}

/// Strategy 5: hex dump of the raw memory representation.
pub trait ViaRawBytes {
    fn render_value(&self) -> String;
}

impl<T: bytemuck::Pod> ViaRawBytes for RenderProbe<'_, T> {
    #[inline]
    fn render_value(&self) -> String {
        hex::pod_to_hex(self.0)
    }
}

/// Render a value as a human-readable `String`.
///
/// Resolves the strategy chain at compile time (streamable > text >
/// integer > string cast > raw bytes); a value matching no strategy does
/// not compile. The argument is evaluated exactly once and only borrowed.
///
/// # Usage
///
/// ```
/// use typeview::render;
///
/// assert_eq!(render!(255i32), "255");
/// assert_eq!(render!("abc"), "abc");
/// ```
#[macro_export]
macro_rules! render {
    ($value:expr $(,)?) => {
        match &$value {
            __value => {
                #[allow(unused_imports)]
                use $crate::render::dispatch::{
                    ViaInteger as _, ViaRawBytes as _, ViaStreamable as _,
                    ViaStringCast as _, ViaText as _,
                };
                (&&&&&$crate::render::dispatch::RenderProbe(__value)).render_value()
            }
        }
    };
}
