//! # Layer 1: Rendering
//!
//! Turns arbitrary values into human-readable strings.
//!
//! ## Module Structure
//!
//! ```text
//! render/
//! ├── dispatch.rs - render! and the autoref priority chain
//! ├── hex.rs      - lowercase hex dump of raw byte views
//! └── compare.rs  - pairwise comparison, joined and tuple rendering
//! ```
//!
//! ## Dispatch policy
//!
//! `render!` resolves exactly one strategy at compile time, first match wins:
//!
//! 1. **Streamable** - `Display` output capture
//! 2. **Text** - direct string construction via `AsRef<str>`
//! 3. **Integer** - numeric-to-text via `itoa`
//! 4. **StringCast** - explicit cast via `Into<String>`
//! 5. **RawBytes** - hex dump of the `bytemuck::Pod` representation
//!
//! A type matching none of the strategies fails method resolution inside
//! the macro expansion: a compile error, never a runtime fallback.
//!
//! The order favors human-authored textual representations over mechanical
//! byte dumps, so a type that is both streamable and trivially copyable
//! renders using its intended textual form rather than a hex blob.

pub mod compare;
pub mod dispatch;
pub mod hex;

pub use compare::write_comparison;
pub use dispatch::RenderProbe;
pub use hex::{bytes_to_hex, pod_to_hex};
