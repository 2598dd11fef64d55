//! Lowercase hex dumps of raw byte views.
//!
//! The raw-bytes render strategy is limited to `bytemuck::Pod` types: no
//! hidden ownership or indirection, so the byte view can never leak pointer
//! values.

use alloc::string::String;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render a byte slice as lowercase hex, two digits per byte, zero-padded,
/// most-significant nibble first, bytes in storage order.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Render a trivially-copyable value as the hex dump of its in-memory
/// representation. Output length is exactly `2 * size_of::<T>()`.
pub fn pod_to_hex<T: bytemuck::Pod>(value: &T) -> String {
    bytes_to_hex(bytemuck::bytes_of(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_padded_lowercase() {
        assert_eq!(bytes_to_hex(&[0x0f, 0xa0, 0x00]), "0fa000");
        assert_eq!(bytes_to_hex(&[0xff]), "ff");
    }

    #[test]
    fn empty_slice() {
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn pod_storage_order() {
        // Native-endian storage order, not numeric order.
        assert_eq!(pod_to_hex(&0xff_u8), "ff");
        assert_eq!(pod_to_hex(&255_u32), bytes_to_hex(&255_u32.to_ne_bytes()));
    }
}
