//! CompactSize integers
//!
//! Bitcoin's variable-length unsigned integer: values below 0xfd take one
//! byte, larger ones a marker (0xfd, 0xfe, 0xff) followed by 2, 4 or 8
//! little-endian bytes.

/// Encoded length of `value` in bytes (1, 3, 5 or 9).
pub fn compact_size_len(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Append `value` in its shortest encoding.
pub fn write_compact_size(out: &mut Vec<u8>, value: u64) {
    match compact_size_len(value) {
        1 => out.push(value as u8),
        3 => {
            out.push(0xfd);
            out.extend_from_slice(&(value as u16).to_le_bytes());
        }
        5 => {
            out.push(0xfe);
            out.extend_from_slice(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
}
