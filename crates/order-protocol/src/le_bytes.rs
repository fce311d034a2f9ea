//! Fixed-width little-endian integer helpers.
//!
//! Both functions panic if `offset + 4` runs past the buffer; callers
//! index with the constants from `wire_types`, which always fit.

/// Write `value` as 4 little-endian bytes at `buf[offset..offset + 4]`.
pub fn put_u32_le(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Read 4 little-endian bytes at `buf[offset..offset + 4]`.
pub fn get_u32_le(buf: &[u8], offset: usize) -> u32 {
    let mut arr = [0u8; 4];
    arr.copy_from_slice(&buf[offset..offset + 4]);
    u32::from_le_bytes(arr)
}
