//! Additive payload checksum.

/// Sum of every payload byte except `checksum_byte`, modulo 256.
///
/// Passing a `checksum_byte` past the end sums the whole payload.
pub fn additive_checksum(payload: &[u8], checksum_byte: usize) -> u8 {
    payload
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != checksum_byte)
        .fold(0u8, |acc, (_, &b)| acc.wrapping_add(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_checksum_byte() {
        let payload = [1, 2, 3, 4, 5, 6, 7, 0xAA];
        assert_eq!(additive_checksum(&payload, 7), 28);
        assert_eq!(additive_checksum(&payload, 0), (27u32 + 0xAA) as u8);
    }

    #[test]
    fn test_wraps() {
        assert_eq!(additive_checksum(&[0xFF, 0xFF, 0x00], 2), 0xFE);
    }

    #[test]
    fn test_out_of_range_index_sums_everything() {
        assert_eq!(additive_checksum(&[1, 2, 3], 10), 6);
    }
}
