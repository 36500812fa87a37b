use crate::core::constants::{BASE32_ALPHABET, BITS_PER_SYMBOL};

/// Maps an interleaved bit code to geohash symbols.
///
/// Bits are taken in groups of five, left to right, most significant bit
/// first within a group. A trailing group shorter than five bits is read as a
/// plain binary number of its own width, so `101` becomes symbol 5.
///
/// # Example
/// ```
/// use geohash9::to_base32;
///
/// // 11100 -> 28 -> 'w'
/// assert_eq!(to_base32(&[true, true, true, false, false]), "w");
/// ```
pub fn to_base32(bits: &[bool]) -> String {
    bits.chunks(BITS_PER_SYMBOL)
        .map(|group| {
            let value = group
                .iter()
                .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
            BASE32_ALPHABET[value]
        })
        .collect()
}
