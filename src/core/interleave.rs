use crate::util::error::{Axis, GeoHashError};

/// Merges per-axis bit sequences into one code, longitude first.
///
/// Even positions take the next longitude bit and odd positions take the next
/// latitude bit, each axis read front to back. The output has
/// `lat_bits.len() + lon_bits.len()` bits.
///
/// # Errors
///
/// [`GeoHashError::BitsExhausted`] if the alternating walk asks an axis for
/// more bits than it holds. That happens whenever the longitude sequence is
/// not equal to, or exactly one longer than, the latitude sequence.
///
/// # Example
/// ```
/// use geohash9::interleave;
///
/// # fn main() -> Result<(), geohash9::GeoHashError> {
/// let code = interleave(&[true, false], &[false, true, true])?;
/// assert_eq!(code, vec![false, true, true, false, true]);
/// # Ok(())
/// # }
/// ```
pub fn interleave(lat_bits: &[bool], lon_bits: &[bool]) -> Result<Vec<bool>, GeoHashError> {
    let len = lat_bits.len() + lon_bits.len();
    let mut code = Vec::with_capacity(len);
    let (mut lat_idx, mut lon_idx) = (0, 0);

    for position in 0..len {
        let bit = if position % 2 == 0 {
            let bit = lon_bits.get(lon_idx).ok_or(GeoHashError::BitsExhausted {
                axis: Axis::Longitude,
                position,
            })?;
            lon_idx += 1;
            bit
        } else {
            let bit = lat_bits.get(lat_idx).ok_or(GeoHashError::BitsExhausted {
                axis: Axis::Latitude,
                position,
            })?;
            lat_idx += 1;
            bit
        };
        code.push(*bit);
    }

    Ok(code)
}
