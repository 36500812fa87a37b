/// Binary-searches `value` within `[min, max]` for `steps` rounds.
///
/// Each round compares against the midpoint: a value strictly above it emits
/// `true` and keeps the upper half, anything else emits `false` and keeps the
/// lower half. The first element is the most significant bit.
///
/// Values outside `[min, max]` are not clamped. They keep choosing the same
/// half and end up in the boundary cell.
///
/// # Example
/// ```
/// use geohash9::bisect;
///
/// let bits = bisect(116.312621, -180.0, 180.0, 3);
/// assert_eq!(bits, vec![true, true, false]);
/// ```
pub fn bisect(value: f64, min: f64, max: f64, steps: usize) -> Vec<bool> {
    let mut bits = Vec::with_capacity(steps);
    let (mut lo, mut hi) = (min, max);

    for _ in 0..steps {
        let mid = (lo + hi) / 2.0;
        if value > mid {
            bits.push(true);
            lo = mid;
        } else {
            bits.push(false);
            hi = mid;
        }
    }

    bits
}

/// Width of the smallest cell along an axis of width `range` after `steps`
/// bisections.
///
/// Halves iteratively rather than dividing by `2^steps` so the result stays
/// bit-for-bit stable for large step counts.
pub fn min_unit(range: f64, steps: usize) -> f64 {
    let mut unit = range;
    for _ in 0..steps {
        unit /= 2.0;
    }
    unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{LAT_RANGE, LON_RANGE};

    #[test]
    fn test_bisect_length_matches_steps() {
        for steps in [0, 1, 5, 20, 33] {
            assert_eq!(bisect(12.5, LAT_RANGE.0, LAT_RANGE.1, steps).len(), steps);
        }
    }

    #[test]
    fn test_bisect_first_bit_is_hemisphere() {
        assert_eq!(bisect(45.0, LAT_RANGE.0, LAT_RANGE.1, 1), vec![true]);
        assert_eq!(bisect(-45.0, LAT_RANGE.0, LAT_RANGE.1, 1), vec![false]);
    }

    #[test]
    fn test_bisect_midpoint_goes_low() {
        // 0.0 is not strictly greater than the first midpoint
        let bits = bisect(0.0, LAT_RANGE.0, LAT_RANGE.1, 4);
        assert_eq!(bits, vec![false, true, true, true]);
    }

    #[test]
    fn test_bisect_latitude_sample() {
        let bits = bisect(40.058918, LAT_RANGE.0, LAT_RANGE.1, 5);
        // [0,90] -> [0,45] -> [22.5,45] -> [33.75,45] -> [39.375,45]
        assert_eq!(bits, vec![true, false, true, true, true]);
    }

    #[test]
    fn test_bisect_out_of_range_resolves_to_boundary() {
        let above = bisect(200.0, LON_RANGE.0, LON_RANGE.1, 10);
        assert!(above.iter().all(|&b| b));

        let below = bisect(-200.0, LON_RANGE.0, LON_RANGE.1, 10);
        assert!(below.iter().all(|&b| !b));

        assert_eq!(bisect(180.0, LON_RANGE.0, LON_RANGE.1, 10), above);
        assert_eq!(bisect(-180.0, LON_RANGE.0, LON_RANGE.1, 10), below);
    }

    #[test]
    fn test_min_unit_halves() {
        assert_eq!(min_unit(180.0, 0), 180.0);
        assert_eq!(min_unit(180.0, 1), 90.0);
        assert_eq!(min_unit(360.0, 20), 0.00034332275390625);
        assert_eq!(min_unit(180.0, 20), 0.000171661376953125);
    }
}
