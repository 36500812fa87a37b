use crate::core::constants::{
    BITS_PER_SYMBOL, DEFAULT_HASH_LENGTH, DEFAULT_LAT_BISECTIONS, DEFAULT_LON_BISECTIONS,
};
use crate::util::error::GeoHashError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Encoder parameters: output length and per-axis bisection counts.
///
/// Missing fields in a JSON document fall back to the defaults
/// (length 8, 20 latitude and 20 longitude bisections).
///
/// # Example
/// ```
/// use geohash9::EncoderConfig;
///
/// # fn main() -> Result<(), geohash9::GeoHashError> {
/// let config = EncoderConfig::default()
///     .hash_length(5)
///     .lat_bisections(12)
///     .lon_bisections(13);
/// config.validate()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncoderConfig {
    pub hash_length: usize,
    pub lat_bisections: usize,
    pub lon_bisections: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            hash_length: DEFAULT_HASH_LENGTH,
            lat_bisections: DEFAULT_LAT_BISECTIONS,
            lon_bisections: DEFAULT_LON_BISECTIONS,
        }
    }
}

impl EncoderConfig {
    pub fn new(hash_length: usize, lat_bisections: usize, lon_bisections: usize) -> Self {
        Self {
            hash_length,
            lat_bisections,
            lon_bisections,
        }
    }

    /// Builds a config from optional values, substituting defaults for `None`.
    pub fn from_options(
        hash_length: Option<usize>,
        lat_bisections: Option<usize>,
        lon_bisections: Option<usize>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            hash_length: hash_length.unwrap_or(defaults.hash_length),
            lat_bisections: lat_bisections.unwrap_or(defaults.lat_bisections),
            lon_bisections: lon_bisections.unwrap_or(defaults.lon_bisections),
        }
    }

    pub fn hash_length(mut self, hash_length: usize) -> Self {
        self.hash_length = hash_length;
        self
    }

    pub fn lat_bisections(mut self, lat_bisections: usize) -> Self {
        self.lat_bisections = lat_bisections;
        self
    }

    pub fn lon_bisections(mut self, lon_bisections: usize) -> Self {
        self.lon_bisections = lon_bisections;
        self
    }

    /// Total number of interleaved bits, or `None` if the sum overflows.
    pub fn total_bits(&self) -> Option<usize> {
        self.lat_bisections.checked_add(self.lon_bisections)
    }

    /// Checks the parameters against each other.
    ///
    /// The length rule is checked first. When it fails, or when latitude has
    /// more bisections than longitude, the error names the bisection-order
    /// rule if latitude exceeds longitude and the length mismatch otherwise.
    ///
    /// # Errors
    ///
    /// - [`GeoHashError::LatitudeExceedsLongitude`]
    /// - [`GeoHashError::InconsistentLength`]
    pub fn validate(&self) -> Result<(), GeoHashError> {
        let length_matches = self.total_bits().is_some_and(|total| {
            total >= BITS_PER_SYMBOL
                && total % BITS_PER_SYMBOL == 0
                && self.hash_length == total / BITS_PER_SYMBOL
        });

        if length_matches && self.lat_bisections <= self.lon_bisections {
            return Ok(());
        }

        if self.lat_bisections > self.lon_bisections {
            return Err(GeoHashError::LatitudeExceedsLongitude {
                lat_bisections: self.lat_bisections,
                lon_bisections: self.lon_bisections,
            });
        }

        Err(GeoHashError::InconsistentLength {
            hash_length: self.hash_length,
            lat_bisections: self.lat_bisections,
            lon_bisections: self.lon_bisections,
        })
    }

    /// Parses a config from a JSON object such as
    /// `{"hashLength": 5, "latBisections": 12, "lonBisections": 13}`.
    ///
    /// The result is not validated; that happens when an encoder is built.
    pub fn from_json_str(json: &str) -> Result<Self, GeoHashError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GeoHashError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() -> Result<(), GeoHashError> {
        let config = EncoderConfig::default();
        assert_eq!(config, EncoderConfig::new(8, 20, 20));
        config.validate()?;
        Ok(())
    }

    #[test]
    fn test_from_options_fills_defaults() {
        let config = EncoderConfig::from_options(Some(5), None, Some(13));
        assert_eq!(config, EncoderConfig::new(5, 20, 13));

        let config = EncoderConfig::from_options(None, None, None);
        assert_eq!(config, EncoderConfig::default());
    }

    #[test]
    fn test_wrong_length_for_default_bisections() {
        for len in [0, 1, 7, 9, 40] {
            let result = EncoderConfig::new(len, 20, 20).validate();
            assert!(matches!(
                result,
                Err(GeoHashError::InconsistentLength { hash_length, .. }) if hash_length == len
            ));
        }
    }

    #[test]
    fn test_latitude_exceeding_longitude() {
        let result = EncoderConfig::new(8, 21, 20).validate();
        assert_eq!(
            result,
            Err(GeoHashError::LatitudeExceedsLongitude {
                lat_bisections: 21,
                lon_bisections: 20,
            })
        );
    }

    #[test]
    fn test_order_reported_even_when_length_matches() {
        // 25 bits, length 5: the length rule holds but the order rule does not
        let result = EncoderConfig::new(5, 13, 12).validate();
        assert!(matches!(
            result,
            Err(GeoHashError::LatitudeExceedsLongitude { .. })
        ));
    }

    #[test]
    fn test_generic_mismatch_when_order_holds() {
        let result = EncoderConfig::new(3, 10, 12).validate();
        assert!(matches!(result, Err(GeoHashError::InconsistentLength { .. })));
    }

    #[test]
    fn test_fewer_than_five_bits_rejected() {
        assert!(EncoderConfig::new(0, 0, 0).validate().is_err());
        assert!(EncoderConfig::new(0, 2, 2).validate().is_err());
        assert!(EncoderConfig::new(1, 2, 2).validate().is_err());
    }

    #[test]
    fn test_non_multiple_of_five_rejected() {
        // 43 bits would need a 3-bit trailing symbol
        assert!(matches!(
            EncoderConfig::new(8, 21, 22).validate(),
            Err(GeoHashError::InconsistentLength { .. })
        ));
        assert!(EncoderConfig::new(9, 21, 22).validate().is_err());
    }

    #[test]
    fn test_odd_total_bits_accepted() -> Result<(), GeoHashError> {
        EncoderConfig::new(1, 2, 3).validate()?;
        EncoderConfig::new(5, 12, 13).validate()?;
        Ok(())
    }

    #[test]
    fn test_overflowing_bisection_sum_rejected() {
        // The sum wraps past usize::MAX, so no length can match it
        let result = EncoderConfig::new(usize::MAX / 5, 1, usize::MAX).validate();
        assert!(matches!(result, Err(GeoHashError::InconsistentLength { .. })));

        let result = EncoderConfig::new(usize::MAX / 5, usize::MAX, usize::MAX).validate();
        assert!(matches!(result, Err(GeoHashError::InconsistentLength { .. })));

        let result = EncoderConfig::new(usize::MAX / 5, usize::MAX, 1).validate();
        assert!(matches!(
            result,
            Err(GeoHashError::LatitudeExceedsLongitude { .. })
        ));

        assert_eq!(EncoderConfig::new(0, usize::MAX, 1).total_bits(), None);
        assert_eq!(EncoderConfig::default().total_bits(), Some(40));
    }

    #[test]
    fn test_from_json_str() -> Result<(), GeoHashError> {
        let config =
            EncoderConfig::from_json_str(r#"{"hashLength": 5, "latBisections": 12, "lonBisections": 13}"#)?;
        assert_eq!(config, EncoderConfig::new(5, 12, 13));
        Ok(())
    }

    #[test]
    fn test_from_json_str_missing_fields_use_defaults() -> Result<(), GeoHashError> {
        let config = EncoderConfig::from_json_str(r#"{"hashLength": 9}"#)?;
        assert_eq!(config, EncoderConfig::new(9, 20, 20));

        let config = EncoderConfig::from_json_str("{}")?;
        assert_eq!(config, EncoderConfig::default());
        Ok(())
    }

    #[test]
    fn test_from_json_str_invalid() {
        let result = EncoderConfig::from_json_str(r#"{"hashLength": -1}"#);
        assert!(matches!(result, Err(GeoHashError::ConfigParse(_))));
    }

    #[test]
    fn test_from_json_file() -> Result<(), GeoHashError> {
        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, r#"{{"hashLength": 1, "latBisections": 2, "lonBisections": 3}}"#)?;

        let config = EncoderConfig::from_json_file(file.path())?;
        assert_eq!(config, EncoderConfig::new(1, 2, 3));
        Ok(())
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = EncoderConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(GeoHashError::Io(_))));
    }
}
