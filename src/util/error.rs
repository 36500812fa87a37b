use std::fmt;

/// Coordinate axis, used to report which bit sequence ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Error type for geohash9 operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoHashError {
    /// Latitude occupies odd bit positions, so it can never have more
    /// bisections than longitude.
    #[error(
        "latitude bisection count ({lat_bisections}) must not exceed longitude bisection count ({lon_bisections})"
    )]
    LatitudeExceedsLongitude {
        lat_bisections: usize,
        lon_bisections: usize,
    },
    /// Hash length does not equal the total bisection count divided by five.
    #[error(
        "hash length {hash_length} is inconsistent with {lat_bisections} latitude and {lon_bisections} longitude bisections"
    )]
    InconsistentLength {
        hash_length: usize,
        lat_bisections: usize,
        lon_bisections: usize,
    },
    /// Interleaving asked an axis for more bits than it produced.
    #[error("{axis} bits exhausted at interleaved position {position}")]
    BitsExhausted { axis: Axis, position: usize },
    /// Encoder configuration could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(String),
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(String),
}

impl GeoHashError {
    /// True for the two construction-time validation failures.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            GeoHashError::LatitudeExceedsLongitude { .. } | GeoHashError::InconsistentLength { .. }
        )
    }
}

impl From<std::io::Error> for GeoHashError {
    fn from(e: std::io::Error) -> Self {
        GeoHashError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for GeoHashError {
    fn from(e: serde_json::Error) -> Self {
        GeoHashError::ConfigParse(e.to_string())
    }
}
