/// Latitude range [min, max] in degrees
pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Longitude range [min, max] in degrees
pub const LON_RANGE: (f64, f64) = (-180.0, 180.0);

/// Number of interleaved bits carried by one geohash symbol
pub const BITS_PER_SYMBOL: usize = 5;

/// Base-32 geohash alphabet, indexed by symbol value (0-31).
///
/// The letters `a`, `i`, `l` and `o` are absent.
pub const BASE32_ALPHABET: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'k',
    'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Default output length in symbols
pub const DEFAULT_HASH_LENGTH: usize = 8;

/// Default number of latitude bisections
pub const DEFAULT_LAT_BISECTIONS: usize = 20;

/// Default number of longitude bisections
pub const DEFAULT_LON_BISECTIONS: usize = 20;
