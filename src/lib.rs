//! # geohash9
//!
//! There are currently two main entry points.
//!
//! ### 1. `GeoHashEncoder::encode` - Single Cell
//!
//! ```
//! use geohash9::GeoHashEncoder;
//!
//! # fn main() -> Result<(), geohash9::GeoHashError> {
//! let encoder = GeoHashEncoder::default();
//! let hash = encoder.encode(40.058918, 116.312621)?;
//! assert_eq!(hash, "wx4eyu82");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeoHashEncoder::encode_neighborhood` - Cell and Its 8 Neighbors
//!
//! ```
//! use geohash9::{Direction, GeoHashEncoder};
//!
//! # fn main() -> Result<(), geohash9::GeoHashError> {
//! let encoder = GeoHashEncoder::default();
//! let hood = encoder.encode_neighborhood(40.058918, 116.312621)?;
//!
//! assert_eq!(hood.get(Direction::Up), "wx4eyu83");
//! println!("{}", hood.to_json()?);
//! # Ok(())
//! # }
//! ```
//!
//! Precision is set by the output length and the number of bisections per
//! axis. Five interleaved bits make one symbol, so the length must equal the
//! total bisection count divided by five:
//!
//! ```
//! use geohash9::{EncoderConfig, GeoHashEncoder};
//!
//! # fn main() -> Result<(), geohash9::GeoHashError> {
//! let config = EncoderConfig::default()
//!     .hash_length(5)
//!     .lat_bisections(12)
//!     .lon_bisections(13);
//! let encoder = GeoHashEncoder::from_config(config)?;
//! assert_eq!(encoder.encode(57.64911, 10.40744)?, "u4pru");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    Direction, EncoderConfig, GeoHashEncoder, GeoHashEncoderBuilder, Neighborhood,
};
pub use crate::core::{
    BASE32_ALPHABET, BITS_PER_SYMBOL, DEFAULT_HASH_LENGTH, DEFAULT_LAT_BISECTIONS,
    DEFAULT_LON_BISECTIONS, LAT_RANGE, LON_RANGE, bisect, interleave, min_unit, to_base32,
};
pub use crate::util::{Axis, Coordinate, GeoHashError, in_bounds};

pub use geo_types;
