pub mod base32;
pub mod bisect;
pub mod constants;
pub mod interleave;

pub use base32::to_base32;
pub use bisect::{bisect, min_unit};
pub use constants::{
    BASE32_ALPHABET, BITS_PER_SYMBOL, DEFAULT_HASH_LENGTH, DEFAULT_LAT_BISECTIONS,
    DEFAULT_LON_BISECTIONS, LAT_RANGE, LON_RANGE,
};
pub use interleave::interleave;
