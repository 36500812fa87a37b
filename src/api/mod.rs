pub mod config;
pub mod encoder;
pub mod neighborhood;

pub use config::EncoderConfig;
pub use encoder::{GeoHashEncoder, GeoHashEncoderBuilder};
pub use neighborhood::{Direction, Neighborhood};
