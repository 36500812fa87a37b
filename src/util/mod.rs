pub mod coord;
pub mod error;

pub use coord::{Coordinate, in_bounds};
pub use error::{Axis, GeoHashError};
