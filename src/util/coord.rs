use crate::core::constants::{LAT_RANGE, LON_RANGE};
use geo_types::{Coord, Point};

/// A WGS84 position given as `x` = longitude, `y` = latitude.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn lon(&self) -> f64 {
        self.x()
    }

    fn lat(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

/// Whether `lat`/`lon` fall inside the encodable ranges.
pub fn in_bounds(lat: f64, lon: f64) -> bool {
    (LAT_RANGE.0..=LAT_RANGE.1).contains(&lat) && (LON_RANGE.0..=LON_RANGE.1).contains(&lon)
}
