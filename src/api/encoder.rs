use crate::api::config::EncoderConfig;
use crate::api::neighborhood::Neighborhood;
use crate::core::base32::to_base32;
use crate::core::bisect::{bisect, min_unit};
use crate::core::constants::{LAT_RANGE, LON_RANGE};
use crate::core::interleave::interleave;
use crate::util::coord::{Coordinate, in_bounds};
use crate::util::error::GeoHashError;
use rayon::prelude::*;

/// A validated geohash encoder.
///
/// Holds the output length and per-axis bisection counts along with the
/// derived cell size on each axis. Once built it never changes, so one
/// instance can be shared across threads.
///
/// # Example
///
/// ```
/// use geohash9::GeoHashEncoder;
///
/// # fn main() -> Result<(), geohash9::GeoHashError> {
/// let encoder = GeoHashEncoder::new(None, None, None)?;
/// assert_eq!(encoder.encode(40.058918, 116.312621)?, "wx4eyu82");
///
/// let hood = encoder.encode_neighborhood(40.058918, 116.312621)?;
/// println!("{}", hood.to_json()?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoHashEncoder {
    config: EncoderConfig,
    min_lat_unit: f64,
    min_lon_unit: f64,
}

impl Default for GeoHashEncoder {
    /// Length 8 with 20 bisections per axis.
    fn default() -> Self {
        let config = EncoderConfig::default();
        Self::derive(config)
    }
}

impl GeoHashEncoder {
    /// Creates an encoder, using the default for each `None` parameter.
    ///
    /// # Errors
    ///
    /// - [`GeoHashError::LatitudeExceedsLongitude`]
    /// - [`GeoHashError::InconsistentLength`]
    ///
    /// # Example
    /// ```
    /// use geohash9::{GeoHashEncoder, GeoHashError};
    ///
    /// assert!(GeoHashEncoder::new(Some(5), Some(12), Some(13)).is_ok());
    /// assert!(matches!(
    ///     GeoHashEncoder::new(Some(9), None, None),
    ///     Err(GeoHashError::InconsistentLength { .. })
    /// ));
    /// ```
    pub fn new(
        hash_length: Option<usize>,
        lat_bisections: Option<usize>,
        lon_bisections: Option<usize>,
    ) -> Result<Self, GeoHashError> {
        Self::from_config(EncoderConfig::from_options(
            hash_length,
            lat_bisections,
            lon_bisections,
        ))
    }

    /// Creates an encoder from an explicit config.
    pub fn from_config(config: EncoderConfig) -> Result<Self, GeoHashError> {
        config.validate()?;
        let encoder = Self::derive(config);

        log::debug!(
            "geohash encoder ready: length={}, lat_bisections={}, lon_bisections={}, min_lat_unit={}, min_lon_unit={}",
            config.hash_length,
            config.lat_bisections,
            config.lon_bisections,
            encoder.min_lat_unit,
            encoder.min_lon_unit
        );

        Ok(encoder)
    }

    pub fn builder() -> GeoHashEncoderBuilder {
        GeoHashEncoderBuilder::new()
    }

    fn derive(config: EncoderConfig) -> Self {
        Self {
            config,
            min_lat_unit: min_unit(LAT_RANGE.1 - LAT_RANGE.0, config.lat_bisections),
            min_lon_unit: min_unit(LON_RANGE.1 - LON_RANGE.0, config.lon_bisections),
        }
    }

    pub fn config(&self) -> EncoderConfig {
        self.config
    }

    pub fn hash_length(&self) -> usize {
        self.config.hash_length
    }

    /// Height of one cell in degrees of latitude.
    pub fn min_lat_unit(&self) -> f64 {
        self.min_lat_unit
    }

    /// Width of one cell in degrees of longitude.
    pub fn min_lon_unit(&self) -> f64 {
        self.min_lon_unit
    }

    /// Encodes a coordinate into a geohash of [`hash_length`](Self::hash_length) symbols.
    ///
    /// Coordinates outside `[-90, 90]` / `[-180, 180]` are not rejected; they
    /// encode to the nearest boundary cell.
    ///
    /// # Errors
    ///
    /// [`GeoHashError::BitsExhausted`] when the bisection counts cannot be
    /// interleaved, which only happens if longitude has two or more
    /// bisections more than latitude.
    pub fn encode(&self, lat: f64, lon: f64) -> Result<String, GeoHashError> {
        if !in_bounds(lat, lon) {
            log::debug!("coordinate ({lat}, {lon}) outside encodable range, using boundary cell");
        }

        let lat_bits = bisect(lat, LAT_RANGE.0, LAT_RANGE.1, self.config.lat_bisections);
        let lon_bits = bisect(lon, LON_RANGE.0, LON_RANGE.1, self.config.lon_bisections);
        let code = interleave(&lat_bits, &lon_bits)?;

        Ok(to_base32(&code))
    }

    /// Encodes a `(lon, lat)` tuple, `geo_types::Point` or `Coord`.
    ///
    /// # Example
    /// ```
    /// use geohash9::GeoHashEncoder;
    /// use geo_types::point;
    ///
    /// # fn main() -> Result<(), geohash9::GeoHashError> {
    /// let encoder = GeoHashEncoder::default();
    /// let pt = point! { x: 116.312621, y: 40.058918 };
    /// assert_eq!(encoder.encode_point(&pt)?, encoder.encode(40.058918, 116.312621)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn encode_point(&self, coord: &impl Coordinate) -> Result<String, GeoHashError> {
        self.encode(coord.lat(), coord.lon())
    }

    /// Encodes many coordinates in parallel, keeping input order.
    pub fn encode_batch<C>(&self, coords: &[C]) -> Result<Vec<String>, GeoHashError>
    where
        C: Coordinate + Sync,
    {
        coords.par_iter().map(|c| self.encode_point(c)).collect()
    }

    /// Encodes the cell containing the coordinate and its eight neighbors.
    ///
    /// Neighbors are found by stepping one cell size along each axis. There
    /// is no wrapping at the poles or the antimeridian: a step past either
    /// lands back in the boundary cell.
    pub fn encode_neighborhood(&self, lat: f64, lon: f64) -> Result<Neighborhood, GeoHashError> {
        Neighborhood::try_from_fn(|direction| {
            let (lat_step, lon_step) = direction.offsets();
            self.encode(
                lat + f64::from(lat_step) * self.min_lat_unit,
                lon + f64::from(lon_step) * self.min_lon_unit,
            )
        })
    }

    /// [`encode_neighborhood`](Self::encode_neighborhood) for a `(lon, lat)`
    /// tuple, `geo_types::Point` or `Coord`.
    pub fn encode_neighborhood_point(
        &self,
        coord: &impl Coordinate,
    ) -> Result<Neighborhood, GeoHashError> {
        self.encode_neighborhood(coord.lat(), coord.lon())
    }
}

#[derive(Debug, Default)]
pub struct GeoHashEncoderBuilder {
    hash_length: Option<usize>,
    lat_bisections: Option<usize>,
    lon_bisections: Option<usize>,
}

impl GeoHashEncoderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hash_length(mut self, hash_length: usize) -> Self {
        self.hash_length = Some(hash_length);
        self
    }

    pub fn lat_bisections(mut self, lat_bisections: usize) -> Self {
        self.lat_bisections = Some(lat_bisections);
        self
    }

    pub fn lon_bisections(mut self, lon_bisections: usize) -> Self {
        self.lon_bisections = Some(lon_bisections);
        self
    }

    pub fn build(self) -> Result<GeoHashEncoder, GeoHashError> {
        GeoHashEncoder::new(self.hash_length, self.lat_bisections, self.lon_bisections)
    }
}
