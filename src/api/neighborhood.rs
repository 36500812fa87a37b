use crate::util::error::GeoHashError;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the nine cells in a neighborhood, named relative to the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Up,
    Current,
    Down,
    LeftUp,
    Left,
    LeftDown,
    RightUp,
    Right,
    RightDown,
}

impl Direction {
    /// All nine directions, in output order.
    pub const ALL: [Direction; 9] = [
        Direction::Up,
        Direction::Current,
        Direction::Down,
        Direction::LeftUp,
        Direction::Left,
        Direction::LeftDown,
        Direction::RightUp,
        Direction::Right,
        Direction::RightDown,
    ];

    /// The label used as the key in the neighborhood map.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Current => "current",
            Direction::Down => "down",
            Direction::LeftUp => "leftUp",
            Direction::Left => "left",
            Direction::LeftDown => "leftDown",
            Direction::RightUp => "rightUp",
            Direction::Right => "right",
            Direction::RightDown => "rightDown",
        }
    }

    /// `(lat, lon)` step multipliers: -1, 0 or +1 minimum units per axis.
    pub fn offsets(self) -> (i8, i8) {
        match self {
            Direction::Up => (1, 0),
            Direction::Current => (0, 0),
            Direction::Down => (-1, 0),
            Direction::LeftUp => (1, -1),
            Direction::Left => (0, -1),
            Direction::LeftDown => (-1, -1),
            Direction::RightUp => (1, 1),
            Direction::Right => (0, 1),
            Direction::RightDown => (-1, 1),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| format!("unknown direction label: {s}"))
    }
}

/// Geohashes of a cell and its eight surrounding cells.
///
/// Serializes as a JSON object keyed by [`Direction::label`].
///
/// # Example
/// ```
/// use geohash9::{Direction, GeoHashEncoder};
///
/// # fn main() -> Result<(), geohash9::GeoHashError> {
/// let encoder = GeoHashEncoder::default();
/// let hood = encoder.encode_neighborhood(40.058918, 116.312621)?;
///
/// assert_eq!(hood.len(), 9);
/// assert_eq!(hood.get(Direction::Current), encoder.encode(40.058918, 116.312621)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    hashes: [String; 9],
}

impl Neighborhood {
    /// Builds a neighborhood by hashing each direction with `f`.
    pub(crate) fn try_from_fn<F>(mut f: F) -> Result<Self, GeoHashError>
    where
        F: FnMut(Direction) -> Result<String, GeoHashError>,
    {
        let mut hashes: [String; 9] = Default::default();
        for direction in Direction::ALL {
            hashes[direction.index()] = f(direction)?;
        }
        Ok(Self { hashes })
    }

    pub fn get(&self, direction: Direction) -> &str {
        &self.hashes[direction.index()]
    }

    /// Looks up a hash by its label, e.g. `"leftUp"`.
    pub fn get_label(&self, label: &str) -> Option<&str> {
        label.parse::<Direction>().ok().map(|d| self.get(d))
    }

    pub fn current(&self) -> &str {
        self.get(Direction::Current)
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &str)> {
        Direction::ALL
            .into_iter()
            .map(move |d| (d, self.hashes[d.index()].as_str()))
    }

    /// Renders the neighborhood as a compact JSON object.
    pub fn to_json(&self) -> Result<String, GeoHashError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for Neighborhood {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (direction, hash) in self.iter() {
            map.serialize_entry(direction.label(), hash)?;
        }
        map.end()
    }
}
