use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
///
/// Range is not validated, callers are expected to pass values within
/// -90..90 and -180..180.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Plain average of both endpoints, good enough at city scale.
    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        Coordinate::new((self.lat + other.lat) / 2.0, (self.lon + other.lon) / 2.0)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lon)
    }
}

impl From<&Coordinate> for geo_types::Point<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        geo_types::Point::new(coordinate.lon, coordinate.lat)
    }
}

impl From<&Coordinate> for geo_types::Coord<f64> {
    fn from(coordinate: &Coordinate) -> Self {
        geo_types::Coord {
            x: coordinate.lon,
            y: coordinate.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_uses_lon_as_x() {
        let coordinate = Coordinate::new(21.0285, 105.8542);
        let point = geo_types::Point::from(&coordinate);
        let coord = geo_types::Coord::from(&coordinate);

        assert_eq!(point.x(), 105.8542);
        assert_eq!(point.y(), 21.0285);
        assert_eq!(coord, point.0);
    }

    #[test]
    fn test_midpoint() {
        let a = Coordinate::new(20.0, 105.0);
        let b = Coordinate::new(22.0, 106.0);

        assert_eq!(a.midpoint(&b), Coordinate::new(21.0, 105.5));
    }
}
