use crate::domain::{coordinate::Coordinate, kilometers::Kilometers};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates.
///
/// This is a straight-line lower bound, not a road distance.
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> Kilometers {
    let lat1_rad = from.lat().to_radians();
    let lat2_rad = to.lat().to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = (to.lon() - from.lon()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Kilometers::new(EARTH_RADIUS_KM * c)
}
