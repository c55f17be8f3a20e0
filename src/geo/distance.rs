//! Great-circle distance on a spherical earth

use crate::geo::Coordinate;

/// Mean earth radius used by the haversine formula
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters
///
/// Treats the earth as a sphere, which is accurate to well under a percent
/// at the tens-of-meters scale clustering works at.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();
    
    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    
    // Rounding can push h a hair above 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    
    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}
