//! Geographic primitives

pub mod distance;

pub use distance::{EARTH_RADIUS_METERS, haversine_distance};

use serde::{Deserialize, Serialize};

/// A point on the earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in [-90, 90]
    pub latitude: f64,
    
    /// Longitude in [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
    
    /// Whether both components are finite and inside their valid ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}
