//! Request and response documents exchanged with the engine's callers

pub mod loader;
pub mod validate;

pub use loader::{load_request, parse_request};

use serde::{Deserialize, Serialize};

use crate::congestion::CongestionRegion;
use crate::geo::Coordinate;

/// One vehicle's position reading within a request batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleObservation {
    /// Identifier unique within one request
    pub vehicle_id: String,
    
    pub coordinate: Coordinate,
    
    /// Speed in kilometers per hour, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_kph: Option<f64>,
    
    /// Heading in degrees from true north; carried but unused by detection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_degrees: Option<f64>,
}

impl VehicleObservation {
    pub fn new(vehicle_id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            coordinate: Coordinate::new(latitude, longitude),
            speed_kph: None,
            heading_degrees: None,
        }
    }
    
    pub fn with_speed(mut self, speed_kph: f64) -> Self {
        self.speed_kph = Some(speed_kph);
        self
    }
    
    pub fn with_heading(mut self, heading_degrees: f64) -> Self {
        self.heading_degrees = Some(heading_degrees);
        self
    }
}

/// A batch of observations submitted for detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionRequest {
    pub observations: Vec<VehicleObservation>,
}

/// The regions detected for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionResponse {
    pub congested_regions: Vec<CongestionRegion>,
}
