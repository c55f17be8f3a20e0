//! Boundary validation of congestion requests
//!
//! The engine trusts its input, so every range and identity check happens
//! here before a batch is handed over.

use std::collections::HashSet;

use crate::data::{CongestionRequest, VehicleObservation};
use crate::error::ValidationError;

impl CongestionRequest {
    /// Reject the request on the first malformed observation
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.observations.is_empty() {
            return Err(ValidationError::EmptyObservations);
        }
        
        let mut seen_ids = HashSet::with_capacity(self.observations.len());
        for (index, observation) in self.observations.iter().enumerate() {
            if observation.vehicle_id.is_empty() {
                return Err(ValidationError::EmptyVehicleId { index });
            }
            if !seen_ids.insert(observation.vehicle_id.as_str()) {
                return Err(ValidationError::DuplicateVehicleId {
                    vehicle_id: observation.vehicle_id.clone(),
                });
            }
            validate_observation(observation)?;
        }
        
        Ok(())
    }
}

/// Range checks for a single observation
pub fn validate_observation(observation: &VehicleObservation) -> Result<(), ValidationError> {
    let vehicle_id = || observation.vehicle_id.clone();
    let coordinate = &observation.coordinate;
    
    if !coordinate.latitude.is_finite() || !(-90.0..=90.0).contains(&coordinate.latitude) {
        return Err(ValidationError::LatitudeOutOfRange {
            vehicle_id: vehicle_id(),
            value: coordinate.latitude,
        });
    }
    if !coordinate.longitude.is_finite() || !(-180.0..=180.0).contains(&coordinate.longitude) {
        return Err(ValidationError::LongitudeOutOfRange {
            vehicle_id: vehicle_id(),
            value: coordinate.longitude,
        });
    }
    if let Some(speed) = observation.speed_kph {
        if !speed.is_finite() || speed < 0.0 {
            return Err(ValidationError::NegativeSpeed {
                vehicle_id: vehicle_id(),
                value: speed,
            });
        }
    }
    if let Some(heading) = observation.heading_degrees {
        if !heading.is_finite() || !(0.0..360.0).contains(&heading) {
            return Err(ValidationError::HeadingOutOfRange {
                vehicle_id: vehicle_id(),
                value: heading,
            });
        }
    }
    
    Ok(())
}
