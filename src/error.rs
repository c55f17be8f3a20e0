//! Error types for the boundary layer
//!
//! The detection engine itself is total over well-formed input and never
//! returns these. They are produced while validating a request or a
//! configuration before the engine runs.

use thiserror::Error;

/// Reasons a congestion request is rejected before reaching the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("observations cannot be empty")]
    EmptyObservations,

    #[error("observation {index}: vehicle_id cannot be empty")]
    EmptyVehicleId { index: usize },

    #[error("vehicle_id {vehicle_id:?} appears more than once")]
    DuplicateVehicleId { vehicle_id: String },

    #[error("vehicle {vehicle_id:?}: latitude {value} must be between -90 and 90 degrees")]
    LatitudeOutOfRange { vehicle_id: String, value: f64 },

    #[error("vehicle {vehicle_id:?}: longitude {value} must be between -180 and 180 degrees")]
    LongitudeOutOfRange { vehicle_id: String, value: f64 },

    #[error("vehicle {vehicle_id:?}: speed {value} cannot be negative")]
    NegativeSpeed { vehicle_id: String, value: f64 },

    #[error("vehicle {vehicle_id:?}: heading {value} must be in [0, 360) degrees")]
    HeadingOutOfRange { vehicle_id: String, value: f64 },
}

/// Reasons an engine configuration is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("radius_meters must be a positive finite number, got {0}")]
    InvalidRadius(f64),

    #[error("min_cluster_size must be at least 1")]
    ZeroMinClusterSize,

    #[error("medium_vehicle_threshold ({medium}) exceeds high_vehicle_threshold ({high})")]
    VehicleThresholdOrder { medium: usize, high: usize },

    #[error("speed threshold {name} must be a non-negative finite number, got {value}")]
    InvalidSpeedThreshold { name: &'static str, value: f64 },

    #[error("high_speed_threshold ({high}) exceeds medium_speed_threshold ({medium})")]
    SpeedThresholdOrder { high: f64, medium: f64 },
}
