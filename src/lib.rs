//! Core library functions for the traffic congestion monitor

pub mod boundary;
pub mod cluster;
pub mod config;
pub mod congestion;
pub mod data;
pub mod error;
pub mod geo;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use config::Config;
pub use congestion::{CongestionLevel, CongestionRegion};
pub use congestion::engine::{CongestionEngine, detect_congestion};
pub use data::{CongestionRequest, CongestionResponse, VehicleObservation};
pub use error::{ConfigError, ValidationError};
pub use geo::Coordinate;
