//! Configuration management for the congestion engine

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable parameters of the congestion engine
///
/// Missing fields fall back to their defaults when deserializing, so a
/// configuration file only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Linkage distance between two vehicles of the same cluster
    pub radius_meters: f64,
    
    /// Minimum number of vehicles for a cluster to be reported
    pub min_cluster_size: usize,
    
    /// Cluster size at or above which a region is always high
    pub high_vehicle_threshold: usize,
    
    /// Cluster size at or above which a region is at least medium
    pub medium_vehicle_threshold: usize,
    
    /// Average speed (km/h) below which a region is high
    pub high_speed_threshold: f64,
    
    /// Average speed (km/h) below which a region is at least medium
    pub medium_speed_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius_meters: 50.0,
            min_cluster_size: 3,
            high_vehicle_threshold: 8,
            medium_vehicle_threshold: 3,
            high_speed_threshold: 5.0,
            medium_speed_threshold: 15.0,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        radius_meters: f64,
        min_cluster_size: usize,
        high_vehicle_threshold: usize,
        medium_vehicle_threshold: usize,
        high_speed_threshold: f64,
        medium_speed_threshold: f64,
    ) -> Self {
        Self {
            radius_meters,
            min_cluster_size,
            high_vehicle_threshold,
            medium_vehicle_threshold,
            high_speed_threshold,
            medium_speed_threshold,
        }
    }
    
    pub fn with_radius_meters(mut self, radius_meters: f64) -> Self {
        self.radius_meters = radius_meters;
        self
    }
    
    pub fn with_min_cluster_size(mut self, min_cluster_size: usize) -> Self {
        self.min_cluster_size = min_cluster_size;
        self
    }
    
    pub fn with_vehicle_thresholds(mut self, high: usize, medium: usize) -> Self {
        self.high_vehicle_threshold = high;
        self.medium_vehicle_threshold = medium;
        self
    }
    
    pub fn with_speed_thresholds(mut self, high: f64, medium: f64) -> Self {
        self.high_speed_threshold = high;
        self.medium_speed_threshold = medium;
        self
    }
    
    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
    
    /// Check that the parameters describe a usable engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius_meters));
        }
        if self.min_cluster_size == 0 {
            return Err(ConfigError::ZeroMinClusterSize);
        }
        if self.medium_vehicle_threshold > self.high_vehicle_threshold {
            return Err(ConfigError::VehicleThresholdOrder {
                medium: self.medium_vehicle_threshold,
                high: self.high_vehicle_threshold,
            });
        }
        for (name, value) in [
            ("high_speed_threshold", self.high_speed_threshold),
            ("medium_speed_threshold", self.medium_speed_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSpeedThreshold { name, value });
            }
        }
        if self.high_speed_threshold > self.medium_speed_threshold {
            return Err(ConfigError::SpeedThresholdOrder {
                high: self.high_speed_threshold,
                medium: self.medium_speed_threshold,
            });
        }
        Ok(())
    }
}
