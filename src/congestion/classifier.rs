//! Severity classification of clusters

use crate::config::Config;
use crate::congestion::CongestionLevel;

/// Size and speed cut-offs for each severity level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub high_vehicles: usize,
    pub medium_vehicles: usize,
    pub high_speed: f64,
    pub medium_speed: f64,
}

impl From<&Config> for Thresholds {
    fn from(config: &Config) -> Self {
        Self {
            high_vehicles: config.high_vehicle_threshold,
            medium_vehicles: config.medium_vehicle_threshold,
            high_speed: config.high_speed_threshold,
            medium_speed: config.medium_speed_threshold,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Severity of a cluster from its size and average speed
///
/// Either a large enough cluster or a slow enough one reaches a level, and
/// high is tested before medium. An unknown speed only removes the speed
/// test, so missing data never lowers the level below what size alone gives.
pub fn classify(
    cluster_size: usize,
    average_speed: Option<f64>,
    thresholds: &Thresholds,
) -> CongestionLevel {
    let slower_than = |limit: f64| average_speed.map_or(false, |speed| speed < limit);
    
    if cluster_size >= thresholds.high_vehicles || slower_than(thresholds.high_speed) {
        return CongestionLevel::High;
    }
    if cluster_size >= thresholds.medium_vehicles || slower_than(thresholds.medium_speed) {
        return CongestionLevel::Medium;
    }
    CongestionLevel::Low
}
