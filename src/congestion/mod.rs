//! Congestion regions and their severity

pub mod classifier;
pub mod engine;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Severity of a congested region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    Low,
    Medium,
    High,
}

impl CongestionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CongestionLevel::Low => "low",
            CongestionLevel::Medium => "medium",
            CongestionLevel::High => "high",
        }
    }
}

impl fmt::Display for CongestionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected cluster of vehicles, summarized for callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionRegion {
    /// 1-based position among the regions of one detection run
    pub region_id: u32,
    
    /// Mean position of the member vehicles
    pub centroid: Coordinate,
    
    /// Convex hull of the member positions; the last vertex joins the first
    pub boundary: Vec<Coordinate>,
    
    /// Member vehicles in discovery order
    pub vehicle_ids: Vec<String>,
    
    pub congestion_level: CongestionLevel,
}
