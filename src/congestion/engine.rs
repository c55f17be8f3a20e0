//! Congestion detection over one batch of observations

use rayon::prelude::*;

use crate::boundary::build_boundary;
use crate::cluster::{RawCluster, find_density_clusters, metrics};
use crate::config::Config;
use crate::congestion::classifier::{Thresholds, classify};
use crate::congestion::{CongestionLevel, CongestionRegion};
use crate::data::VehicleObservation;
use crate::geo::Coordinate;

/// Everything derived from a cluster except its position in the output
#[derive(Debug, Clone)]
struct ClusterSummary {
    centroid: Coordinate,
    boundary: Vec<Coordinate>,
    vehicle_ids: Vec<String>,
    average_speed: Option<f64>,
    level: CongestionLevel,
}

/// Stateless congestion detector
///
/// Holds only its configuration, so one engine can serve any number of
/// batches, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct CongestionEngine {
    config: Config,
}

impl CongestionEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
    
    pub fn config(&self) -> &Config {
        &self.config
    }
    
    /// Detect congested regions in a batch of observations
    ///
    /// Regions are numbered from 1 in the order their first vehicle appears in
    /// `observations`. A batch without any cluster of `min_cluster_size`
    /// vehicles yields no regions.
    ///
    /// Observations are expected to have passed
    /// [`CongestionRequest::validate`](crate::data::CongestionRequest::validate).
    /// Out-of-range coordinates or speeds are not checked here and produce
    /// meaningless centroids, boundaries and levels.
    pub fn detect(&self, observations: &[VehicleObservation]) -> Vec<CongestionRegion> {
        let clusters = find_density_clusters(
            observations,
            self.config.radius_meters,
            self.config.min_cluster_size,
        );
        
        let thresholds = Thresholds::from(&self.config);
        
        // Clustering is complete before any cluster is summarized
        let summaries: Vec<ClusterSummary> = clusters
            .par_iter()
            .filter_map(|cluster| summarize(cluster, observations, &thresholds))
            .collect();
        
        summaries
            .into_iter()
            .enumerate()
            .map(|(index, summary)| {
                let region_id = index as u32 + 1;
                log::debug!(
                    "Region {}: {} vehicles, average speed {:?}, level {}",
                    region_id,
                    summary.vehicle_ids.len(),
                    summary.average_speed,
                    summary.level
                );
                CongestionRegion {
                    region_id,
                    centroid: summary.centroid,
                    boundary: summary.boundary,
                    vehicle_ids: summary.vehicle_ids,
                    congestion_level: summary.level,
                }
            })
            .collect()
    }
}

/// Centroid, boundary, speed and level of one cluster
fn summarize(
    cluster: &RawCluster,
    observations: &[VehicleObservation],
    thresholds: &Thresholds,
) -> Option<ClusterSummary> {
    let centroid = metrics::centroid(cluster.observations(observations))?;
    let average_speed = metrics::average_speed(cluster.observations(observations));
    let boundary = build_boundary(cluster.observations(observations));
    let vehicle_ids = cluster
        .observations(observations)
        .map(|observation| observation.vehicle_id.clone())
        .collect();
    let level = classify(cluster.len(), average_speed, thresholds);
    
    Some(ClusterSummary {
        centroid,
        boundary,
        vehicle_ids,
        average_speed,
        level,
    })
}

/// One-shot detection with the given configuration
pub fn detect_congestion(
    observations: &[VehicleObservation],
    config: &Config,
) -> Vec<CongestionRegion> {
    CongestionEngine::new(config.clone()).detect(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(id: &str, latitude: f64, longitude: f64, speed: f64) -> VehicleObservation {
        VehicleObservation::new(id, latitude, longitude).with_speed(speed)
    }

    #[test]
    fn test_single_cluster_with_centroid_and_level() {
        let config = Config::default().with_radius_meters(60.0);
        let observations = vec![
            obs("A", 40.0, -74.0, 5.0),
            obs("B", 40.0003, -74.0003, 6.0),
            obs("C", 40.0005, -74.0005, 7.0),
        ];

        let regions = detect_congestion(&observations, &config);

        assert_eq!(regions.len(), 1);
        let region = &regions[0];
        assert_eq!(region.region_id, 1);
        assert_eq!(region.congestion_level, CongestionLevel::Medium);
        assert!(39.999 < region.centroid.latitude && region.centroid.latitude < 40.001);
        assert!(-74.001 < region.centroid.longitude && region.centroid.longitude < -73.999);
        assert!(region.boundary.len() >= 3);
    }

    #[test]
    fn test_speedless_cluster_uses_size() {
        let observations = vec![
            VehicleObservation::new("A", 40.0, -74.0),
            VehicleObservation::new("B", 40.0001, -74.0),
            VehicleObservation::new("C", 40.0002, -74.0),
        ];

        let regions = CongestionEngine::default().detect(&observations);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].congestion_level, CongestionLevel::Medium);
    }

    #[test]
    fn test_region_ids_are_sequential() {
        let mut observations = Vec::new();
        for group in 0..3 {
            let base = 40.0 + group as f64;
            for i in 0..3 {
                observations.push(obs(&format!("g{group}v{i}"), base + i as f64 * 0.0001, -74.0, 20.0));
            }
        }
        // A stray vehicle between groups does not consume an id
        observations.insert(3, obs("stray", 45.0, -70.0, 20.0));

        let regions = CongestionEngine::default().detect(&observations);
        let ids: Vec<u32> = regions.iter().map(|r| r.region_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(regions[1].vehicle_ids[0], "g1v0");
    }
}
