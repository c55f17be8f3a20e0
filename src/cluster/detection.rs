//! Cluster detection algorithms

use rayon::prelude::*;

use crate::cluster::RawCluster;
use crate::data::VehicleObservation;
use crate::geo::haversine_distance;

/// Batch size from which neighbour queries are spread over the thread pool
const PARALLEL_NEIGHBOR_THRESHOLD: usize = 1000;

/// Group observations into single-linkage clusters
///
/// Two observations are linked when they lie within `radius_meters` of each
/// other; a cluster is the transitive closure of that relation. Clusters are
/// returned in the order their first member appears in `observations`, and
/// those smaller than `min_size` are dropped.
pub fn find_density_clusters(
    observations: &[VehicleObservation],
    radius_meters: f64,
    min_size: usize,
) -> Vec<RawCluster> {
    log::debug!(
        "Clustering {} observations with radius {} m",
        observations.len(),
        radius_meters
    );
    
    let mut visited = vec![false; observations.len()];
    let mut clusters = Vec::new();
    let mut stack = Vec::new();
    
    for seed in 0..observations.len() {
        if visited[seed] {
            continue;
        }
        
        visited[seed] = true;
        let mut members = vec![seed];
        
        // Neighbours are claimed as soon as they are found so they never
        // seed a cluster of their own
        for neighbor in find_neighbors(seed, observations, &visited, radius_meters) {
            visited[neighbor] = true;
            stack.push(neighbor);
        }
        
        while let Some(current) = stack.pop() {
            members.push(current);
            for neighbor in find_neighbors(current, observations, &visited, radius_meters) {
                visited[neighbor] = true;
                stack.push(neighbor);
            }
        }
        
        if members.len() >= min_size {
            clusters.push(RawCluster::new(members));
        } else {
            log::trace!("Discarding group of {} below minimum size {}", members.len(), min_size);
        }
    }
    
    log::debug!("Found {} clusters with {} or more members", clusters.len(), min_size);
    
    clusters
}

/// Unvisited observations within `radius_meters` of `source`, in index order
pub fn find_neighbors(
    source: usize,
    observations: &[VehicleObservation],
    visited: &[bool],
    radius_meters: f64,
) -> Vec<usize> {
    // For small batches, use sequential processing
    if observations.len() < PARALLEL_NEIGHBOR_THRESHOLD {
        return find_neighbors_sequential(source, observations, visited, radius_meters);
    }
    
    let origin = &observations[source].coordinate;
    observations
        .par_iter()
        .enumerate()
        .filter(|&(index, candidate)| {
            index != source
                && !visited[index]
                && haversine_distance(origin, &candidate.coordinate) <= radius_meters
        })
        .map(|(index, _)| index)
        .collect()
}

/// Sequential version for smaller batches
fn find_neighbors_sequential(
    source: usize,
    observations: &[VehicleObservation],
    visited: &[bool],
    radius_meters: f64,
) -> Vec<usize> {
    let origin = &observations[source].coordinate;
    observations
        .iter()
        .enumerate()
        .filter(|&(index, candidate)| {
            index != source
                && !visited[index]
                && haversine_distance(origin, &candidate.coordinate) <= radius_meters
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(id: &str, latitude: f64, longitude: f64) -> VehicleObservation {
        VehicleObservation::new(id, latitude, longitude)
    }

    #[test]
    fn test_chain_is_single_cluster() {
        // Each step is ~33 m north, so the ends are ~100 m apart but linked
        let observations: Vec<_> = (0..4)
            .map(|i| obs(&format!("v{i}"), 40.0 + i as f64 * 0.0003, -74.0))
            .collect();

        let clusters = find_density_clusters(&observations, 50.0, 3);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 4);
    }

    #[test]
    fn test_members_in_discovery_order() {
        let observations = vec![
            obs("a", 40.0, -74.0),
            obs("far", 45.0, -70.0),
            obs("b", 40.0002, -74.0),
            obs("c", 40.0004, -74.0),
        ];

        let clusters = find_density_clusters(&observations, 50.0, 1);
        assert_eq!(clusters.len(), 2);
        // Seed first, then last-found neighbour popped from the work stack
        assert_eq!(clusters[0].members(), &[0, 3, 2]);
        assert_eq!(clusters[1].members(), &[1]);
    }

    #[test]
    fn test_small_groups_are_dropped() {
        let observations = vec![
            obs("a", 40.0, -74.0),
            obs("b", 40.0, -74.0004),
            obs("c", 41.0, -75.0),
        ];

        assert!(find_density_clusters(&observations, 60.0, 3).is_empty());
        assert_eq!(find_density_clusters(&observations, 60.0, 2).len(), 1);
    }

    #[test]
    fn test_radius_is_inclusive() {
        let observations = vec![obs("a", 0.0, 0.0), obs("b", 0.0003, 0.0)];
        let gap = haversine_distance(&observations[0].coordinate, &observations[1].coordinate);

        assert_eq!(find_density_clusters(&observations, gap, 2).len(), 1);
        assert!(find_density_clusters(&observations, gap * 0.999, 2).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(find_density_clusters(&[], 50.0, 1).is_empty());
    }

    #[test]
    fn test_parallel_neighbors_match_sequential() {
        // Large enough to take the parallel path
        let observations: Vec<_> = (0..PARALLEL_NEIGHBOR_THRESHOLD + 50)
            .map(|i| obs(&format!("v{i}"), 40.0 + (i % 40) as f64 * 0.0002, -74.0 + (i / 40) as f64 * 0.0002))
            .collect();
        let visited = vec![false; observations.len()];

        for source in [0, 17, 500, observations.len() - 1] {
            assert_eq!(
                find_neighbors(source, &observations, &visited, 50.0),
                find_neighbors_sequential(source, &observations, &visited, 50.0)
            );
        }
    }

    #[test]
    fn test_clusters_are_disjoint() {
        let observations: Vec<_> = (0..60)
            .map(|i| obs(&format!("v{i}"), 40.0 + (i % 7) as f64 * 0.0004, -74.0 + (i / 7) as f64 * 0.0011))
            .collect();

        let clusters = find_density_clusters(&observations, 50.0, 1);
        let mut seen = vec![false; observations.len()];
        for cluster in &clusters {
            for &member in cluster.members() {
                assert!(!seen[member], "index {member} in two clusters");
                seen[member] = true;
            }
        }
        // With min_size 1 every observation lands somewhere
        assert!(seen.iter().all(|&s| s));
    }
}
