//! Cluster analysis module

pub mod detection;
pub mod metrics;

pub use detection::find_density_clusters;

use crate::data::VehicleObservation;

/// A connected group of observations, as indices into the input batch
///
/// Members are kept in first-discovery order. A cluster is produced once by
/// the detector and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCluster {
    members: Vec<usize>,
}

impl RawCluster {
    pub(crate) fn new(members: Vec<usize>) -> Self {
        Self { members }
    }
    
    /// Indices of the member observations
    pub fn members(&self) -> &[usize] {
        &self.members
    }
    
    pub fn len(&self) -> usize {
        self.members.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    
    /// Resolve the member indices against the batch they were computed from
    pub fn observations<'a>(
        &'a self,
        observations: &'a [VehicleObservation],
    ) -> impl Iterator<Item = &'a VehicleObservation> + 'a {
        self.members.iter().map(move |&index| &observations[index])
    }
}
