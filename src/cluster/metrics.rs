//! Cluster statistics and metrics

use crate::data::VehicleObservation;
use crate::geo::Coordinate;

/// Arithmetic mean of member latitudes and longitudes
///
/// A planar mean, which is fine at cluster scale but wrong for clusters
/// straddling the antimeridian. Returns `None` for an empty cluster.
pub fn centroid<'a, I>(members: I) -> Option<Coordinate>
where
    I: IntoIterator<Item = &'a VehicleObservation>,
{
    let mut latitude_sum = 0.0;
    let mut longitude_sum = 0.0;
    let mut count = 0usize;
    
    for observation in members {
        latitude_sum += observation.coordinate.latitude;
        longitude_sum += observation.coordinate.longitude;
        count += 1;
    }
    
    if count == 0 {
        return None;
    }
    
    Some(Coordinate::new(
        latitude_sum / count as f64,
        longitude_sum / count as f64,
    ))
}

/// Mean speed over the members that report one
pub fn average_speed<'a, I>(members: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a VehicleObservation>,
{
    let (sum, count) = members
        .into_iter()
        .filter_map(|observation| observation.speed_kph)
        .fold((0.0, 0usize), |(sum, count), speed| (sum + speed, count + 1));
    
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
