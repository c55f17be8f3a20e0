//! Boundary polygons for congested regions

pub mod hull;

use std::cmp::Ordering;

use itertools::Itertools;

use crate::data::VehicleObservation;
use crate::geo::Coordinate;

/// A coordinate projected onto the (longitude, latitude) plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    
    fn from_coordinate(coordinate: &Coordinate) -> Self {
        Self::new(coordinate.longitude, coordinate.latitude)
    }
    
    fn to_coordinate(self) -> Coordinate {
        Coordinate::new(self.y, self.x)
    }
}

/// Lexicographic order on x, then y
pub(crate) fn compare_points(a: &PlanarPoint, b: &PlanarPoint) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Polygon enclosing the given observations, implicitly closed
///
/// One distinct position yields a single vertex. Two distinct positions yield
/// the four corners of their bounding box so renderers always get a polygon;
/// when the positions share a latitude or longitude the box has zero area.
/// Three or more yield the strictly convex hull in counter-clockwise order,
/// starting from the lowest-leftmost position.
pub fn build_boundary<'a, I>(observations: I) -> Vec<Coordinate>
where
    I: IntoIterator<Item = &'a VehicleObservation>,
{
    let points: Vec<PlanarPoint> = observations
        .into_iter()
        .map(|observation| PlanarPoint::from_coordinate(&observation.coordinate))
        .sorted_by(compare_points)
        .dedup()
        .collect();
    
    match points.as_slice() {
        [] => Vec::new(),
        [only] => vec![only.to_coordinate()],
        [first, second] => vec![
            Coordinate::new(first.y, first.x),
            Coordinate::new(second.y, first.x),
            Coordinate::new(second.y, second.x),
            Coordinate::new(first.y, second.x),
        ],
        _ => hull::monotone_chain(&points)
            .into_iter()
            .map(PlanarPoint::to_coordinate)
            .collect(),
    }
}
