//! Planar convex hull

use crate::boundary::PlanarPoint;

/// Z component of (a - origin) x (b - origin); positive for a left turn
pub fn cross(origin: &PlanarPoint, a: &PlanarPoint, b: &PlanarPoint) -> f64 {
    (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
}

/// Andrew's monotone chain over points already sorted and deduplicated
///
/// Collinear points are dropped, so consecutive hull vertices never lie on
/// one line. The hull is counter-clockwise and not closed.
pub fn monotone_chain(sorted: &[PlanarPoint]) -> Vec<PlanarPoint> {
    if sorted.len() < 3 {
        return sorted.to_vec();
    }
    
    let mut lower: Vec<PlanarPoint> = Vec::with_capacity(sorted.len());
    for point in sorted {
        while lower.len() >= 2 && cross(&lower[lower.len() - 2], &lower[lower.len() - 1], point) <= 0.0 {
            lower.pop();
        }
        lower.push(*point);
    }
    
    let mut upper: Vec<PlanarPoint> = Vec::with_capacity(sorted.len());
    for point in sorted.iter().rev() {
        while upper.len() >= 2 && cross(&upper[upper.len() - 2], &upper[upper.len() - 1], point) <= 0.0 {
            upper.pop();
        }
        upper.push(*point);
    }
    
    // Each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> PlanarPoint {
        PlanarPoint::new(x, y)
    }

    #[test]
    fn test_cross_sign() {
        assert!(cross(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0)) > 0.0);
        assert!(cross(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, -1.0)) < 0.0);
        assert_eq!(cross(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_triangle_is_counter_clockwise() {
        let hull = monotone_chain(&[p(0.0, 0.0), p(0.0, 2.0), p(1.0, 1.0), p(2.0, 0.0)]);
        assert_eq!(hull, vec![p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0)]);
    }

    #[test]
    fn test_collinear_edge_points_dropped() {
        let hull = monotone_chain(&[
            p(0.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(2.0, 0.0),
            p(2.0, 1.0),
        ]);
        assert_eq!(hull, vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(0.0, 1.0)]);
    }
}
