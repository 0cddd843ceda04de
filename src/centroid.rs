//! Centroid computation
//!
//! Pure function from a point set to its arithmetic mean position.
//! Summation is sequential left-to-right so repeated calls on identical
//! input are bit-reproducible; the accumulator is f64 to keep the mean
//! accurate at large point counts.

use crate::error::{AnimationError, AnimationResult};
use crate::model::Point;

/// Compute the coordinate-wise arithmetic mean of a point set.
///
/// Fails with `EmptyPointSet` for zero points; callers skip the marker draw
/// in that state.
pub fn centroid(points: &[Point]) -> AnimationResult<[f32; 2]> {
    if points.is_empty() {
        return Err(AnimationError::EmptyPointSet);
    }
    let mut sum = [0.0f64; 2];
    for point in points {
        sum[0] += f64::from(point.position[0]);
        sum[1] += f64::from(point.position[1]);
    }
    let n = points.len() as f64;
    Ok([(sum[0] / n) as f32, (sum[1] / n) as f32])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_empty_set_fails() {
        assert!(matches!(centroid(&[]), Err(AnimationError::EmptyPointSet)));
    }

    #[test]
    fn test_single_point_is_its_own_centroid() {
        let c = centroid(&[Point::at(3.5, -2.0)]).unwrap();
        assert_eq!(c, [3.5, -2.0]);
    }

    #[test]
    fn test_unit_square_centroid() {
        let points = [
            Point::at(0.0, 0.0),
            Point::at(2.0, 0.0),
            Point::at(2.0, 2.0),
            Point::at(0.0, 2.0),
        ];
        assert_eq!(centroid(&points).unwrap(), [1.0, 1.0]);
    }

    #[test]
    fn test_mean_within_tolerance() {
        let points: Vec<Point> = (0..1000).map(|i| Point::at(i as f32, 2.0 * i as f32)).collect();
        let c = centroid(&points).unwrap();
        assert!((c[0] - 499.5).abs() < EPSILON);
        assert!((c[1] - 999.0).abs() < EPSILON * 2.0);
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let points: Vec<Point> = (0..97)
            .map(|i| Point::at((i as f32 * 0.371).sin() * 500.0, (i as f32 * 0.913).cos() * 500.0))
            .collect();
        let a = centroid(&points).unwrap();
        let b = centroid(&points).unwrap();
        assert_eq!(a[0].to_bits(), b[0].to_bits());
        assert_eq!(a[1].to_bits(), b[1].to_bits());
    }

    #[test]
    fn test_velocity_does_not_affect_centroid() {
        let a = centroid(&[Point::at(1.0, 1.0), Point::at(3.0, 3.0)]).unwrap();
        let b = centroid(&[
            Point::at(1.0, 1.0).with_velocity(50.0, 50.0),
            Point::at(3.0, 3.0).with_velocity(-9.0, 0.0),
        ])
        .unwrap();
        assert_eq!(a, b);
    }
}
