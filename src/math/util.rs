use super::{Point2d, Vector2d};
use cgmath::prelude::*;

/// Computes the displacement of a point from an origin, and its length.
///
/// # Parameters
/// * `point` - The point being measured
/// * `origin` - The point the displacement is measured from
///
/// # Returns
/// A tuple containing `point - origin` and its Euclidean norm.
#[inline(always)]
pub fn displacement(point: Point2d, origin: Point2d) -> (Vector2d, f64) {
    let delta = point - origin;
    (delta, delta.magnitude())
}
