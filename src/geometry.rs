//! Radial layout helpers.
//!
//! Angles are in degrees with 0° pointing up and increasing clockwise, i.e. screen space with
//! `y` growing downwards.

use std::f64::consts::PI;

use crate::foundation::core::{BezPath, Point};

/// Half-angle between a petal's two control points.
pub const PETAL_SPREAD_DEG: f64 = 20.0;

/// Point at distance `r` from `center` in direction `angle_deg` (0° = up, clockwise).
pub fn polar(center: Point, r: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    Point::new(center.x + r * rad.cos(), center.y + r * rad.sin())
}

/// Control points of the petal pointing at `angle_deg`.
pub fn petal_control_points(center: Point, r: f64, angle_deg: f64) -> (Point, Point) {
    (
        polar(center, r, angle_deg - PETAL_SPREAD_DEG),
        polar(center, r, angle_deg + PETAL_SPREAD_DEG),
    )
}

/// One petal as SVG path data: a single cubic that leaves and returns to `center`.
///
/// A zero radius collapses the curve onto the center; that is not an error.
pub fn petal_path(center: Point, r: f64, angle_deg: f64) -> String {
    let (c1, c2) = petal_control_points(center, r, angle_deg);
    format!(
        "M {} {} C {} {} {} {} {} {}",
        center.x, center.y, c1.x, c1.y, c2.x, c2.y, center.x, center.y
    )
}

/// Same curve as [`petal_path`], as a kurbo path.
pub fn petal_bez_path(center: Point, r: f64, angle_deg: f64) -> BezPath {
    let (c1, c2) = petal_control_points(center, r, angle_deg);
    let mut path = BezPath::new();
    path.move_to(center);
    path.curve_to(c1, c2, center);
    path
}

/// `count` angles evenly dividing the full turn, offset by `start_deg`.
pub fn petal_angles(count: u32, start_deg: f64) -> Vec<f64> {
    let segment = 360.0 / f64::from(count.max(1));
    (0..count)
        .map(|j| segment * f64::from(j) + start_deg)
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/geometry.rs"]
mod tests;
