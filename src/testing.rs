// Strategies for points and tolerances.
use crate::data::Point;

use proptest::prelude::*;

/// Finite points in a box around the origin.
pub fn any_point() -> impl Strategy<Value = Point<f64>> {
  (-1e6..1e6f64, -1e6..1e6f64).prop_map(Point::from)
}

/// Points on the integer grid. Every tolerance below one keeps them apart.
pub fn grid_point() -> impl Strategy<Value = Point<f64>> {
  any::<(i16, i16)>().prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// Tolerances between `1e-6` and `1`.
pub fn any_epsilon() -> impl Strategy<Value = f64> {
  (0..=6i32).prop_map(|e| 10f64.powi(-e))
}
