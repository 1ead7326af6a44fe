//! Tolerance-aware predicates for 2D computational geometry.
//!
//! Every comparison goes through a single [`Epsilon`] context which snaps
//! differences to a grid of multiples of the tolerance. Sweep-line event
//! ordering, segment splitting and vertex merging built on top of these
//! predicates therefore all agree on when two values coincide.
//!
//! ```rust
//! # use epsilon2d::Epsilon;
//! # use epsilon2d::data::Point;
//! let eps = Epsilon::new(1e-10);
//! let hit = eps
//!   .lines_intersect(
//!     &Point::new([0.0, 0.0]),
//!     &Point::new([2.0, 2.0]),
//!     &Point::new([0.0, 2.0]),
//!     &Point::new([2.0, 0.0]),
//!   )
//!   .unwrap();
//! assert_eq!(hit.point, Point::new([1.0, 1.0]));
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use num_traits::Float;
use std::cmp::Ordering;

pub mod data;
mod epsilon;
mod intersection;
mod predicates;

pub use epsilon::{Epsilon, DEFAULT_EPSILON};
pub use intersection::{Along, LineIntersection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The tolerance was NaN, infinite, zero or negative.
  InvalidTolerance,
  /// An along-code outside of `-2..=2`.
  InvalidAlongCode(i8),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidTolerance => write!(f, "Tolerance must be a finite, positive number"),
      Error::InvalidAlongCode(code) => write!(f, "Invalid along-code: {}", code),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

/// Floating point types an [`Epsilon`] context can operate on.
pub trait Scalar: Float + TotalOrd + std::fmt::Debug {
  fn default_epsilon() -> Self;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl Scalar for $ty {
        fn default_epsilon() -> Self {
          DEFAULT_EPSILON as $ty
        }
      }
    )*
  };
}

floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_display() {
    assert_eq!(
      Error::InvalidTolerance.to_string(),
      "Tolerance must be a finite, positive number"
    );
    assert_eq!(Error::InvalidAlongCode(7).to_string(), "Invalid along-code: 7");
  }

  #[test]
  fn default_epsilon_per_type() {
    assert_eq!(f64::default_epsilon(), 1e-10);
    assert_eq!(f32::default_epsilon(), 1e-10_f32);
  }

  #[test]
  fn total_cmp_orders_nan_and_signed_zero() {
    assert_eq!(TotalOrd::total_cmp(&-0.0_f64, &0.0), Ordering::Less);
    assert_eq!(TotalOrd::total_cmp(&1.0_f32, &f32::NAN), Ordering::Less);
    assert_eq!(TotalOrd::total_cmp(&2.0_f64, &2.0), Ordering::Equal);
  }
}
