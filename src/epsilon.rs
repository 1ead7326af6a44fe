use crate::data::Point;
use crate::{Error, Scalar};

/// Tolerance used when none (or an unusable one) is given.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Tolerance context shared by every predicate in this crate.
///
/// Values whose rounded difference is zero are treated as equal. Rounding
/// snaps a value to the nearest multiple of the tolerance, so changing the
/// tolerance changes the behavior of every predicate at once.
///
/// The context is a plain value. Concurrent computations that need different
/// tolerances each own a copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epsilon<T = f64> {
  eps: T,
}

impl<T: Scalar> Default for Epsilon<T> {
  fn default() -> Self {
    Epsilon {
      eps: T::default_epsilon(),
    }
  }
}

fn is_valid<T: Scalar>(eps: T) -> bool {
  eps.is_finite() && eps > T::zero()
}

impl<T: Scalar> Epsilon<T> {
  /// Create a context with the given tolerance.
  ///
  /// A NaN, infinite, zero or negative tolerance is replaced with the
  /// default of `1e-10`. Use [`Epsilon::try_new`] to reject such values
  /// instead.
  pub fn new(eps: T) -> Epsilon<T> {
    Self::try_new(eps).unwrap_or_else(|_| {
      tracing::debug!(requested = ?eps, "unusable tolerance, using default");
      Epsilon::default()
    })
  }

  /// # Errors
  ///
  /// Returns [`Error::InvalidTolerance`] unless `eps` is finite and positive.
  pub fn try_new(eps: T) -> Result<Epsilon<T>, Error> {
    if is_valid(eps) {
      Ok(Epsilon { eps })
    } else {
      Err(Error::InvalidTolerance)
    }
  }

  pub fn epsilon(&self) -> T {
    self.eps
  }

  /// Replace the tolerance and return the one now in force.
  ///
  /// Values that are not finite and positive are ignored; the current
  /// tolerance is returned unchanged.
  pub fn set_epsilon(&mut self, eps: T) -> T {
    if is_valid(eps) {
      self.eps = eps;
    } else {
      tracing::trace!(requested = ?eps, current = ?self.eps, "ignoring tolerance");
    }
    self.eps
  }

  /// Snap `v` to the nearest multiple of the tolerance. Ties round away
  /// from zero.
  ///
  /// For very small tolerances the scaling itself can lose precision. This
  /// is inherent to the method and not corrected for.
  pub fn round(&self, v: T) -> T {
    let factor = T::one() / self.eps;
    (v * factor).round() / factor
  }

  /// Rounded difference `v2 - v1`. Positive when `v2` is larger than `v1`
  /// by more than the tolerance.
  ///
  /// Identical values, including equal infinities, have a delta of zero.
  pub fn delta(&self, v1: T, v2: T) -> T {
    if v1 == v2 {
      T::zero()
    } else {
      self.round(v2 - v1)
    }
  }

  pub fn equal(&self, v1: T, v2: T) -> bool {
    self.delta(v1, v2) == T::zero()
  }

  pub fn delta_x(&self, p1: &Point<T>, p2: &Point<T>) -> T {
    self.delta(p1[0], p2[0])
  }

  pub fn delta_y(&self, p1: &Point<T>, p2: &Point<T>) -> T {
    self.delta(p1[1], p2[1])
  }

  /// Slope of the line through `p1` and `p2` computed from rounded deltas.
  ///
  /// Vertical lines have an infinite slope whose sign follows the direction
  /// of travel. Identical points give NaN.
  pub fn slope(&self, p1: &Point<T>, p2: &Point<T>) -> T {
    self.delta_y(p1, p2) / self.delta_x(p1, p2)
  }

  pub fn slopes_delta(&self, a0: &Point<T>, a1: &Point<T>, b0: &Point<T>, b1: &Point<T>) -> T {
    self.delta(self.slope(a0, a1), self.slope(b0, b1))
  }

  pub fn slopes_equal(&self, a0: &Point<T>, a1: &Point<T>, b0: &Point<T>, b1: &Point<T>) -> bool {
    self.slopes_delta(a0, a1, b0, b1) == T::zero()
  }
}
