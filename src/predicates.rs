use std::cmp::Ordering;

use crate::data::Point;
use crate::{Epsilon, Scalar, TotalOrd};

impl<T: Scalar> Epsilon<T> {
  pub fn points_same_x(&self, p1: &Point<T>, p2: &Point<T>) -> bool {
    self.equal(p1[0], p2[0])
  }

  pub fn points_same_y(&self, p1: &Point<T>, p2: &Point<T>) -> bool {
    self.equal(p1[1], p2[1])
  }

  pub fn points_same(&self, p1: &Point<T>, p2: &Point<T>) -> bool {
    self.points_same_x(p1, p2) && self.points_same_y(p1, p2)
  }

  /// Canonical sweep order of two points.
  ///
  /// Points are ordered by ascending X. When the X coordinates coincide the
  /// point with the larger Y comes first. Returns `Equal` only for points
  /// that are [`points_same`](Epsilon::points_same).
  ///
  /// ```rust
  /// # use epsilon2d::Epsilon;
  /// # use epsilon2d::data::Point;
  /// # use std::cmp::Ordering;
  /// let eps = Epsilon::default();
  /// let low = Point::new([1.0, 0.0]);
  /// let high = Point::new([1.0, 5.0]);
  /// assert_eq!(eps.points_compare(&high, &low), Ordering::Less);
  /// assert_eq!(eps.points_compare(&Point::new([0.0, 0.0]), &high), Ordering::Less);
  /// ```
  pub fn points_compare(&self, p1: &Point<T>, p2: &Point<T>) -> Ordering {
    if self.points_same_x(p1, p2) {
      if self.points_same_y(p1, p2) {
        Ordering::Equal
      } else if self.delta_y(p1, p2) < T::zero() {
        Ordering::Less
      } else {
        Ordering::Greater
      }
    } else if self.delta_x(p1, p2) > T::zero() {
      Ordering::Less
    } else {
      Ordering::Greater
    }
  }

  /// Sort points into sweep order: ascending snapped X, then descending
  /// snapped Y.
  ///
  /// Tolerance equality is not transitive, so the sort keys on the
  /// coordinates rounded to the tolerance grid instead of calling
  /// [`points_compare`](Epsilon::points_compare). The two orders agree
  /// except for points whose coordinates differ by less than the tolerance.
  pub fn sort_points(&self, points: &mut [Point<T>]) {
    points.sort_by(|a, b| {
      let (ax, ay) = self.snapped(a);
      let (bx, by) = self.snapped(b);
      TotalOrd::total_cmp(&ax, &bx).then_with(|| TotalOrd::total_cmp(&by, &ay))
    });
  }

  // Adding zero turns -0.0 into 0.0 so both land on the same key.
  fn snapped(&self, p: &Point<T>) -> (T, T) {
    (
      self.round(p[0]) + T::zero(),
      self.round(p[1]) + T::zero(),
    )
  }

  /// Does walking `p1 -> p2 -> p3` follow a straight line?
  ///
  /// Any two coinciding points make the triple collinear.
  pub fn points_collinear(&self, p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> bool {
    self.points_same(p1, p2)
      || self.points_same(p2, p3)
      || self.points_same(p1, p3)
      || self.slopes_equal(p1, p2, p2, p3)
  }

  /// Is `p` on or above the line directed from `left` to `right`?
  pub fn point_above_or_on_line(&self, p: &Point<T>, left: &Point<T>, right: &Point<T>) -> bool {
    self.slope(left, right) <= self.slope(left, p)
  }

  /// Does `p` lie strictly inside the segment from `left` to `right`?
  ///
  /// Both coordinates of `p` must be strictly greater than those of `left`
  /// and strictly smaller than those of `right`. Only segments rising to the
  /// right can therefore report `true`; horizontal, vertical and falling
  /// segments never do. `p == left`, `p == right` and `left == right` are
  /// all `false`.
  pub fn point_between(&self, p: &Point<T>, left: &Point<T>, right: &Point<T>) -> bool {
    let zero = T::zero();
    self.slopes_equal(left, right, left, p)
      && !self.points_same(left, right)
      && (self.delta_x(left, p) > zero && self.delta_y(left, p) > zero)
      && (self.delta_x(right, p) < zero && self.delta_y(right, p) < zero)
  }
}
