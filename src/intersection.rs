use std::convert::TryFrom;

use crate::data::{LineSegment, Point};
use crate::{Epsilon, Error, Scalar};

/// Position of a point relative to a segment's start and end, measured along
/// the segment's dominant axis (X, or Y for vertical segments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum Along {
  BeforeStart = -2,
  AtStart = -1,
  Between = 0,
  AtEnd = 1,
  AfterEnd = 2,
}

impl Along {
  pub fn code(self) -> i8 {
    self as i8
  }

  /// True for `AtStart`, `Between` and `AtEnd`.
  pub fn is_on_segment(self) -> bool {
    matches!(self, Along::AtStart | Along::Between | Along::AtEnd)
  }

  pub fn is_endpoint(self) -> bool {
    matches!(self, Along::AtStart | Along::AtEnd)
  }
}

impl TryFrom<i8> for Along {
  type Error = Error;
  fn try_from(code: i8) -> Result<Along, Error> {
    match code {
      -2 => Ok(Along::BeforeStart),
      -1 => Ok(Along::AtStart),
      0 => Ok(Along::Between),
      1 => Ok(Along::AtEnd),
      2 => Ok(Along::AfterEnd),
      _ => Err(Error::InvalidAlongCode(code)),
    }
  }
}

impl From<Along> for i8 {
  fn from(along: Along) -> i8 {
    along.code()
  }
}

/// Where two supporting lines cross, and how that point sits on each of the
/// two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection<T = f64> {
  pub point: Point<T>,
  pub along_a: Along,
  pub along_b: Along,
}

impl<T> LineIntersection<T> {
  /// The crossing touches both segments, endpoints included.
  pub fn is_on_both(&self) -> bool {
    self.along_a.is_on_segment() && self.along_b.is_on_segment()
  }
}

impl<T: Scalar> Epsilon<T> {
  /// Intersect the infinite lines through `a0 -> a1` and `b0 -> b1`.
  ///
  /// Returns `None` when the lines have equal slopes, which covers both
  /// parallel and coincident lines. The point is not clamped to either
  /// segment; `along_a` and `along_b` classify it instead.
  pub fn lines_intersect(
    &self,
    a0: &Point<T>,
    a1: &Point<T>,
    b0: &Point<T>,
    b1: &Point<T>,
  ) -> Option<LineIntersection<T>> {
    if self.slopes_equal(a0, a1, b0, b1) {
      tracing::trace!(?a0, ?a1, ?b0, ?b1, "equal slopes, no unique intersection");
      return None;
    }
    // Verticals running in opposite directions have slopes of opposite sign
    // but no crossing.
    if self.cross(a0, a1, b0, b1) == T::zero() {
      tracing::trace!(?a0, ?a1, ?b0, ?b1, "zero cross product, no unique intersection");
      return None;
    }

    let point = self.intersection_point(a0, a1, b0, b1);
    Some(LineIntersection {
      point,
      along_a: self.intersection_along(&point, a0, a1),
      along_b: self.intersection_along(&point, b0, b1),
    })
  }

  pub fn segments_intersect(
    &self,
    a: &LineSegment<T>,
    b: &LineSegment<T>,
  ) -> Option<LineIntersection<T>> {
    self.lines_intersect(&a.start, &a.end, &b.start, &b.end)
  }

  fn cross(&self, a0: &Point<T>, a1: &Point<T>, b0: &Point<T>, b1: &Point<T>) -> T {
    self.delta_x(a0, a1) * self.delta_y(b0, b1) - self.delta_y(a0, a1) * self.delta_x(b0, b1)
  }

  /// Crossing point of the infinite lines through `a0 -> a1` and `b0 -> b1`.
  ///
  /// The lines must not be parallel; otherwise the result is not finite.
  pub fn intersection_point(
    &self,
    a0: &Point<T>,
    a1: &Point<T>,
    b0: &Point<T>,
    b1: &Point<T>,
  ) -> Point<T> {
    let adx = self.delta_x(a0, a1);
    let ady = self.delta_y(a0, a1);
    let bdx = self.delta_x(b0, b1);
    let bdy = self.delta_y(b0, b1);

    let axb = adx * bdy - ady * bdx;

    let dx = self.delta_x(b0, a0);
    let dy = self.delta_y(b0, a0);

    let a = (bdx * dy - bdy * dx) / axb;

    Point::new([a0[0] + a * adx, a0[1] + a * ady])
  }

  /// Classify `pt` against the segment from `start` to `end`.
  pub fn intersection_along(&self, pt: &Point<T>, start: &Point<T>, end: &Point<T>) -> Along {
    let axis = if self.equal(start[0], end[0]) { 1 } else { 0 };
    let (p, l, r) = (pt[axis], start[axis], end[axis]);
    let zero = T::zero();

    if self.delta(p, l) > zero {
      Along::BeforeStart
    } else if self.equal(p, l) {
      Along::AtStart
    } else if self.delta(p, l) < zero && self.delta(p, r) > zero {
      Along::Between
    } else if self.equal(p, r) {
      Along::AtEnd
    } else {
      Along::AfterEnd
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
