use std::ops::Range;

use super::Point;

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// A directed segment from `start` to `end`.
///
/// Unlike an undirected segment, the order of the endpoints is kept as given:
/// the along-codes reported by [`Epsilon::segments_intersect`](crate::Epsilon::segments_intersect)
/// are relative to `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T = f64> {
  pub start: Point<T>,
  pub end: Point<T>,
}

impl<T> LineSegment<T> {
  pub const fn new(start: Point<T>, end: Point<T>) -> LineSegment<T> {
    LineSegment { start, end }
  }
}

impl<T> From<Range<Point<T>>> for LineSegment<T> {
  fn from(range: Range<Point<T>>) -> LineSegment<T> {
    LineSegment::new(range.start, range.end)
  }
}

impl<T> From<Range<(T, T)>> for LineSegment<T> {
  fn from(range: Range<(T, T)>) -> LineSegment<T> {
    LineSegment::new(range.start.into(), range.end.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
