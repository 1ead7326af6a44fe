mod scenarios {
  use epsilon2d::data::*;
  use epsilon2d::*;

  use claims::{assert_none, assert_some};
  use std::cmp::Ordering;

  fn pt(x: f64, y: f64) -> Point<f64> {
    Point::new([x, y])
  }

  #[test]
  fn equal_slopes_do_not_intersect() {
    let eps = Epsilon::default();
    assert_none!(eps.lines_intersect(&pt(0.0, 0.0), &pt(1.0, 1.0), &pt(0.0, 1.0), &pt(1.0, 2.0)));
  }

  #[test]
  fn diagonal_cross() {
    let eps = Epsilon::default();
    let a = LineSegment::from((0.0, 0.0)..(2.0, 2.0));
    let b = LineSegment::from((0.0, 2.0)..(2.0, 0.0));
    let hit = assert_some!(eps.segments_intersect(&a, &b));
    assert_eq!(hit.point, pt(1.0, 1.0));
    assert_eq!((hit.along_a.code(), hit.along_b.code()), (0, 0));
  }

  #[test]
  fn t_intersection() {
    let eps = Epsilon::default();
    let hit = assert_some!(eps.lines_intersect(
      &pt(0.0, 0.0),
      &pt(2.0, 0.0),
      &pt(1.0, 0.0),
      &pt(1.0, 2.0)
    ));
    assert_eq!(hit.point, pt(1.0, 0.0));
    assert_eq!(hit.along_a, Along::Between);
    assert_eq!(hit.along_b, Along::AtStart);
  }

  #[test]
  fn coarser_tolerance_merges_near_duplicates() {
    let mut eps = Epsilon::new(1e-9);
    let a = pt(10.0, -4.0);
    let b = pt(10.0 + 2e-5, -4.0 - 4e-5);
    assert!(!eps.points_same(&a, &b));
    assert_ne!(eps.points_compare(&a, &b), Ordering::Equal);

    assert_eq!(eps.set_epsilon(1e-3), 1e-3);
    assert!(eps.points_same(&a, &b));
    assert!(eps.points_collinear(&a, &b, &pt(50.0, 3.0)));
  }

  #[test]
  fn invalid_configuration_is_normalized() {
    let mut eps = Epsilon::new(f64::NAN);
    assert_eq!(eps.epsilon(), DEFAULT_EPSILON);
    assert_eq!(eps.set_epsilon(f64::NEG_INFINITY), DEFAULT_EPSILON);
    assert_eq!(Epsilon::try_new(-1.0), Err(Error::InvalidTolerance));
  }

  #[test]
  fn contexts_are_independent() {
    let fine = Epsilon::new(1e-10);
    let mut coarse = fine;
    coarse.set_epsilon(0.1);
    assert!(!fine.equal(1.0, 1.01));
    assert!(coarse.equal(1.0, 1.01));
  }

  #[test]
  fn sweep_order() {
    let eps = Epsilon::default();
    let mut pts = vec![pt(3.0, 1.0), pt(0.0, 0.0), pt(0.0, 2.0), pt(1.0, -1.0)];
    eps.sort_points(&mut pts);
    assert_eq!(pts, vec![pt(0.0, 2.0), pt(0.0, 0.0), pt(1.0, -1.0), pt(3.0, 1.0)]);
  }
}
