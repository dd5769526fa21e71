use super::*;

#[test]
fn test_symmetric_values_hit_midpoint() {
  let a = Corner::new(Vec3::ZERO, -1.0);
  let b = Corner::new(Vec3::X, 1.0);

  assert_eq!(interpolate(a, b), Vec3::new(0.5, 0.0, 0.0));
}

#[test]
fn test_order_of_endpoints_does_not_matter() {
  let a = Corner::new(Vec3::new(0.0, 1.0, 0.0), -0.25);
  let b = Corner::new(Vec3::new(0.0, 2.0, 0.0), 0.75);

  assert_eq!(interpolate(a, b), interpolate(b, a));
  assert_eq!(interpolate(a, b), Vec3::new(0.0, 1.25, 0.0));
}

#[test]
fn test_oriented_swaps_inside_first() {
  let outside = Corner::new(Vec3::ZERO, -2.0);
  let inside = Corner::new(Vec3::ONE, 3.0);

  assert_eq!(oriented(inside, outside), (outside, inside));
  assert_eq!(oriented(outside, inside), (outside, inside));
}

#[test]
fn test_oriented_zero_is_outside() {
  let zero = Corner::new(Vec3::ZERO, 0.0);
  let inside = Corner::new(Vec3::ONE, 1.0);

  assert_eq!(oriented(zero, inside), (zero, inside));
  // Zero at the outside endpoint puts the crossing exactly on it.
  assert_eq!(interpolate(inside, zero), Vec3::ZERO);
}

#[test]
fn test_equal_values_fall_back_to_midpoint() {
  let a = Corner::new(Vec3::ZERO, 0.5);
  let b = Corner::new(Vec3::new(0.0, 0.0, 2.0), 0.5);

  let point = interpolate(a, b);
  assert!(point.is_finite());
  assert_eq!(point, Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_same_sign_values_stay_on_edge() {
  // Both outside: the raw t would be negative.
  let a = Corner::new(Vec3::ZERO, -1.0);
  let b = Corner::new(Vec3::X, -3.0);

  let point = interpolate(a, b);
  assert!(point.x >= 0.0 && point.x <= 1.0);
}

#[test]
fn test_asymmetric_values() {
  let a = Corner::new(Vec3::ZERO, -3.0);
  let b = Corner::new(Vec3::new(4.0, 0.0, 0.0), 1.0);

  assert_eq!(interpolate(a, b), Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn test_nan_corner_stays_finite() {
  let broken = Corner::new(Vec3::ZERO, f32::NAN);
  let inside = Corner::new(Vec3::new(0.0, 2.0, 0.0), 1.0);

  // NaN counts as outside, and the undefined crossing falls back to the midpoint.
  assert_eq!(interpolate(broken, inside), Vec3::new(0.0, 1.0, 0.0));
  assert_eq!(interpolate(inside, broken), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_infinite_corner_stays_on_edge() {
  let far = Corner::new(Vec3::ZERO, f32::NEG_INFINITY);
  let inside = Corner::new(Vec3::X, f32::INFINITY);

  let point = interpolate(far, inside);
  assert!(point.is_finite());
  assert!(point.x >= 0.0 && point.x <= 1.0);
}
