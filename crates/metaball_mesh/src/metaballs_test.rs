use super::*;

#[test]
fn test_empty_field_is_outside() {
  let field = MetaballField::new(1.0);
  assert_eq!(field.value(Vec3::ZERO), -1.0);
  assert_eq!(field.value(Vec3::splat(100.0)), -1.0);
}

#[test]
fn test_single_ball_surface_at_radius() {
  let field = MetaballField::new(1.5).with_ball(Metaball::new(Vec3::ZERO));

  assert!(field.value(Vec3::X * 1.5).abs() < 1e-6);
  assert!(field.value(Vec3::Y * 1.0) > 0.0);
  assert!(field.value(Vec3::Z * 2.0) < 0.0);
}

#[test]
fn test_value_at_centre_is_finite() {
  let field = MetaballField::new(1.0).with_ball(Metaball::new(Vec3::ZERO));
  let value = field.value(Vec3::ZERO);

  assert!(value.is_finite());
  assert!(value > 0.0);
}

#[test]
fn test_balls_fuse() {
  // Two balls 2.2 apart: the midpoint is outside either alone but inside both.
  let lone = MetaballField::new(1.0).with_ball(Metaball::new(Vec3::new(-1.1, 0.0, 0.0)));
  let pair = lone
    .clone()
    .with_ball(Metaball::new(Vec3::new(1.1, 0.0, 0.0)));

  assert!(lone.value(Vec3::ZERO) < 0.0);
  assert!(pair.value(Vec3::ZERO) > 0.0);
}

#[test]
fn test_default_has_three_balls() {
  let field = MetaballField::default();
  assert_eq!(field.balls.len(), 3);
  assert_eq!(field.radius, 1.0);
  for ball in &field.balls {
    assert!(field.value(ball.center) > 0.0);
  }
}

#[test]
fn test_advance_moves_along_drift() {
  let mut field = MetaballField::default();
  let before: Vec<_> = field.balls.iter().map(|b| b.center).collect();

  let t = std::f32::consts::FRAC_PI_2; // sin = 1
  field.advance(t);

  for (ball, start) in field.balls.iter().zip(&before) {
    let moved = ball.center - *start;
    let expected = ball.drift / DRIFT_DIVISOR;
    assert!(
      (moved - expected).length() < 1e-6,
      "moved {:?}, expected {:?}",
      moved,
      expected
    );
  }
}

#[test]
fn test_advance_at_zero_is_still() {
  let mut field = MetaballField::default();
  let before = field.clone();
  field.advance(0.0);
  assert_eq!(field, before);
}

#[test]
fn test_frozen_ignores_advance() {
  let mut field = MetaballField::default().frozen();
  let before = field.clone();
  field.advance(1.0);
  assert_eq!(field, before);
}

#[test]
fn test_set_center() {
  let mut field = MetaballField::default();
  field.set_center(1, Vec3::splat(2.0));
  field.set_center(99, Vec3::ONE);

  assert_eq!(field.balls[1].center, Vec3::splat(2.0));
  assert_eq!(field.balls.len(), 3);
}
