use super::*;

#[test]
fn test_sphere_sign_convention() {
  let sphere = SphereField::new(2.0).with_center(Vec3::new(1.0, 0.0, 0.0));

  assert_eq!(sphere.value(Vec3::new(1.0, 0.0, 0.0)), 2.0);
  assert_eq!(sphere.value(Vec3::new(3.0, 0.0, 0.0)), 0.0);
  assert!(sphere.value(Vec3::new(5.0, 0.0, 0.0)) < 0.0);
}

#[test]
fn test_tilted_plane_default_passes_through_origin() {
  let plane = TiltedPlaneField::default();

  assert!(plane.value(Vec3::ZERO).abs() < 1e-6);
  // Along the plane direction (1, 1, 0) the value stays zero.
  assert!(plane.value(Vec3::new(2.0, 2.0, 5.0)).abs() < 1e-5);
}

#[test]
fn test_tilted_plane_solid_below() {
  let plane = TiltedPlaneField::new().with_height(1.0);
  let normal = plane.normal();

  let on_plane = Vec3::new(0.0, 1.0, 0.0);
  assert!(plane.value(on_plane).abs() < 1e-6);
  assert!(plane.value(on_plane - normal) > 0.0);
  assert!(plane.value(on_plane + normal) < 0.0);
}

#[test]
fn test_horizontal_plane() {
  let plane = TiltedPlaneField::new().with_angle_degrees(0.0);

  assert_eq!(plane.value(Vec3::new(3.0, -1.0, 0.0)), 1.0);
  assert_eq!(plane.value(Vec3::new(-3.0, 2.0, 0.0)), -2.0);
  assert_eq!(plane.normal(), Vec3::Y);
}

#[test]
fn test_constant_field() {
  let field = ConstantField(-0.5);
  assert_eq!(field.value(Vec3::ZERO), -0.5);
  assert_eq!(field.value(Vec3::splat(1e6)), -0.5);
}
