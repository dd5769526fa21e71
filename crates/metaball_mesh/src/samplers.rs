//! Simple analytic fields for testing and debugging.
//!
//! These fields have surfaces that are easy to verify visually and
//! numerically. Use them to check extraction without the metaball falloff
//! getting in the way. All follow the extractor's convention: positive
//! inside, negative outside.

use glam::Vec3;

use crate::field::{Animate, ScalarField};

/// Solid sphere.
///
/// Field: `radius - |p - center|`
#[derive(Clone, Debug, PartialEq)]
pub struct SphereField {
  /// Center of the sphere in world coordinates
  pub center: Vec3,
  /// Radius of the sphere
  pub radius: f32,
}

impl Default for SphereField {
  fn default() -> Self {
    Self {
      center: Vec3::ZERO,
      radius: 2.0,
    }
  }
}

impl SphereField {
  pub fn new(radius: f32) -> Self {
    Self {
      center: Vec3::ZERO,
      radius,
    }
  }

  pub fn with_center(mut self, center: Vec3) -> Self {
    self.center = center;
    self
  }
}

impl ScalarField for SphereField {
  #[inline]
  fn value(&self, point: Vec3) -> f32 {
    self.radius - point.distance(self.center)
  }
}

impl Animate for SphereField {
  fn advance(&mut self, _elapsed_secs: f32) {}
}

/// Half-space bounded by a plane tilted around the Z axis.
///
/// Everything below the plane is inside. The surface crosses every x-slab at
/// a predictable angle, which makes it useful for checking slab seams.
///
/// Field: `x · sin(angle) - (y - height) · cos(angle)`
/// Default: plane tilted 45° through the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct TiltedPlaneField {
  /// Height offset of the plane (default: 0.0)
  pub height: f32,
  /// Tilt angle in radians (default: π/4 = 45°)
  pub angle: f32,
}

impl Default for TiltedPlaneField {
  fn default() -> Self {
    Self {
      height: 0.0,
      angle: std::f32::consts::FRAC_PI_4,
    }
  }
}

impl TiltedPlaneField {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_height(mut self, height: f32) -> Self {
    self.height = height;
    self
  }

  pub fn with_angle_degrees(mut self, degrees: f32) -> Self {
    self.angle = degrees.to_radians();
    self
  }

  /// Unit normal pointing out of the solid side.
  pub fn normal(&self) -> Vec3 {
    Vec3::new(-self.angle.sin(), self.angle.cos(), 0.0)
  }
}

impl ScalarField for TiltedPlaneField {
  #[inline]
  fn value(&self, point: Vec3) -> f32 {
    point.x * self.angle.sin() - (point.y - self.height) * self.angle.cos()
  }
}

impl Animate for TiltedPlaneField {
  fn advance(&mut self, _elapsed_secs: f32) {}
}

/// Same value everywhere; produces no surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantField(pub f32);

impl ScalarField for ConstantField {
  #[inline]
  fn value(&self, _point: Vec3) -> f32 {
    self.0
  }
}

impl Animate for ConstantField {
  fn advance(&mut self, _elapsed_secs: f32) {}
}

#[cfg(test)]
#[path = "samplers_test.rs"]
mod samplers_test;
