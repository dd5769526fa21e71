//! Normal estimation from the field gradient.
//!
//! Central differences along each axis:
//!
//! ```text
//! gx = F(p + δx) - F(p - δx)
//! gy = F(p + δy) - F(p - δy)
//! gz = F(p + δz) - F(p - δz)
//!
//! normal = -normalize(g)
//! ```
//!
//! The field is positive inside, so the gradient points inward and the
//! normal is its negation. Scaling by `1 / 2δ` is skipped since the result
//! is normalized anyway.

use glam::Vec3;

use crate::constants::GRADIENT_EPSILON_SQ;
use crate::field::ScalarField;

/// Raw central-difference gradient at `point` (not divided by `2δ`).
#[inline]
pub fn central_difference<F: ScalarField + ?Sized>(field: &F, point: Vec3, delta: f32) -> Vec3 {
  let dx = Vec3::new(delta, 0.0, 0.0);
  let dy = Vec3::new(0.0, delta, 0.0);
  let dz = Vec3::new(0.0, 0.0, delta);

  Vec3::new(
    field.value(point + dx) - field.value(point - dx),
    field.value(point + dy) - field.value(point - dy),
    field.value(point + dz) - field.value(point - dz),
  )
}

/// Outward unit normal at `point`, or zero where the gradient vanishes or is
/// not finite.
#[inline]
pub fn estimate_normal<F: ScalarField + ?Sized>(field: &F, point: Vec3, delta: f32) -> Vec3 {
  let gradient = central_difference(field, point, delta);
  let len_sq = gradient.length_squared();

  if !len_sq.is_finite() || len_sq < GRADIENT_EPSILON_SQ {
    return Vec3::ZERO;
  }

  -gradient * len_sq.sqrt().recip()
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;
