//! Zero-crossing interpolation along a cell edge.

use glam::Vec3;

use crate::constants::INTERPOLATION_EPSILON;

/// One sampled cell corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
  pub position: Vec3,
  pub value: f32,
}

impl Corner {
  #[inline]
  pub fn new(position: Vec3, value: f32) -> Self {
    Self { position, value }
  }
}

/// Order an edge's endpoints as `(outside, inside)`.
///
/// If `a` is inside (value > 0) the pair comes back swapped; otherwise it is
/// returned unchanged. Both cells sharing an edge therefore interpolate from
/// the same endpoint, whichever way round their edge tables list it.
#[inline]
pub fn oriented(a: Corner, b: Corner) -> (Corner, Corner) {
  if a.value > 0.0 {
    (b, a)
  } else {
    (a, b)
  }
}

/// Point on the edge `a`-`b` where the linearly interpolated field is zero.
///
/// `t = -fA / (fB - fA)` measured from the outside endpoint. When the two
/// values are equal to within [`INTERPOLATION_EPSILON`], or either value is
/// NaN or infinite enough to leave `t` undefined, the midpoint is returned;
/// otherwise `t` is clamped to `[0, 1]` so the point never leaves the edge.
#[inline]
pub fn interpolate(a: Corner, b: Corner) -> Vec3 {
  let (a, b) = oriented(a, b);
  let denominator = b.value - a.value;

  let t = if !denominator.is_finite() || denominator.abs() < INTERPOLATION_EPSILON {
    0.5
  } else {
    let t = -a.value / denominator;
    if t.is_finite() {
      t.clamp(0.0, 1.0)
    } else {
      0.5
    }
  };

  a.position + (b.position - a.position) * t
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
