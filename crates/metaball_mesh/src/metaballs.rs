//! Metaball scalar field.
//!
//! Each ball contributes `radius² / d²` where `d` is the distance to its
//! centre; the field is the sum minus one, so a lone ball's surface is the
//! sphere of `radius` and overlapping balls fuse into a blob.
//!
//! ```text
//! F(p) = radius² · Σ 1 / max(|p - cᵢ|², MIN_DISTANCE_SQ) - 1
//!
//!        F > 0  inside
//!        F = 0  surface
//!        F < 0  outside (→ -1 far away)
//! ```

use glam::Vec3;

use crate::field::{Animate, ScalarField};

/// Clamp for the squared distance so samples on a centre stay finite.
pub const MIN_DISTANCE_SQ: f32 = 1e-6;

/// Per-frame drift divisor: balls move `sin(t) / DRIFT_DIVISOR` per frame.
pub const DRIFT_DIVISOR: f32 = 50.0;

/// One influence centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metaball {
  /// Current centre in world space.
  pub center: Vec3,
  /// Direction the centre moves in as the animation clock swings.
  pub drift: Vec3,
}

impl Metaball {
  /// Stationary ball at `center`.
  pub fn new(center: Vec3) -> Self {
    Self {
      center,
      drift: Vec3::ZERO,
    }
  }

  pub fn with_drift(mut self, drift: Vec3) -> Self {
    self.drift = drift;
    self
  }
}

/// Sum of inverse-square influences.
#[derive(Clone, Debug, PartialEq)]
pub struct MetaballField {
  pub balls: Vec<Metaball>,
  /// Radius of a lone ball's surface.
  pub radius: f32,
}

impl Default for MetaballField {
  /// Three balls in a triangle, drifting apart and together.
  fn default() -> Self {
    Self {
      balls: vec![
        Metaball::new(Vec3::new(-1.2, 0.0, 0.0)).with_drift(Vec3::new(-1.0, -1.0, 0.0)),
        Metaball::new(Vec3::new(1.2, 0.0, 0.0)).with_drift(Vec3::new(0.0, 1.0, 0.0)),
        Metaball::new(Vec3::new(0.0, 1.4, 0.0)).with_drift(Vec3::new(1.0, -1.0, 0.0)),
      ],
      radius: 1.0,
    }
  }
}

impl MetaballField {
  /// Field with no balls (uniformly `-1`).
  pub fn new(radius: f32) -> Self {
    Self {
      balls: Vec::new(),
      radius,
    }
  }

  pub fn with_ball(mut self, ball: Metaball) -> Self {
    self.balls.push(ball);
    self
  }

  /// Copy with every drift cleared, for reproducible frames.
  pub fn frozen(&self) -> Self {
    Self {
      balls: self
        .balls
        .iter()
        .map(|ball| Metaball::new(ball.center))
        .collect(),
      radius: self.radius,
    }
  }

  /// Move ball `index` to `center`. Out-of-range indices are ignored.
  pub fn set_center(&mut self, index: usize, center: Vec3) {
    if let Some(ball) = self.balls.get_mut(index) {
      ball.center = center;
    }
  }
}

impl ScalarField for MetaballField {
  #[inline]
  fn value(&self, point: Vec3) -> f32 {
    let influence: f32 = self
      .balls
      .iter()
      .map(|ball| 1.0 / ball.center.distance_squared(point).max(MIN_DISTANCE_SQ))
      .sum();
    influence * self.radius * self.radius - 1.0
  }
}

impl Animate for MetaballField {
  /// Nudge every ball along its drift by `sin(elapsed) / 50`.
  ///
  /// The offset is applied per call, so the motion depends on the frame
  /// rate; the sine keeps it oscillating instead of running away.
  fn advance(&mut self, elapsed_secs: f32) {
    let speed = elapsed_secs.sin() / DRIFT_DIVISOR;
    for ball in &mut self.balls {
      ball.center += ball.drift * speed;
    }
  }
}

#[cfg(test)]
#[path = "metaballs_test.rs"]
mod metaballs_test;
