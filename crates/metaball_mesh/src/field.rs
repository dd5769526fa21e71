//! Scalar field contract consumed by the extractor.
//!
//! Evaluation and animation are split: [`ScalarField::value`] takes `&self`
//! and must be pure for the current state, while [`Animate::advance`] takes
//! `&mut self` and is called once per frame before any sampling. The borrow
//! checker then guarantees the field cannot change during a pass, which is
//! what lets the parallel extractor sample it from several threads.

use glam::Vec3;

/// Signed scalar field: positive inside the surface, negative outside.
pub trait ScalarField: Sync {
  /// Field value at `point`.
  fn value(&self, point: Vec3) -> f32;
}

/// Per-frame state update for animated fields.
pub trait Animate {
  /// Move the field's internal state forward.
  ///
  /// `elapsed_secs` is the host's running clock, not a delta.
  fn advance(&mut self, elapsed_secs: f32);
}

impl<F> ScalarField for F
where
  F: Fn(Vec3) -> f32 + Sync,
{
  #[inline]
  fn value(&self, point: Vec3) -> f32 {
    self(point)
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
