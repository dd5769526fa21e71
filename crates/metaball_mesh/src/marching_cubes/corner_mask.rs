//! Corner mask computation using glam's SIMD comparisons.
//!
//! The corner mask is the cell's case index: an 8-bit value where each bit
//! says whether that corner is inside the surface (strictly positive value).

use glam::Vec4;

/// Build the case index from 8 corner values.
///
/// Bit `i` is set when `values[i] > 0.0`. Zero and NaN count as outside.
/// Corners are numbered as in [`crate::case_table`].
#[inline]
pub fn build(values: [f32; 8]) -> u8 {
  let low = Vec4::new(values[0], values[1], values[2], values[3]);
  let high = Vec4::new(values[4], values[5], values[6], values[7]);

  // Each lane compare becomes one bit of a 4-bit mask.
  let low_bits = low.cmpgt(Vec4::ZERO).bitmask();
  let high_bits = high.cmpgt(Vec4::ZERO).bitmask();

  (low_bits | (high_bits << 4)) as u8
}

#[cfg(test)]
#[path = "corner_mask_test.rs"]
mod corner_mask_test;
