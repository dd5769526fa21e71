//! Tunable defaults and numeric tolerances for extraction.
//!
//! # Sampled Region
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SAMPLED REGION (one axis)                       │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   -S/2                                                       +S/2       │
//! │     │                                                          │        │
//! │     ├─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┬─ ... ─┬──┼──┐     │
//! │     │ c0  │ c1  │ c2  │ c3  │ c4  │ c5  │ c6  │ c7  │       │cN-1 │     │
//! │     └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─ ... ─┴──┼──┘     │
//! │     ◄─ C ─►                                                    │        │
//! │                                                                         │
//! │  Cell i starts at -S/2 + i·C. Cells are emitted while the start is      │
//! │  strictly below +S/2, so a partial last step still produces a cell      │
//! │  that pokes past the bound.                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With the defaults (S = 8, C = 0.5) there are 16 cells per axis and
//! 4096 cells per pass.

/// Default edge length of the cubic sampled region, centred on the origin.
pub const DEFAULT_SCENE_SIZE: f32 = 8.0;

/// Default edge length of one grid cell.
pub const DEFAULT_CELL_SIZE: f32 = 0.5;

/// Default finite-difference step for normal estimation.
pub const DEFAULT_NORMAL_DELTA: f32 = 0.01;

/// Upper bound on cells per axis accepted by config validation.
///
/// Keeps the worst case (every cell emitting [`MAX_CASE_TRIANGLES`]) within
/// `u32` vertex indices.
pub const MAX_CELLS_PER_AXIS: usize = 512;

/// Vertices a full grid could emit if every cell hit the largest case.
pub const fn max_vertices_per_pass(cells_per_axis: usize) -> usize {
  cells_per_axis * cells_per_axis * cells_per_axis * MAX_CASE_TRIANGLES * 3
}

const _: () = assert!(max_vertices_per_pass(MAX_CELLS_PER_AXIS) <= u32::MAX as usize);

/// Below this `|fB - fA|` edge interpolation falls back to the midpoint.
pub const INTERPOLATION_EPSILON: f32 = 1e-12;

/// Below this squared gradient length the normal is left as zero.
pub const GRADIENT_EPSILON_SQ: f32 = 1e-20;

/// Number of corners per cell.
pub const CELL_CORNERS: usize = 8;

/// Number of edges per cell.
pub const CELL_EDGES: usize = 12;

/// Maximum triangles any case emits.
pub const MAX_CASE_TRIANGLES: usize = 5;

/// Number of distinct sign patterns (8 corners, one bit each).
pub const CASE_COUNT: usize = 1 << CELL_CORNERS;

/// Number of cells per axis for a region of `scene_size` split into `cell_size`
/// steps.
///
/// Counts starts `-S/2 + i·C` that are strictly below `S/2`. Returns `None`
/// when the count would exceed `limit`.
pub fn cells_per_axis(scene_size: f32, cell_size: f32, limit: usize) -> Option<usize> {
  let half = scene_size * 0.5;
  let mut count = 0usize;
  while -half + count as f32 * cell_size < half {
    count += 1;
    if count > limit {
      return None;
    }
  }
  Some(count)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
