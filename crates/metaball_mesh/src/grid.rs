//! Uniform cell grid over the sampled region.
//!
//! Cells are addressed by integer coordinates `[x, y, z]` in
//! `0..cells_per_axis`. Lattice coordinates are computed as
//! `origin + index · cell_size` rather than by accumulating steps, and a
//! cell's corners are taken from the lattice (index + 0 or 1) rather than
//! from `cell origin + offset`. Shared corners of neighbouring cells are
//! therefore bit-identical, and both cells interpolate exactly the same point
//! on a shared edge.
//!
//! A `Grid` also carries the per-vertex settings of its config (normal step
//! and winding), so a validated grid is all an extraction pass needs.

use glam::Vec3;

use crate::case_table::CORNER_OFFSETS;
use crate::error::ConfigError;
use crate::types::{ExtractConfig, FrontFace};

/// Validated sampling lattice derived from an [`ExtractConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
  /// Minimum coordinate on every axis (`-scene_size / 2`).
  origin: f32,
  cell_size: f32,
  cells_per_axis: usize,
  normal_delta: f32,
  front_face: FrontFace,
}

impl Grid {
  /// Build the grid for `config`, rejecting invalid tunables.
  pub fn new(config: &ExtractConfig) -> Result<Self, ConfigError> {
    let cells_per_axis = config.validate()?;
    Ok(Self {
      origin: -config.scene_size * 0.5,
      cell_size: config.cell_size,
      cells_per_axis,
      normal_delta: config.normal_delta,
      front_face: config.front_face,
    })
  }

  pub fn origin(&self) -> f32 {
    self.origin
  }

  pub fn cell_size(&self) -> f32 {
    self.cell_size
  }

  pub fn cells_per_axis(&self) -> usize {
    self.cells_per_axis
  }

  /// Finite-difference step for normals.
  pub fn normal_delta(&self) -> f32 {
    self.normal_delta
  }

  pub fn front_face(&self) -> FrontFace {
    self.front_face
  }

  /// Total cells visited by one pass.
  pub fn cell_count(&self) -> usize {
    self.cells_per_axis * self.cells_per_axis * self.cells_per_axis
  }

  /// Minimum coordinate of cell `index` along one axis.
  #[inline(always)]
  pub fn axis_start(&self, index: usize) -> f32 {
    self.origin + index as f32 * self.cell_size
  }

  /// World-space minimum corner of the cell at `[x, y, z]`.
  #[inline(always)]
  pub fn cell_origin(&self, cell: [usize; 3]) -> Vec3 {
    Vec3::new(
      self.axis_start(cell[0]),
      self.axis_start(cell[1]),
      self.axis_start(cell[2]),
    )
  }

  /// World-space position of `corner` (0-7) of the cell at `[x, y, z]`.
  #[inline(always)]
  pub fn corner_position(&self, cell: [usize; 3], corner: usize) -> Vec3 {
    let [ox, oy, oz] = CORNER_OFFSETS[corner];
    Vec3::new(
      self.axis_start(cell[0] + ox as usize),
      self.axis_start(cell[1] + oy as usize),
      self.axis_start(cell[2] + oz as usize),
    )
  }

  /// All cells of the x-slab `x`, y then z.
  pub fn slab(&self, x: usize) -> impl Iterator<Item = [usize; 3]> {
    let n = self.cells_per_axis;
    (0..n).flat_map(move |y| (0..n).map(move |z| [x, y, z]))
  }

  /// Every cell, x outermost, then y, then z.
  pub fn cells(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
    (0..self.cells_per_axis).flat_map(move |x| self.slab(x))
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
