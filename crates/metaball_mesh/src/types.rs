//! Core data types for extraction.

use crate::constants::*;
use crate::error::ConfigError;

/// Order in which a triangle's three vertices are appended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrontFace {
  /// Case-table order: clockwise when viewed from outside the surface.
  #[default]
  Clockwise,

  /// Second and third vertex swapped: counter-clockwise from outside.
  CounterClockwise,
}

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Expand AABB to include another box.
  #[inline]
  pub fn merge(&mut self, other: &MinMaxAABB) {
    if other.is_valid() {
      self.encapsulate(other.min);
      self.encapsulate(other.max);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Flat triangle soup produced by one extraction pass.
///
/// Invariants after a pass: `normals.len() == positions.len()`,
/// `indices.len() % 3 == 0`, every index `< positions.len()`. Vertices are
/// never shared, so `indices[i] == i`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
  /// Interpolated surface points in world space.
  pub positions: Vec<[f32; 3]>,

  /// Unit normals (zero where the field gradient vanishes).
  pub normals: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub indices: Vec<u32>,

  /// Bounding box encompassing all positions.
  pub bounds: MinMaxAABB,
}

impl MeshBuffers {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.positions.clear();
    self.normals.clear();
    self.indices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.positions.is_empty()
  }

  /// Number of vertices.
  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Append one vertex and its index.
  #[inline]
  pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) {
    debug_assert!(self.positions.len() < u32::MAX as usize);
    let index = self.positions.len() as u32;
    self.positions.push(position);
    self.normals.push(normal);
    self.indices.push(index);
    self.bounds.encapsulate(position);
  }

  /// Append `other`, rebasing its indices past the current vertices.
  pub fn append(&mut self, other: &MeshBuffers) {
    debug_assert!(self.positions.len() + other.positions.len() <= u32::MAX as usize);
    let base = self.positions.len() as u32;
    self.positions.extend_from_slice(&other.positions);
    self.normals.extend_from_slice(&other.normals);
    self
      .indices
      .extend(other.indices.iter().map(|&index| index + base));
    self.bounds.merge(&other.bounds);
  }
}

/// Configuration for extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfig {
  /// Edge length of the cubic region sampled around the origin.
  pub scene_size: f32,

  /// Edge length of one grid cell.
  pub cell_size: f32,

  /// Step for central-difference normals.
  pub normal_delta: f32,

  /// Vertex order within each triangle.
  pub front_face: FrontFace,

  /// Split the grid into x-slabs on the rayon pool.
  pub parallel: bool,
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self {
      scene_size: DEFAULT_SCENE_SIZE,
      cell_size: DEFAULT_CELL_SIZE,
      normal_delta: DEFAULT_NORMAL_DELTA,
      front_face: FrontFace::default(),
      parallel: false,
    }
  }
}

impl ExtractConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_scene_size(mut self, size: f32) -> Self {
    self.scene_size = size;
    self
  }

  pub fn with_cell_size(mut self, size: f32) -> Self {
    self.cell_size = size;
    self
  }

  pub fn with_normal_delta(mut self, delta: f32) -> Self {
    self.normal_delta = delta;
    self
  }

  pub fn with_front_face(mut self, front_face: FrontFace) -> Self {
    self.front_face = front_face;
    self
  }

  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  /// Check every tunable; returns the cell count per axis on success.
  pub fn validate(&self) -> Result<usize, ConfigError> {
    if !is_positive(self.scene_size) {
      return Err(ConfigError::InvalidSceneSize(self.scene_size));
    }
    if !is_positive(self.cell_size) {
      return Err(ConfigError::InvalidCellSize(self.cell_size));
    }
    if !is_positive(self.normal_delta) {
      return Err(ConfigError::InvalidNormalDelta(self.normal_delta));
    }

    cells_per_axis(self.scene_size, self.cell_size, MAX_CELLS_PER_AXIS).ok_or(
      ConfigError::TooManyCells {
        scene_size: self.scene_size,
        cell_size: self.cell_size,
        limit: MAX_CELLS_PER_AXIS,
      },
    )
  }
}

#[inline]
fn is_positive(value: f32) -> bool {
  value.is_finite() && value > 0.0
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
