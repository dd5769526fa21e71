//! Uniform-grid marching cubes.
//!
//! Converts a [`ScalarField`] sampled on a [`Grid`] into a flat triangle soup.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  field: &F               - F(p) > 0 inside, <= 0 outside        │
//! │  grid: &Grid             - lattice, normal step, winding        │
//! │  out: &mut MeshBuffers   - cleared, then rebuilt                │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Corner Classification               │
//! │  For each cell (x outermost, then y, then z):                   │
//! │    Sample the field at the 8 lattice corners                    │
//! │    Build the 8-bit case index from the signs                    │
//! │    Early-out if the case has no triangles (0 or 255)            │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Edge Vertices                       │
//! │  For each edge in EDGE_TABLE[case]:                             │
//! │    Interpolate the zero crossing (outside → inside)             │
//! │    Estimate the normal by central differences                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Triangle Emission                   │
//! │  For each triangle in TRI_TABLE[case]:                          │
//! │    Order its 3 edges per FrontFace                              │
//! │    Append a fresh vertex + normal + index for each              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  positions: Vec<[f32; 3]>  - one per triangle corner            │
//! │  normals: Vec<[f32; 3]>    - unit or zero                       │
//! │  indices: Vec<u32>         - indices[i] == i                    │
//! │  bounds: MinMaxAABB        - box of all positions               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Vertices are not shared, so every triangle is flat-shadable on its own and
//! the index buffer is the identity. Each crossing edge is interpolated once
//! per cell even when several triangles of the case use it.
//!
//! # Parallel Extraction
//!
//! [`extract_parallel_into`] splits the grid into x-slabs. Each slab is
//! meshed into its own buffer with slab-local indices, then the slabs are
//! appended in x order with rebased indices. Since the serial pass visits
//! cells in the same order, both produce identical buffers.

mod corner_mask;
mod gradient;
mod interpolate;

pub use corner_mask::build as case_index;
pub use gradient::{central_difference, estimate_normal};
pub use interpolate::{interpolate, oriented, Corner};

use glam::Vec3;
use rayon::prelude::*;
use tracing::debug;

use crate::case_table::{case_triangles, EDGE_CORNERS, EDGE_TABLE, TRIANGLE_COUNTS};
use crate::constants::{CELL_CORNERS, CELL_EDGES};
use crate::field::ScalarField;
use crate::grid::Grid;
use crate::types::{FrontFace, MeshBuffers};

/// Extract the surface into a fresh buffer.
pub fn extract<F: ScalarField + ?Sized>(field: &F, grid: &Grid) -> MeshBuffers {
  let mut out = MeshBuffers::new();
  extract_into(field, grid, &mut out);
  out
}

/// Extract the surface into `out`, clearing it first.
///
/// `out` keeps its capacity, so a caller that reuses one buffer per frame
/// stops allocating once the surface size settles.
#[tracing::instrument(skip_all, name = "marching_cubes::extract")]
pub fn extract_into<F: ScalarField + ?Sized>(field: &F, grid: &Grid, out: &mut MeshBuffers) {
  out.clear();

  let mut triangles = 0usize;
  for x in 0..grid.cells_per_axis() {
    triangles += extract_slab(field, grid, x, out);
  }

  debug!(
    cells = grid.cell_count(),
    triangles,
    vertices = out.vertex_count(),
    "extracted surface"
  );
}

/// Same result as [`extract_into`], with x-slabs meshed on the rayon pool.
#[tracing::instrument(skip_all, name = "marching_cubes::extract_parallel")]
pub fn extract_parallel_into<F: ScalarField + ?Sized>(
  field: &F,
  grid: &Grid,
  out: &mut MeshBuffers,
) {
  let slabs: Vec<MeshBuffers> = (0..grid.cells_per_axis())
    .into_par_iter()
    .map(|x| {
      let _span = tracing::info_span!("slab", x).entered();
      let mut slab = MeshBuffers::new();
      extract_slab(field, grid, x, &mut slab);
      slab
    })
    .collect();

  out.clear();
  {
    let _span = tracing::info_span!("merge_slabs", slabs = slabs.len()).entered();
    let vertices: usize = slabs.iter().map(MeshBuffers::vertex_count).sum();
    out.positions.reserve(vertices);
    out.normals.reserve(vertices);
    out.indices.reserve(vertices);
    for slab in &slabs {
      out.append(slab);
    }
  }

  debug!(
    cells = grid.cell_count(),
    slabs = slabs.len(),
    triangles = out.triangle_count(),
    vertices = out.vertex_count(),
    "extracted surface in parallel"
  );
}

/// Mesh every cell of x-slab `x` into `out`. Returns the triangle count.
fn extract_slab<F: ScalarField + ?Sized>(
  field: &F,
  grid: &Grid,
  x: usize,
  out: &mut MeshBuffers,
) -> usize {
  grid
    .slab(x)
    .map(|cell| process_cell(field, grid, cell, out))
    .sum()
}

/// Classify and triangulate one cell, appending to `out`.
///
/// Returns the number of triangles emitted (the case's triangle count).
pub fn process_cell<F: ScalarField + ?Sized>(
  field: &F,
  grid: &Grid,
  cell: [usize; 3],
  out: &mut MeshBuffers,
) -> usize {
  // =========================================================================
  // Phase 1: Corner classification
  // =========================================================================
  let positions: [Vec3; CELL_CORNERS] =
    std::array::from_fn(|corner| grid.corner_position(cell, corner));
  let values: [f32; CELL_CORNERS] = std::array::from_fn(|corner| field.value(positions[corner]));

  let case = corner_mask::build(values);
  let triangle_count = TRIANGLE_COUNTS[case as usize] as usize;
  if triangle_count == 0 {
    return 0;
  }

  // =========================================================================
  // Phase 2: Edge vertices
  // =========================================================================
  let crossing = EDGE_TABLE[case as usize];
  let mut edge_vertices = [[Vec3::ZERO; 2]; CELL_EDGES];
  for (edge, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
    if crossing & (1 << edge) == 0 {
      continue;
    }
    let (a, b) = (a as usize, b as usize);
    let position = interpolate(
      Corner::new(positions[a], values[a]),
      Corner::new(positions[b], values[b]),
    );
    let normal = estimate_normal(field, position, grid.normal_delta());
    edge_vertices[edge] = [position, normal];
  }

  // =========================================================================
  // Phase 3: Triangle emission
  // =========================================================================
  for [e0, e1, e2] in case_triangles(case) {
    let order = match grid.front_face() {
      FrontFace::Clockwise => [e0, e1, e2],
      FrontFace::CounterClockwise => [e0, e2, e1],
    };
    for edge in order {
      let [position, normal] = edge_vertices[edge];
      out.push_vertex(position.to_array(), normal.to_array());
    }
  }

  triangle_count
}
