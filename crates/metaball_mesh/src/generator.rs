//! Per-frame driver: advance the field, then rebuild the mesh.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ MeshGenerator::update(elapsed)                                          │
//! │                                                                         │
//! │  field.advance(elapsed)          &mut F, once per frame                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  extract_into / extract_parallel_into(&field, &grid, &mut mesh)         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  stats.record_frame(timing_us, &mesh)                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The generator owns the output buffers; hosts read them through
//! [`MeshGenerator::mesh`] between updates.

use web_time::Instant;

use crate::error::ConfigError;
use crate::field::{Animate, ScalarField};
use crate::grid::Grid;
use crate::marching_cubes;
use crate::metrics::FrameStats;
use crate::types::{ExtractConfig, MeshBuffers};

pub struct MeshGenerator<F> {
  field: F,
  config: ExtractConfig,
  grid: Grid,
  mesh: MeshBuffers,
  stats: FrameStats,
}

impl<F: ScalarField + Animate> MeshGenerator<F> {
  /// Validate `config` and take ownership of `field`. No mesh is built until
  /// the first [`update`](Self::update) or [`rebuild`](Self::rebuild).
  pub fn new(field: F, config: ExtractConfig) -> Result<Self, ConfigError> {
    let grid = Grid::new(&config)?;
    Ok(Self {
      field,
      config,
      grid,
      mesh: MeshBuffers::new(),
      stats: FrameStats::new(),
    })
  }

  /// Advance the field to `elapsed_secs` and rebuild the mesh.
  pub fn update(&mut self, elapsed_secs: f32) -> &MeshBuffers {
    self.field.advance(elapsed_secs);
    tracing::trace!(elapsed_secs, "advanced field");
    self.rebuild()
  }

  /// Rebuild the mesh from the current field state without advancing it.
  pub fn rebuild(&mut self) -> &MeshBuffers {
    let start = Instant::now();
    if self.config.parallel {
      marching_cubes::extract_parallel_into(&self.field, &self.grid, &mut self.mesh);
    } else {
      marching_cubes::extract_into(&self.field, &self.grid, &mut self.mesh);
    }
    let timing_us = start.elapsed().as_micros() as u64;

    self.stats.record_frame(timing_us, &self.mesh);
    &self.mesh
  }

  /// Replace the config. On error the previous config, grid and mesh stay.
  ///
  /// The mesh is not rebuilt; call [`rebuild`](Self::rebuild) to see the
  /// change without advancing the animation.
  pub fn set_config(&mut self, config: ExtractConfig) -> Result<(), ConfigError> {
    let grid = Grid::new(&config)?;
    self.grid = grid;
    self.config = config;
    Ok(())
  }
}

impl<F> MeshGenerator<F> {
  /// Buffers from the last update.
  pub fn mesh(&self) -> &MeshBuffers {
    &self.mesh
  }

  pub fn field(&self) -> &F {
    &self.field
  }

  /// Mutable field access between frames (e.g. to move balls by hand).
  pub fn field_mut(&mut self) -> &mut F {
    &mut self.field
  }

  pub fn config(&self) -> &ExtractConfig {
    &self.config
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn stats(&self) -> &FrameStats {
    &self.stats
  }

  pub fn stats_mut(&mut self) -> &mut FrameStats {
    &mut self.stats
  }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
