//! Configuration errors.

use thiserror::Error;

/// Rejected extraction parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
  #[error("scene size must be finite and positive, got {0}")]
  InvalidSceneSize(f32),

  #[error("cell size must be finite and positive, got {0}")]
  InvalidCellSize(f32),

  #[error("normal delta must be finite and positive, got {0}")]
  InvalidNormalDelta(f32),

  #[error("scene size {scene_size} with cell size {cell_size} exceeds {limit} cells per axis")]
  TooManyCells {
    scene_size: f32,
    cell_size: f32,
    limit: usize,
  },
}
