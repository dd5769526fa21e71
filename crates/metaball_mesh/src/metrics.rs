//! Engine-agnostic extraction statistics.
//!
//! Runtime-toggled so a host can switch collection off without rebuilding.
//!
//! # Usage
//!
//! ```ignore
//! use metaball_mesh::metrics::{FrameStats, COLLECT_METRICS};
//!
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // Record one frame:
//! stats.record_frame(timing_us, &mesh);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::types::MeshBuffers;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled.
#[inline]
pub fn is_enabled() -> bool {
  COLLECT_METRICS.load(Ordering::Relaxed)
}

/// Rolling window for storing recent values (e.g., timing history).
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
  buffer: VecDeque<T>,
  capacity: usize,
}

impl<T> RollingWindow<T> {
  /// Create a new rolling window with the given capacity.
  pub fn new(capacity: usize) -> Self {
    Self {
      buffer: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Push a new value, evicting the oldest if at capacity.
  pub fn push(&mut self, value: T) {
    if self.capacity == 0 {
      return;
    }
    if self.buffer.len() >= self.capacity {
      self.buffer.pop_front();
    }
    self.buffer.push_back(value);
  }

  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  pub fn clear(&mut self) {
    self.buffer.clear();
  }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
  /// Compute the sum of all values.
  pub fn sum(&self) -> T {
    self.buffer.iter().copied().fold(T::default(), |acc, x| acc + x)
  }
}

impl RollingWindow<u64> {
  /// Compute the average of all values.
  pub fn average(&self) -> f64 {
    if self.buffer.is_empty() {
      0.0
    } else {
      self.sum() as f64 / self.buffer.len() as f64
    }
  }

  /// Get min and max values.
  pub fn min_max(&self) -> Option<(u64, u64)> {
    let min = self.buffer.iter().min()?;
    let max = self.buffer.iter().max()?;
    Some((*min, *max))
  }

  /// Middle value of the window (upper middle for even lengths).
  pub fn median(&self) -> Option<u64> {
    let mut sorted: Vec<u64> = self.buffer.iter().copied().collect();
    sorted.sort_unstable();
    sorted.get(sorted.len() / 2).copied()
  }
}

impl Default for RollingWindow<u64> {
  fn default() -> Self {
    Self::new(DEFAULT_WINDOW)
  }
}

/// Default window length (~2 seconds at 60fps).
pub const DEFAULT_WINDOW: usize = 128;

/// Per-frame extraction statistics kept by the frame driver.
#[derive(Debug, Clone)]
pub struct FrameStats {
  /// Rolling window of extraction times in microseconds.
  pub extract_timings: RollingWindow<u64>,

  // Last frame snapshot (for UI)
  /// Last extraction time in microseconds.
  pub last_extract_us: u64,
  /// Vertices produced by the last frame.
  pub last_vertices: usize,
  /// Triangles produced by the last frame.
  pub last_triangles: usize,
  /// Frames recorded this session.
  pub total_frames: u64,
}

impl Default for FrameStats {
  fn default() -> Self {
    Self {
      extract_timings: RollingWindow::default(),
      last_extract_us: 0,
      last_vertices: 0,
      last_triangles: 0,
      total_frames: 0,
    }
  }
}

impl FrameStats {
  pub fn new() -> Self {
    Self::default()
  }

  /// Record one extraction pass.
  pub fn record_frame(&mut self, timing_us: u64, mesh: &MeshBuffers) {
    if !is_enabled() {
      return;
    }

    self.extract_timings.push(timing_us);
    self.last_extract_us = timing_us;
    self.last_vertices = mesh.vertex_count();
    self.last_triangles = mesh.triangle_count();
    self.total_frames += 1;
  }

  /// Reset the window and snapshot.
  pub fn reset(&mut self) {
    self.extract_timings.clear();
    self.last_extract_us = 0;
    self.last_vertices = 0;
    self.last_triangles = 0;
    // Don't reset total_frames - it's cumulative
  }

  /// Average extraction time in microseconds.
  pub fn avg_extract_us(&self) -> f64 {
    self.extract_timings.average()
  }

  pub fn min_max_extract_us(&self) -> Option<(u64, u64)> {
    self.extract_timings.min_max()
  }

  pub fn median_extract_us(&self) -> Option<u64> {
    self.extract_timings.median()
  }

  /// Approximate mesh memory: 24 bytes per vertex, 4 per index.
  pub fn mesh_memory_bytes(&self) -> u64 {
    self.last_vertices as u64 * 24 + self.last_triangles as u64 * 12
  }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;
