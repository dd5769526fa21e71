//! metaball_mesh - Engine independent isosurface extraction for animated
//! scalar fields
//!
//! This crate turns an implicit surface (the zero set of a scalar field) into
//! a triangle mesh every frame using marching cubes on a uniform grid. The
//! bundled field is a set of drifting metaballs; anything implementing
//! [`ScalarField`] works, including plain closures.
//!
//! # Features
//!
//! - **Marching Cubes**: classic 256-case table, per-edge linear
//!   interpolation, central-difference normals
//! - **Flat Output**: unshared vertices with identity indices, ready to copy
//!   into any engine's mesh format
//! - **Slab Parallelism**: optional rayon extraction with output identical to
//!   the serial pass
//! - **Frame Driver**: [`MeshGenerator`] advances the field once per frame,
//!   rebuilds the buffers in place and keeps timing statistics
//!
//! # Example
//!
//! ```ignore
//! use metaball_mesh::{ExtractConfig, MeshGenerator, MetaballField};
//!
//! let mut generator = MeshGenerator::new(MetaballField::default(), ExtractConfig::default())?;
//!
//! // Once per frame, with the host's running clock:
//! let mesh = generator.update(elapsed_secs);
//!
//! println!("Generated {} vertices, {} triangles",
//!     mesh.vertex_count(), mesh.triangle_count());
//! ```

pub mod case_table;
pub mod constants;
pub mod error;
pub mod field;
pub mod grid;
pub mod types;

// Re-export commonly used items
pub use error::ConfigError;
pub use field::{Animate, ScalarField};
pub use glam::Vec3;
pub use grid::Grid;
pub use types::{ExtractConfig, FrontFace, MeshBuffers, MinMaxAABB};

// Marching cubes extraction
pub mod marching_cubes;
pub use marching_cubes::{extract, extract_into, extract_parallel_into};

// Fields
pub mod metaballs;
pub mod samplers;
pub use metaballs::{Metaball, MetaballField};
pub use samplers::{ConstantField, SphereField, TiltedPlaneField};

// Per-frame driver and statistics
pub mod generator;
pub mod metrics;
pub use generator::MeshGenerator;
pub use metrics::{FrameStats, RollingWindow, COLLECT_METRICS};
