use super::*;

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_aabb_merge_ignores_empty() {
  let mut aabb = MinMaxAABB::empty();
  aabb.encapsulate([0.0; 3]);
  aabb.encapsulate([1.0; 3]);
  let unit = aabb;

  aabb.merge(&MinMaxAABB::empty());
  assert_eq!(aabb, unit);

  let mut other = MinMaxAABB::empty();
  other.encapsulate([-2.0; 3]);
  other.encapsulate([0.5; 3]);
  aabb.merge(&other);
  assert_eq!(aabb.min, [-2.0; 3]);
  assert_eq!(aabb.max, [1.0; 3]);
}

#[test]
fn test_empty_aabb_is_invalid() {
  assert!(!MinMaxAABB::empty().is_valid());
}

#[test]
fn test_mesh_buffers_clear() {
  let mut mesh = MeshBuffers::new();
  mesh.push_vertex([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
  mesh.clear();

  assert!(mesh.is_empty());
  assert_eq!(mesh.triangle_count(), 0);
  assert!(mesh.normals.is_empty());
  assert!(mesh.indices.is_empty());
  assert!(!mesh.bounds.is_valid());
}

#[test]
fn test_push_vertex_keeps_buffers_aligned() {
  let mut mesh = MeshBuffers::new();
  for i in 0..6 {
    mesh.push_vertex([i as f32, 0.0, 0.0], [0.0, 0.0, 1.0]);
  }

  assert_eq!(mesh.vertex_count(), 6);
  assert_eq!(mesh.normals.len(), 6);
  assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
  assert_eq!(mesh.triangle_count(), 2);
  assert_eq!(mesh.bounds.max, [5.0, 0.0, 0.0]);
}

#[test]
fn test_append_rebases_indices() {
  let mut a = MeshBuffers::new();
  for _ in 0..3 {
    a.push_vertex([0.0; 3], [0.0; 3]);
  }
  let mut b = MeshBuffers::new();
  for _ in 0..3 {
    b.push_vertex([1.0; 3], [0.0; 3]);
  }

  a.append(&b);

  assert_eq!(a.indices, vec![0, 1, 2, 3, 4, 5]);
  assert_eq!(a.positions[3], [1.0; 3]);
  assert_eq!(a.bounds.max, [1.0; 3]);
}

#[test]
fn test_config_defaults() {
  let config = ExtractConfig::default();
  assert_eq!(config.scene_size, 8.0);
  assert_eq!(config.cell_size, 0.5);
  assert_eq!(config.normal_delta, 0.01);
  assert_eq!(config.front_face, FrontFace::Clockwise);
  assert!(!config.parallel);
  assert_eq!(config.validate(), Ok(16));
}

#[test]
fn test_config_builder() {
  let config = ExtractConfig::new()
    .with_scene_size(4.0)
    .with_cell_size(0.25)
    .with_normal_delta(0.05)
    .with_front_face(FrontFace::CounterClockwise)
    .with_parallel(true);

  assert_eq!(config.scene_size, 4.0);
  assert_eq!(config.cell_size, 0.25);
  assert_eq!(config.normal_delta, 0.05);
  assert_eq!(config.front_face, FrontFace::CounterClockwise);
  assert!(config.parallel);
  assert_eq!(config.validate(), Ok(16));
}

#[test]
fn test_config_rejects_bad_values() {
  assert_eq!(
    ExtractConfig::new().with_scene_size(0.0).validate(),
    Err(ConfigError::InvalidSceneSize(0.0))
  );
  assert_eq!(
    ExtractConfig::new().with_cell_size(-0.5).validate(),
    Err(ConfigError::InvalidCellSize(-0.5))
  );
  assert!(matches!(
    ExtractConfig::new().with_cell_size(f32::NAN).validate(),
    Err(ConfigError::InvalidCellSize(_))
  ));
  assert_eq!(
    ExtractConfig::new()
      .with_normal_delta(f32::INFINITY)
      .validate(),
    Err(ConfigError::InvalidNormalDelta(f32::INFINITY))
  );
}

#[test]
fn test_config_rejects_too_many_cells() {
  let result = ExtractConfig::new()
    .with_scene_size(8.0)
    .with_cell_size(0.001)
    .validate();

  assert!(matches!(result, Err(ConfigError::TooManyCells { .. })));
}

#[test]
fn test_config_error_messages() {
  let err = ConfigError::InvalidCellSize(-1.0);
  assert_eq!(
    err.to_string(),
    "cell size must be finite and positive, got -1"
  );
}
