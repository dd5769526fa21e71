use super::*;

#[test]
fn test_default_grid() {
  let grid = Grid::new(&ExtractConfig::default()).unwrap();

  assert_eq!(grid.origin(), -4.0);
  assert_eq!(grid.cell_size(), 0.5);
  assert_eq!(grid.cells_per_axis(), 16);
  assert_eq!(grid.cell_count(), 4096);
  assert_eq!(grid.cells().count(), 4096);
}

#[test]
fn test_cell_origins_cover_half_open_range() {
  let grid = Grid::new(&ExtractConfig::default()).unwrap();

  assert_eq!(grid.cell_origin([0, 0, 0]), Vec3::splat(-4.0));
  assert_eq!(grid.cell_origin([15, 15, 15]), Vec3::splat(3.5));
  for cell in grid.cells() {
    let origin = grid.cell_origin(cell);
    assert!(origin.cmpge(Vec3::splat(-4.0)).all());
    assert!(origin.cmplt(Vec3::splat(4.0)).all());
  }
}

#[test]
fn test_traversal_order_is_x_then_y_then_z() {
  let config = ExtractConfig::new().with_scene_size(2.0).with_cell_size(1.0);
  let grid = Grid::new(&config).unwrap();

  let cells: Vec<_> = grid.cells().collect();
  assert_eq!(
    cells,
    vec![
      [0, 0, 0],
      [0, 0, 1],
      [0, 1, 0],
      [0, 1, 1],
      [1, 0, 0],
      [1, 0, 1],
      [1, 1, 0],
      [1, 1, 1],
    ]
  );
}

#[test]
fn test_partial_step_adds_a_cell() {
  let config = ExtractConfig::new().with_scene_size(2.0).with_cell_size(0.75);
  let grid = Grid::new(&config).unwrap();

  assert_eq!(grid.cells_per_axis(), 3);
  // Last cell starts inside the bound and extends past it.
  assert_eq!(grid.axis_start(2), 0.5);
  assert!(grid.axis_start(2) + grid.cell_size() > 1.0);
}

#[test]
fn test_neighbouring_corners_match_exactly() {
  // 0.3 is not dyadic, so origin + i*C + C would drift from origin + (i+1)*C.
  let config = ExtractConfig::new().with_scene_size(3.0).with_cell_size(0.3);
  let grid = Grid::new(&config).unwrap();

  for i in 0..grid.cells_per_axis() - 1 {
    // Corner 1 is (1,0,0) of cell i; corner 0 is (0,0,0) of cell i + 1.
    assert_eq!(
      grid.corner_position([i, 2, 3], 1),
      grid.corner_position([i + 1, 2, 3], 0)
    );
    // Corner 6 is (1,1,1).
    assert_eq!(
      grid.corner_position([i, i, i], 6),
      grid.cell_origin([i + 1, i + 1, i + 1])
    );
  }
}

#[test]
fn test_corner_position_scales_offsets() {
  let grid = Grid::new(&ExtractConfig::default()).unwrap();
  let origin = grid.cell_origin([2, 4, 6]);

  assert_eq!(grid.corner_position([2, 4, 6], 0), origin);
  assert_eq!(
    grid.corner_position([2, 4, 6], 2),
    origin + Vec3::new(0.5, 0.5, 0.0)
  );
  assert_eq!(
    grid.corner_position([2, 4, 6], 7),
    origin + Vec3::new(0.0, 0.5, 0.5)
  );
}

#[test]
fn test_slab_covers_one_x_layer() {
  let grid = Grid::new(&ExtractConfig::default()).unwrap();
  let slab: Vec<_> = grid.slab(3).collect();

  assert_eq!(slab.len(), 256);
  assert!(slab.iter().all(|cell| cell[0] == 3));
  assert_eq!(slab[0], [3, 0, 0]);
  assert_eq!(slab[255], [3, 15, 15]);
}

#[test]
fn test_invalid_config_rejected() {
  let config = ExtractConfig::new().with_cell_size(0.0);
  assert_eq!(Grid::new(&config), Err(ConfigError::InvalidCellSize(0.0)));
}

#[test]
fn test_grid_carries_vertex_settings() {
  let config = ExtractConfig::new()
    .with_normal_delta(0.05)
    .with_front_face(FrontFace::CounterClockwise);
  let grid = Grid::new(&config).unwrap();

  assert_eq!(grid.normal_delta(), 0.05);
  assert_eq!(grid.front_face(), FrontFace::CounterClockwise);
}
