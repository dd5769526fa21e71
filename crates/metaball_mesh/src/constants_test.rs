use super::*;

#[test]
fn test_case_count() {
  assert_eq!(CASE_COUNT, 256);
  assert!(CASE_COUNT.is_power_of_two());
}

#[test]
fn test_default_grid_is_sixteen_cells() {
  assert_eq!(
    cells_per_axis(DEFAULT_SCENE_SIZE, DEFAULT_CELL_SIZE, MAX_CELLS_PER_AXIS),
    Some(16)
  );
}

#[test]
fn test_partial_last_step_is_included() {
  // Starts: -1.0, -0.25, 0.5 (all < 1.0); 1.25 is past the bound.
  assert_eq!(cells_per_axis(2.0, 0.75, MAX_CELLS_PER_AXIS), Some(3));
}

#[test]
fn test_cell_larger_than_scene() {
  assert_eq!(cells_per_axis(1.0, 4.0, MAX_CELLS_PER_AXIS), Some(1));
}

#[test]
fn test_limit_exceeded() {
  assert_eq!(cells_per_axis(8.0, 0.5, 15), None);
  assert_eq!(cells_per_axis(8.0, 0.5, 16), Some(16));
}

#[test]
fn test_cell_limit_fits_u32_indices() {
  assert!(max_vertices_per_pass(MAX_CELLS_PER_AXIS) <= u32::MAX as usize);
  assert!(max_vertices_per_pass(MAX_CELLS_PER_AXIS * 2) > u32::MAX as usize);
}

#[test]
fn test_limit_rejects_past_max_cells() {
  // 0.015 over 8.0 needs 534 cells per axis.
  assert_eq!(cells_per_axis(8.0, 0.015, MAX_CELLS_PER_AXIS), None);
  assert_eq!(
    cells_per_axis(8.0, 8.0 / 512.0, MAX_CELLS_PER_AXIS),
    Some(MAX_CELLS_PER_AXIS)
  );
}
