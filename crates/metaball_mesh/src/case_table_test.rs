use super::*;

#[test]
fn test_triangle_counts_bounded() {
  for case in 0..CASE_COUNT {
    assert!(
      TRIANGLE_COUNTS[case] as usize <= MAX_CASE_TRIANGLES,
      "Case {} has {} triangles",
      case,
      TRIANGLE_COUNTS[case]
    );
  }
}

#[test]
fn test_edge_ids_in_range() {
  for case in 0..=255u8 {
    for tri in case_triangles(case) {
      for edge in tri {
        assert!(edge < CELL_EDGES, "Case {} references edge {}", case, edge);
      }
    }
  }
}

#[test]
fn test_rows_are_terminated() {
  // Everything after the last triangle is padding.
  for case in 0..CASE_COUNT {
    let used = TRIANGLE_COUNTS[case] as usize * 3;
    assert!(
      TRI_TABLE[case][used..].iter().all(|&e| e == END),
      "Case {} has data after its terminator",
      case
    );
  }
}

#[test]
fn test_homogeneous_cases_empty() {
  assert_eq!(triangle_count(0), 0, "All outside should have no triangles");
  assert_eq!(triangle_count(255), 0, "All inside should have no triangles");
  assert_eq!(case_triangles(0).count(), 0);
  assert_eq!(case_triangles(255).count(), 0);
}

#[test]
fn test_single_corner_is_one_triangle() {
  for corner in 0..CELL_CORNERS {
    let case = 1u8 << corner;
    assert_eq!(triangle_count(case), 1, "Corner {} alone", corner);
    assert_eq!(triangle_count(!case), 1, "Corner {} alone outside", corner);
  }
}

#[test]
fn test_triangles_use_exactly_the_crossing_edges() {
  for case in 0..=255u8 {
    let mut used = 0u16;
    for tri in case_triangles(case) {
      for edge in tri {
        used |= 1 << edge;
      }
    }
    assert_eq!(
      used, EDGE_TABLE[case as usize],
      "Case {:#010b}: triangles use {:#014b}, crossings are {:#014b}",
      case, used, EDGE_TABLE[case as usize]
    );
  }
}

#[test]
fn test_edge_table_symmetry() {
  // Complementary cases cross the same edges
  for case in 0..128 {
    assert_eq!(EDGE_TABLE[case], EDGE_TABLE[255 - case]);
  }
}

#[test]
fn test_first_case() {
  let tris: Vec<_> = case_triangles(1).collect();
  assert_eq!(tris, vec![[0, 8, 3]]);
}

#[test]
fn test_edge_corners_are_unit_edges() {
  for (edge, &[a, b]) in EDGE_CORNERS.iter().enumerate() {
    assert!(a < 8 && b < 8);
    let delta = corner_position(a as usize) - corner_position(b as usize);
    assert_eq!(
      delta.abs().element_sum(),
      1.0,
      "Edge {} does not join adjacent corners",
      edge
    );
  }
}

#[test]
fn test_corner_position() {
  assert_eq!(corner_position(0), Vec3::ZERO);
  assert_eq!(corner_position(1), Vec3::X);
  assert_eq!(corner_position(3), Vec3::Y);
  assert_eq!(corner_position(4), Vec3::Z);
  assert_eq!(corner_position(6), Vec3::ONE);
}
