use super::*;

// Reference scalar for test comparison
fn reference_scalar(values: [f32; 8]) -> u8 {
  let mut corner_mask = 0u8;
  for (i, &value) in values.iter().enumerate() {
    if value > 0.0 {
      corner_mask |= 1 << i;
    }
  }
  corner_mask
}

#[test]
fn test_all_negative() {
  let values = [-1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0];
  assert_eq!(build(values), 0b00000000);
}

#[test]
fn test_all_positive() {
  let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
  assert_eq!(build(values), 0b11111111);
}

#[test]
fn test_mixed() {
  // Corners 0, 2, 4, 6 positive
  let values = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
  assert_eq!(build(values), 0b01010101);
}

#[test]
fn test_first_corner_only() {
  let values = [0.5, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0];
  assert_eq!(build(values), 0b00000001);
}

#[test]
fn test_last_corner_only() {
  let values = [-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 0.5];
  assert_eq!(build(values), 0b10000000);
}

#[test]
fn test_zero_is_outside() {
  assert_eq!(build([0.0; 8]), 0);
  assert_eq!(build([-0.0; 8]), 0);
}

#[test]
fn test_nan_is_outside() {
  let mut values = [1.0; 8];
  values[3] = f32::NAN;
  assert_eq!(build(values), 0b11110111);
}

#[test]
fn test_tiny_values() {
  let values = [f32::MIN_POSITIVE, -f32::MIN_POSITIVE, 1e-30, -1e-30, 0.0, 1e30, -1e30, 0.0];
  assert_eq!(build(values), 0b00100101);
}

#[test]
fn test_matches_reference() {
  // Exhaustive check for all patterns
  for pattern in 0u8..=255 {
    let values: [f32; 8] =
      std::array::from_fn(|i| if (pattern >> i) & 1 == 1 { 0.25 } else { -0.25 });
    assert_eq!(
      build(values),
      reference_scalar(values),
      "Mismatch for pattern {:#010b}",
      pattern
    );
    assert_eq!(build(values), pattern);
  }
}
