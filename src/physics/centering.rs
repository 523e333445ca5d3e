// src/physics/centering.rs
//
// XY re-centering of a coordinate set inside a periodic cell.

use crate::error::Result;
use crate::model::Cell;
use crate::utils::linalg::{self, Point3};

/// Fractional z above this value is pushed below zero after wrapping.
pub const Z_FIXUP_THRESHOLD: f64 = 0.98;

/// One-step wrap of a fractional component into [0, 1).
///
/// Both tests look at the unwrapped value, so only one correction is ever applied:
/// 2.5 becomes 1.5, not 0.5.
pub fn wrap_once(f: f64) -> f64 {
  let mut w = f;
  if f >= 1.0 {
    w -= 1.0;
  }
  if f < 0.0 {
    w += 1.0;
  }
  w
}

/// Third-axis fix-up applied after [`wrap_once`].
pub fn z_fixup(f: f64) -> f64 {
  if f > Z_FIXUP_THRESHOLD {
    f - 1.0
  } else {
    f
  }
}

/// Wrap all three components, then apply the z fix-up.
pub fn wrap_fractional(frac: Point3) -> Point3 {
  let w = [wrap_once(frac[0]), wrap_once(frac[1]), wrap_once(frac[2])];
  [w[0], w[1], z_fixup(w[2])]
}

/// Translation that moves the reference point onto the centre of the A-B face.
///
/// Only the X and Y of `reference` are used; its Z is taken as zero while the
/// face centre keeps its own Z.
pub fn centering_offset(cell: &Cell, reference: Point3) -> Point3 {
  let point = [reference[0], reference[1], 0.0];
  linalg::sub(point, cell.ab_center())
}

/// Re-centre `positions` in the XY plane of `cell` around `reference`.
///
/// Returns a new coordinate set of the same length and order. Fails with
/// `SingularCell` before producing anything if the cell cannot be inverted.
pub fn center_xy(cell: &Cell, reference: Point3, positions: &[Point3]) -> Result<Vec<Point3>> {
  let d = centering_offset(cell, reference);
  log::debug!(
    "Centering offset: ({:.4}, {:.4}, {:.4})",
    d[0],
    d[1],
    d[2]
  );

  let shifted: Vec<Point3> = positions.iter().map(|&p| linalg::sub(p, d)).collect();
  let wrapped: Vec<Point3> = cell
    .to_fractional(&shifted)?
    .into_iter()
    .map(wrap_fractional)
    .collect();

  Ok(cell.to_cartesian(&wrapped))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::AdjustError;

  fn assert_close(a: Point3, b: Point3, tol: f64) {
    for i in 0..3 {
      assert!(
        (a[i] - b[i]).abs() < tol,
        "component {} differs: {:?} vs {:?}",
        i,
        a,
        b
      );
    }
  }

  #[test]
  fn test_wrap_once_law() {
    assert_eq!(wrap_once(0.0), 0.0);
    assert_eq!(wrap_once(0.5), 0.5);
    assert_eq!(wrap_once(1.0), 0.0);
    assert!((wrap_once(1.25) - 0.25).abs() < 1e-12);
    assert!((wrap_once(-0.25) - 0.75).abs() < 1e-12);

    // Single step, not modulo
    assert!((wrap_once(2.5) - 1.5).abs() < 1e-12);
    assert!((wrap_once(-1.5) + 0.5).abs() < 1e-12);
  }

  #[test]
  fn test_z_fixup() {
    assert!((z_fixup(0.99) + 0.01).abs() < 1e-12);
    assert!((z_fixup(0.981) + 0.019).abs() < 1e-12);
    assert_eq!(z_fixup(0.98), 0.98);
    assert_eq!(z_fixup(0.5), 0.5);
    assert_eq!(z_fixup(0.0), 0.0);
  }

  #[test]
  fn test_fixup_only_touches_third_axis() {
    let w = wrap_fractional([0.99, 0.99, 0.99]);
    assert_eq!(w[0], 0.99);
    assert_eq!(w[1], 0.99);
    assert!((w[2] + 0.01).abs() < 1e-12);
  }

  #[test]
  fn test_centered_box_keeps_inside_positions() {
    let cell = Cell::orthorhombic(10.0, 10.0, 10.0);
    let reference = [5.0, 5.0, 5.0];
    let positions = vec![
      [1.0, 2.0, 3.0],
      [9.5, 0.5, 9.0],
      [0.0, 0.0, 0.0],
      [4.2, 7.7, 9.79],
    ];

    let out = center_xy(&cell, reference, &positions).unwrap();

    assert_eq!(out.len(), positions.len());
    for (p, q) in positions.iter().zip(&out) {
      assert_close(*p, *q, 1e-9);
    }
  }

  #[test]
  fn test_centered_box_moves_top_slab_below_zero() {
    let cell = Cell::orthorhombic(10.0, 10.0, 10.0);
    let out = center_xy(&cell, [5.0, 5.0, 0.0], &[[3.0, 3.0, 9.9]]).unwrap();
    assert_close(out[0], [3.0, 3.0, -0.1], 1e-9);
  }

  #[test]
  fn test_reference_moves_to_face_center() {
    let cell = Cell::orthorhombic(10.0, 10.0, 20.0);
    // Reference atom at (2, 3); it should end up at the A-B face centre (5, 5)
    let reference = [2.0, 3.0, 7.0];
    let out = center_xy(&cell, reference, &[reference, [9.0, 9.0, 7.0]]).unwrap();

    assert_close(out[0], [5.0, 5.0, 7.0], 1e-9);
    // (9, 9) shifted by (+3, +2) leaves the cell on both axes and wraps once
    assert_close(out[1], [2.0, 1.0, 7.0], 1e-9);
  }

  #[test]
  fn test_reference_z_is_ignored() {
    let cell = Cell::orthorhombic(10.0, 10.0, 10.0);
    let positions = vec![[1.0, 1.0, 4.0]];
    let low = center_xy(&cell, [3.0, 4.0, 0.0], &positions).unwrap();
    let high = center_xy(&cell, [3.0, 4.0, 123.0], &positions).unwrap();
    assert_eq!(low, high);
  }

  #[test]
  fn test_face_center_z_leaks_into_offset() {
    // A and B tilted out of plane: the face centre has z = 1, the reference z is dropped
    let cell = Cell::new([[10.0, 0.0, 1.0], [0.0, 10.0, 1.0], [0.0, 0.0, 10.0]]);
    let d = centering_offset(&cell, [5.0, 5.0, 5.0]);
    assert_close(d, [0.0, 0.0, -1.0], 1e-12);
  }

  #[test]
  fn test_far_outlier_is_only_partially_wrapped() {
    let cell = Cell::orthorhombic(10.0, 10.0, 10.0);
    // x fractional 2.5 -> 1.5 after one step
    let out = center_xy(&cell, [5.0, 5.0, 0.0], &[[25.0, 5.0, 5.0]]).unwrap();
    assert_close(out[0], [15.0, 5.0, 5.0], 1e-9);
  }

  #[test]
  fn test_skewed_cell_roundtrip_without_wrap() {
    let cell = Cell::new([[8.0, 0.0, 0.0], [4.0, 6.928, 0.0], [0.0, 0.0, 15.0]]);
    let center = cell.ab_center();
    // Reference already at the face centre: zero shift
    let positions = vec![[6.0, 3.0, 2.0], [7.5, 4.0, 10.0]];
    let out = center_xy(&cell, center, &positions).unwrap();
    for (p, q) in positions.iter().zip(&out) {
      assert_close(*p, *q, 1e-9);
    }
  }

  #[test]
  fn test_singular_cell_fails() {
    let cell = Cell::new([[0.0; 3]; 3]);
    let result = center_xy(&cell, [0.0; 3], &[[1.0, 2.0, 3.0]]);
    assert!(matches!(result, Err(AdjustError::SingularCell)));
  }

  #[test]
  fn test_empty_positions() {
    let cell = Cell::default();
    assert!(center_xy(&cell, [1.0, 1.0, 1.0], &[]).unwrap().is_empty());
  }
}
