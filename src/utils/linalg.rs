// src/utils/linalg.rs

use crate::error::{AdjustError, Result};
use nalgebra::{Matrix3, Vector3};

pub type Point3 = [f64; 3];

/// Build the column basis of a lattice given as rows.
///
/// # Arguments
/// * `lattice` - Lattice vectors as row matrix [[ax, ay, az], [bx, by, bz], [cx, cy, cz]]
///
/// # Returns
/// `Lattice^T`, so that `Cartesian = basis × Fractional`
pub fn column_basis(lattice: [[f64; 3]; 3]) -> Matrix3<f64> {
  Matrix3::from_row_slice(&[
    lattice[0][0],
    lattice[0][1],
    lattice[0][2],
    lattice[1][0],
    lattice[1][1],
    lattice[1][2],
    lattice[2][0],
    lattice[2][1],
    lattice[2][2],
  ])
  .transpose()
}

/// Inverse of the column basis, used for Cartesian -> fractional.
///
/// # Formula
/// ```text
/// Fractional = (Lattice^T)^-1 × Cartesian
/// ```
///
/// Fails with [`AdjustError::SingularCell`] instead of returning zeros.
pub fn fractional_basis(lattice: [[f64; 3]; 3]) -> Result<Matrix3<f64>> {
  let inv = column_basis(lattice)
    .try_inverse()
    .ok_or(AdjustError::SingularCell)?;

  if inv.iter().any(|v| !v.is_finite()) {
    return Err(AdjustError::SingularCell);
  }
  Ok(inv)
}

/// Apply a 3x3 basis to a point.
pub fn apply(basis: &Matrix3<f64>, p: Point3) -> Point3 {
  let v = basis * Vector3::from(p);
  [v.x, v.y, v.z]
}

pub fn add(a: Point3, b: Point3) -> Point3 {
  [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: Point3, b: Point3) -> Point3 {
  [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(a: Point3, s: f64) -> Point3 {
  [a[0] * s, a[1] * s, a[2] * s]
}
