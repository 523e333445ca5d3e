// src/model/cell.rs

use crate::error::Result;
use crate::utils::linalg::{self, Point3};
use serde::{Deserialize, Serialize};

/// Periodic simulation cell. Rows are the lattice vectors A, B, C.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
  pub lattice: [[f64; 3]; 3],
}

impl Default for Cell {
  fn default() -> Self {
    Self::orthorhombic(10.0, 10.0, 10.0)
  }
}

impl Cell {
  pub fn new(lattice: [[f64; 3]; 3]) -> Self {
    Self { lattice }
  }

  pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
    Self::new([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
  }

  pub fn a(&self) -> Point3 {
    self.lattice[0]
  }

  pub fn b(&self) -> Point3 {
    self.lattice[1]
  }

  pub fn c(&self) -> Point3 {
    self.lattice[2]
  }

  /// Midpoint of A and B: the centre of the cell face spanned by the first two vectors.
  pub fn ab_center(&self) -> Point3 {
    linalg::scale(linalg::add(self.a(), self.b()), 0.5)
  }

  /// Cartesian -> fractional for a whole coordinate set (one inversion).
  pub fn to_fractional(&self, positions: &[Point3]) -> Result<Vec<Point3>> {
    let inv = linalg::fractional_basis(self.lattice)?;
    Ok(positions.iter().map(|&p| linalg::apply(&inv, p)).collect())
  }

  /// Fractional -> Cartesian for a whole coordinate set.
  pub fn to_cartesian(&self, fractional: &[Point3]) -> Vec<Point3> {
    let basis = linalg::column_basis(self.lattice);
    fractional.iter().map(|&f| linalg::apply(&basis, f)).collect()
  }

  /// The 12 edges of the parallelepiped spanned from the origin.
  pub fn edges(&self) -> [[Point3; 2]; 12] {
    let o = [0.0; 3];
    let a = self.a();
    let b = self.b();
    let c = self.c();
    let ab = linalg::add(a, b);
    let ac = linalg::add(a, c);
    let bc = linalg::add(b, c);
    let abc = linalg::add(ab, c);

    [
      [o, a],
      [o, b],
      [o, c],
      [a, ab],
      [b, ab],
      [c, ac],
      [c, bc],
      [b, bc],
      [bc, abc],
      [abc, ac],
      [a, ac],
      [ab, abc],
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::AdjustError;

  #[test]
  fn test_edges_cover_all_corners() {
    let cell = Cell::new([[2.0, 0.0, 0.0], [1.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
    let edges = cell.edges();
    assert_eq!(edges.len(), 12);

    let mut corners: Vec<Point3> = Vec::new();
    for [p, q] in edges {
      for v in [p, q] {
        if !corners.contains(&v) {
          corners.push(v);
        }
      }
    }
    assert_eq!(corners.len(), 8);
    assert!(corners.contains(&[3.0, 3.0, 4.0]));

    // Every corner of a hexahedron touches exactly three edges
    for corner in &corners {
      let degree = edges.iter().filter(|[p, q]| p == corner || q == corner).count();
      assert_eq!(degree, 3);
    }
  }

  #[test]
  fn test_zero_cell_draws_degenerate_box() {
    let cell = Cell::new([[0.0; 3]; 3]);
    assert!(cell.edges().iter().all(|[p, q]| p == &[0.0; 3] && q == &[0.0; 3]));
  }

  #[test]
  fn test_fractional_roundtrip() {
    let cell = Cell::new([[5.0, 0.0, 0.0], [2.5, 4.33, 0.0], [0.0, 0.0, 12.0]]);
    let positions = vec![[1.0, 2.0, 3.0], [-4.0, 7.5, 20.0]];

    let frac = cell.to_fractional(&positions).unwrap();
    let back = cell.to_cartesian(&frac);

    for (p, q) in positions.iter().zip(&back) {
      for i in 0..3 {
        assert!((p[i] - q[i]).abs() < 1e-10);
      }
    }
  }

  #[test]
  fn test_singular_cell_fails() {
    let cell = Cell::new([[0.0; 3]; 3]);
    let result = cell.to_fractional(&[[1.0, 1.0, 1.0]]);
    assert!(matches!(result, Err(AdjustError::SingularCell)));
  }

  #[test]
  fn test_ab_center() {
    let cell = Cell::new([[10.0, 0.0, 0.0], [0.0, 8.0, 0.0], [0.0, 0.0, 30.0]]);
    assert_eq!(cell.ab_center(), [5.0, 4.0, 0.0]);
  }
}
