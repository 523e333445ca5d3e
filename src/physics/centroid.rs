// src/physics/centroid.rs

use crate::utils::linalg::Point3;

/// Arithmetic mean of a set of points. `None` for an empty set.
pub fn centroid(points: &[Point3]) -> Option<Point3> {
  match points {
    [] => None,
    [single] => Some(*single),
    _ => {
      let mut sum = [0.0; 3];
      for p in points {
        sum[0] += p[0];
        sum[1] += p[1];
        sum[2] += p[2];
      }
      let n = points.len() as f64;
      Some([sum[0] / n, sum[1] / n, sum[2] / n])
    }
  }
}
