// src/host.rs
//
// The slice of the viewer the cell-adjust plugin is allowed to touch.

use crate::error::Result;
use crate::model::Cell;
use crate::utils::linalg::Point3;

pub trait Host {
  /// Mean position of the active selection, `None` when nothing is selected.
  fn selection_centroid(&self) -> Option<Point3>;

  /// Ids of the loaded objects, in load order.
  fn list_loaded_object_ids(&self) -> Vec<String>;

  /// Current coordinate set of an object, ordered by rank.
  fn get_coordinates(&self, object: &str) -> Result<Vec<Point3>>;

  /// Move a single atom, addressed by rank.
  fn set_coordinate(&mut self, object: &str, rank: usize, position: Point3) -> Result<()>;

  /// Replace (or create) the wireframe overlay called `name` with the edges of `cell`.
  fn draw_overlay_box(&mut self, name: &str, cell: &Cell);
}
