// src/model/session.rs

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::overlay::{Overlay, OverlayStyle};
use super::{Cell, MolObject};
use crate::error::{AdjustError, Result};
use crate::host::Host;
use crate::physics::centroid;
use crate::utils::linalg::Point3;

/// In-memory viewer state: loaded objects, the picked selection and overlays.
#[derive(Default)]
pub struct Session {
  objects: Vec<MolObject>,
  // (object index, rank)
  selection: BTreeSet<(usize, usize)>,
  overlays: BTreeMap<String, Overlay>,
  pub overlay_style: OverlayStyle,
}

impl Session {
  pub fn new(overlay_style: OverlayStyle) -> Self {
    Self {
      overlay_style,
      ..Self::default()
    }
  }

  /// Add an object, renaming it `name_2`, `name_3`... if the name is taken.
  /// Returns the name actually used.
  pub fn load_object(&mut self, mut object: MolObject) -> String {
    let base = object.name.clone();
    let mut n = 1;
    while self.objects.iter().any(|o| o.name == object.name) {
      n += 1;
      object.name = format!("{}_{}", base, n);
    }
    let name = object.name.clone();
    self.objects.push(object);
    name
  }

  pub fn objects(&self) -> &[MolObject] {
    &self.objects
  }

  pub fn overlays(&self) -> &BTreeMap<String, Overlay> {
    &self.overlays
  }

  pub fn is_selected(&self, object: usize, rank: usize) -> bool {
    self.selection.contains(&(object, rank))
  }

  pub fn selection_len(&self) -> usize {
    self.selection.len()
  }

  /// Returns true if the atom is selected after the toggle.
  pub fn toggle_selection(&mut self, object: usize, rank: usize) -> bool {
    if self.selection.remove(&(object, rank)) {
      false
    } else {
      self.selection.insert((object, rank));
      true
    }
  }

  pub fn clear_selection(&mut self) {
    self.selection.clear();
  }

  fn find(&self, name: &str) -> Result<usize> {
    self
      .objects
      .iter()
      .position(|o| o.name == name)
      .ok_or_else(|| AdjustError::UnknownObject(name.to_string()))
  }

  /// Short text report of the loaded objects for the console.
  pub fn structure_summary(&self) -> String {
    let mut out = String::new();
    for (i, obj) in self.objects.iter().enumerate() {
      let mut counts: HashMap<&str, usize> = HashMap::new();
      for atom in &obj.atoms {
        *counts.entry(atom.element.as_str()).or_insert(0) += 1;
      }
      let mut parts: Vec<_> = counts.into_iter().collect();
      parts.sort_by(|a, b| a.0.cmp(b.0));
      let formula = parts
        .iter()
        .map(|(el, count)| format!("{}{}", el, count))
        .collect::<Vec<_>>()
        .join(" ");

      out.push_str(&format!(
        "{:<3} {:<16} {:>6} atoms  {}\n",
        i,
        obj.name,
        obj.atoms.len(),
        formula
      ));
    }
    out
  }
}

impl Host for Session {
  fn selection_centroid(&self) -> Option<Point3> {
    let picked: Vec<Point3> = self
      .selection
      .iter()
      .filter_map(|&(obj, rank)| {
        self
          .objects
          .get(obj)
          .and_then(|o| o.atoms.get(rank))
          .map(|a| a.position)
      })
      .collect();
    centroid(&picked)
  }

  fn list_loaded_object_ids(&self) -> Vec<String> {
    self.objects.iter().map(|o| o.name.clone()).collect()
  }

  fn get_coordinates(&self, object: &str) -> Result<Vec<Point3>> {
    let idx = self.find(object)?;
    Ok(self.objects[idx].coordinates())
  }

  fn set_coordinate(&mut self, object: &str, rank: usize, position: Point3) -> Result<()> {
    let idx = self.find(object)?;
    let atom = self.objects[idx]
      .atoms
      .get_mut(rank)
      .ok_or_else(|| AdjustError::RankOutOfRange {
        object: object.to_string(),
        rank,
      })?;
    atom.position = position;
    Ok(())
  }

  fn draw_overlay_box(&mut self, name: &str, cell: &Cell) {
    let overlay = Overlay {
      segments: cell.edges().to_vec(),
      style: self.overlay_style,
    };
    self.overlays.insert(name.to_string(), overlay);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Atom;

  fn atom(el: &str, p: Point3) -> Atom {
    Atom {
      element: el.to_string(),
      position: p,
    }
  }

  fn water() -> MolObject {
    MolObject::new(
      "water",
      vec![
        atom("O", [0.0, 0.0, 0.0]),
        atom("H", [2.0, 4.0, 6.0]),
        atom("H", [-1.0, 0.0, 0.0]),
      ],
    )
  }

  #[test]
  fn test_selection_centroid() {
    let mut s = Session::default();
    s.load_object(water());
    assert_eq!(s.selection_centroid(), None);

    s.toggle_selection(0, 0);
    s.toggle_selection(0, 1);
    assert_eq!(s.selection_centroid(), Some([1.0, 2.0, 3.0]));

    // Toggling again deselects
    assert!(!s.toggle_selection(0, 1));
    assert_eq!(s.selection_centroid(), Some([0.0, 0.0, 0.0]));

    s.clear_selection();
    assert_eq!(s.selection_len(), 0);
  }

  #[test]
  fn test_object_ids_keep_load_order_and_are_unique() {
    let mut s = Session::default();
    assert_eq!(s.load_object(water()), "water");
    assert_eq!(s.load_object(water()), "water_2");
    assert_eq!(s.list_loaded_object_ids(), vec!["water", "water_2"]);
  }

  #[test]
  fn test_set_coordinate_by_rank() {
    let mut s = Session::default();
    s.load_object(water());
    s.set_coordinate("water", 2, [9.0, 8.0, 7.0]).unwrap();
    assert_eq!(s.get_coordinates("water").unwrap()[2], [9.0, 8.0, 7.0]);

    assert!(matches!(
      s.set_coordinate("water", 3, [0.0; 3]),
      Err(AdjustError::RankOutOfRange { rank: 3, .. })
    ));
    assert!(matches!(
      s.get_coordinates("ice"),
      Err(AdjustError::UnknownObject(_))
    ));
  }

  #[test]
  fn test_overlay_is_replaced_by_name() {
    let mut s = Session::new(OverlayStyle {
      color: (1.0, 0.0, 0.0),
      line_width: 2.0,
    });
    s.draw_overlay_box("PBC_CELL", &Cell::orthorhombic(1.0, 1.0, 1.0));
    s.draw_overlay_box("PBC_CELL", &Cell::orthorhombic(2.0, 2.0, 2.0));

    assert_eq!(s.overlays().len(), 1);
    let overlay = &s.overlays()["PBC_CELL"];
    assert_eq!(overlay.segments.len(), 12);
    assert_eq!(overlay.style.line_width, 2.0);
    assert!(overlay.segments.iter().any(|[_, q]| q == &[2.0, 2.0, 2.0]));
  }

  #[test]
  fn test_structure_summary() {
    let mut s = Session::default();
    s.load_object(water());
    let text = s.structure_summary();
    assert!(text.contains("water"));
    assert!(text.contains("H2 O1"));
  }
}
