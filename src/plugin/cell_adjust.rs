// src/plugin/cell_adjust.rs
//
// Cell Adjust: draw the periodic box, pick a reference point, re-centre the
// first loaded object around it.

use crate::error::{AdjustError, Result};
use crate::host::Host;
use crate::model::Cell;
use crate::physics::center_xy;
use crate::utils::linalg::Point3;

/// Name of the overlay holding the cell wireframe. Redrawing replaces it.
pub const OVERLAY_NAME: &str = "PBC_CELL";

pub const EMPTY_SELECTION_HINT: &str = "First, click over the atom(s) you want.";

/// Values shown in the dialog: nine lattice components and the three
/// reference-point text fields.
#[derive(Clone, Debug, PartialEq)]
pub struct CellForm {
  pub lattice: [[f64; 3]; 3],
  pub reference: [String; 3],
}

impl Default for CellForm {
  fn default() -> Self {
    Self::new(&Cell::default())
  }
}

impl CellForm {
  pub fn new(cell: &Cell) -> Self {
    Self {
      lattice: cell.lattice,
      reference: [String::new(), String::new(), String::new()],
    }
  }

  pub fn cell(&self) -> Cell {
    Cell::new(self.lattice)
  }

  pub fn set_reference(&mut self, p: Point3) {
    self.reference = [
      format_coordinate(p[0]),
      format_coordinate(p[1]),
      format_coordinate(p[2]),
    ];
  }

  /// Parse the reference fields back into a point.
  pub fn reference_point(&self) -> Result<Point3> {
    let mut p = [0.0; 3];
    for (i, axis) in ['x', 'y', 'z'].into_iter().enumerate() {
      let text = &self.reference[i];
      p[i] = text
        .trim()
        .parse::<f64>()
        .map_err(|_| AdjustError::InvalidReference {
          axis,
          text: text.clone(),
        })?;
    }
    Ok(p)
  }
}

/// Fixed width 10, six decimals.
pub fn format_coordinate(v: f64) -> String {
  format!("{:10.6}", v)
}

/// Submit the wireframe of the form's cell as the `PBC_CELL` overlay.
pub fn draw_cell<H: Host + ?Sized>(form: &CellForm, host: &mut H) {
  host.draw_overlay_box(OVERLAY_NAME, &form.cell());
  log::info!("Cell overlay {} drawn", OVERLAY_NAME);
}

/// Copy the selection centroid into the reference fields.
///
/// With nothing selected the fields are left alone and the user is told what to do.
pub fn pick_reference<H: Host + ?Sized>(form: &mut CellForm, host: &H) -> Option<Point3> {
  match host.selection_centroid() {
    Some(p) => {
      form.set_reference(p);
      log::info!(
        "Reference point: ({}, {}, {})",
        form.reference[0].trim(),
        form.reference[1].trim(),
        form.reference[2].trim()
      );
      Some(p)
    }
    None => {
      log::warn!("{}", EMPTY_SELECTION_HINT);
      None
    }
  }
}

/// Re-centre the first loaded object around the reference point and refresh
/// the reference fields. Returns the number of atoms moved.
///
/// Atoms are written one by one; a failure part way leaves the earlier writes in place.
pub fn apply_adjustment<H: Host + ?Sized>(form: &mut CellForm, host: &mut H) -> Result<usize> {
  let cell = form.cell();
  let reference = form.reference_point()?;

  let object = host
    .list_loaded_object_ids()
    .into_iter()
    .next()
    .ok_or(AdjustError::NoObject)?;

  let positions = host.get_coordinates(&object)?;
  let adjusted = center_xy(&cell, reference, &positions)?;

  for (rank, p) in adjusted.iter().enumerate() {
    host.set_coordinate(&object, rank, *p)?;
  }
  log::info!("Re-centred {} atoms of {}", adjusted.len(), object);

  pick_reference(form, host);
  Ok(adjusted.len())
}
