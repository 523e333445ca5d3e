// src/ui/dialogs/cell_adjust_dlg.rs

use crate::model::Cell;
use crate::plugin::{self, CellForm};
use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Align, Button, Dialog, DrawingArea, Entry, Grid, Label, Orientation, SpinButton, Window};
use std::cell::RefCell;
use std::rc::Rc;

/// Widgets backing a [`CellForm`].
#[derive(Clone)]
struct CellFields {
  lattice: [[SpinButton; 3]; 3],
  reference: [Entry; 3],
}

impl CellFields {
  fn read(&self) -> CellForm {
    let mut form = CellForm::default();
    for (i, row) in self.lattice.iter().enumerate() {
      for (j, spin) in row.iter().enumerate() {
        form.lattice[i][j] = spin.value();
      }
    }
    for (i, entry) in self.reference.iter().enumerate() {
      form.reference[i] = entry.text().to_string();
    }
    form
  }

  fn write_reference(&self, form: &CellForm) {
    for (entry, text) in self.reference.iter().zip(&form.reference) {
      entry.set_text(text);
    }
  }

  fn set_cell(&self, cell: &Cell) {
    for (row, vec) in self.lattice.iter().zip(cell.lattice.iter()) {
      for (spin, v) in row.iter().zip(vec.iter()) {
        spin.set_value(*v);
      }
    }
  }
}

/// The Cell Adjust tool window. Built once, then hidden and re-presented.
#[derive(Clone)]
pub struct CellAdjustDialog {
  dialog: Dialog,
  fields: CellFields,
}

impl CellAdjustDialog {
  pub fn new(
    parent: &impl IsA<Window>,
    state: Rc<RefCell<AppState>>,
    drawing_area: &DrawingArea,
  ) -> Self {
    let dialog = Dialog::builder()
      .title("Cell Adjust")
      .transient_for(parent)
      .modal(false)
      .hide_on_close(true)
      .default_width(420)
      .build();

    let content = dialog.content_area();
    content.set_margin_top(20);
    content.set_margin_bottom(20);
    content.set_margin_start(20);
    content.set_margin_end(20);
    content.set_spacing(15);

    // --- Lattice vectors ---
    let grid = Grid::new();
    grid.set_row_spacing(8);
    grid.set_column_spacing(8);
    grid.set_halign(Align::Center);

    for (col, axis) in ["x", "y", "z"].iter().enumerate() {
      grid.attach(&Label::new(Some(axis)), col as i32 + 1, 0, 1, 1);
    }

    let make_spin = |row: i32, col: i32| -> SpinButton {
      let s = SpinButton::with_range(-1000.0, 1000.0, 0.1);
      s.set_digits(4);
      grid.attach(&s, col + 1, row + 1, 1, 1);
      s
    };

    let mut rows = Vec::with_capacity(3);
    for (row, name) in ["A", "B", "C"].iter().enumerate() {
      let label = Label::new(Some(name));
      label.set_halign(Align::End);
      grid.attach(&label, 0, row as i32 + 1, 1, 1);
      rows.push([
        make_spin(row as i32, 0),
        make_spin(row as i32, 1),
        make_spin(row as i32, 2),
      ]);
    }
    let lattice: [[SpinButton; 3]; 3] = [rows[0].clone(), rows[1].clone(), rows[2].clone()];

    let draw_btn = Button::with_label("Draw Cell");
    draw_btn.set_halign(Align::Center);

    content.append(&grid);
    content.append(&draw_btn);

    // --- Reference point ---
    let ref_box = gtk4::Box::new(Orientation::Horizontal, 8);
    ref_box.set_halign(Align::Center);
    ref_box.append(&Label::new(Some("Reference")));
    let make_entry = || -> Entry {
      let e = Entry::new();
      e.set_width_chars(11);
      ref_box.append(&e);
      e
    };
    let reference = [make_entry(), make_entry(), make_entry()];

    let pick_btn = Button::with_label("Pick Reference");
    let apply_btn = Button::with_label("Apply Adjustment");
    let btn_box = gtk4::Box::new(Orientation::Horizontal, 8);
    btn_box.set_halign(Align::Center);
    btn_box.append(&pick_btn);
    btn_box.append(&apply_btn);

    content.append(&ref_box);
    content.append(&btn_box);

    let fields = CellFields { lattice, reference };
    fields.set_cell(&state.borrow().initial_cell());

    // --- Signal Handling ---
    let f = fields.clone();
    let st = Rc::downgrade(&state);
    let da = drawing_area.downgrade();
    draw_btn.connect_clicked(move |_| {
      let Some(st) = st.upgrade() else { return };
      plugin::draw_cell(&f.read(), &mut st.borrow_mut().session);
      if let Some(da) = da.upgrade() {
        da.queue_draw();
      }
    });

    let f = fields.clone();
    let st = Rc::downgrade(&state);
    pick_btn.connect_clicked(move |_| {
      let Some(st) = st.upgrade() else { return };
      let mut form = f.read();
      if plugin::pick_reference(&mut form, &st.borrow().session).is_some() {
        f.write_reference(&form);
      }
    });

    let f = fields.clone();
    let st = Rc::downgrade(&state);
    let da = drawing_area.downgrade();
    apply_btn.connect_clicked(move |_| {
      let Some(st) = st.upgrade() else { return };
      let mut form = f.read();
      let result = plugin::apply_adjustment(&mut form, &mut st.borrow_mut().session);
      match result {
        Ok(_) => f.write_reference(&form),
        Err(e) => log::error!("Cell adjustment failed: {}", e),
      }
      if let Some(da) = da.upgrade() {
        da.queue_draw();
      }
    });

    Self { dialog, fields }
  }

  pub fn present(&self) {
    self.dialog.present();
  }

  /// Load new lattice vectors into the form, e.g. after a file with a cell was opened.
  pub fn set_cell(&self, cell: &Cell) {
    self.fields.set_cell(cell);
  }
}
