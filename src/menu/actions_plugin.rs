// src/menu/actions_plugin.rs

use crate::state::AppState;
use crate::ui::dialogs::CellAdjustDialog;
use crate::ui::Windows;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  windows: Rc<RefCell<Windows>>,
  drawing_area: &DrawingArea,
) {
  let action = gtk4::gio::SimpleAction::new("cell_adjust", None);
  let win_weak = window.downgrade();
  let da_weak = drawing_area.downgrade();

  action.connect_activate(move |_, _| {
    let (Some(win), Some(da)) = (win_weak.upgrade(), da_weak.upgrade()) else {
      return;
    };

    let mut w = windows.borrow_mut();
    let dialog = w
      .cell_adjust
      .get_or_insert_with(|| CellAdjustDialog::new(&win, state.clone(), &da));
    dialog.present();
  });
  app.add_action(&action);
}
