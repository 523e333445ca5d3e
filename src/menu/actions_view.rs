// src/menu/actions_view.rs

use crate::state::AppState;
use gtk4::prelude::*;
use gtk4::{Application, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(app: &Application, state: Rc<RefCell<AppState>>, drawing_area: &DrawingArea) {
    // 1. Restore View (Reset)
    let act_reset = gtk4::gio::SimpleAction::new("view_reset", None);
    let s_reset = state.clone();
    let da_reset = drawing_area.downgrade();

    act_reset.connect_activate(move |_, _| {
        s_reset.borrow_mut().reset_view();
        if let Some(da) = da_reset.upgrade() {
            da.queue_draw();
        }
    });
    app.add_action(&act_reset);

    // 2. Clear Selection
    let act_clear = gtk4::gio::SimpleAction::new("clear_selection", None);
    let s_clear = state;
    let da_clear = drawing_area.downgrade();

    act_clear.connect_activate(move |_, _| {
        s_clear.borrow_mut().session.clear_selection();
        log::info!("Selection cleared");
        if let Some(da) = da_clear.upgrade() {
            da.queue_draw();
        }
    });
    app.add_action(&act_clear);
}
