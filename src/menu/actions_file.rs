// src/menu/actions_file.rs

use crate::state::AppState;
use crate::ui::Windows;
use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, DrawingArea, FileChooserAction, FileChooserNative, FileFilter,
    ResponseType,
};
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Load a structure file into the session and report it on the console.
fn open_path(path: &Path, state: &Rc<RefCell<AppState>>, windows: &Rc<RefCell<Windows>>) {
    let object = match crate::io::load_object(path) {
        Ok(o) => o,
        Err(e) => {
            log::error!("Error loading {}: {}", path.display(), e);
            return;
        }
    };
    let cell = object.cell;
    let n_atoms = object.atoms.len();

    let mut st = state.borrow_mut();
    let name = st.session.load_object(object);
    st.file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    log::info!("Loaded {} ({} atoms) from {}", name, n_atoms, st.file_name);
    log::info!("Objects:\n{}", st.session.structure_summary());

    // A lattice in the file header becomes the dialog's cell, but only for the target object
    if let (Some(cell), Some(dlg)) = (cell, windows.borrow().cell_adjust.as_ref()) {
        if st.session.objects().len() == 1 {
            dlg.set_cell(&cell);
        }
    }
}

pub fn setup(
    app: &Application,
    window: &ApplicationWindow,
    state: Rc<RefCell<AppState>>,
    windows: Rc<RefCell<Windows>>,
    drawing_area: &DrawingArea,
) {
    // --- OPEN ACTION ---
    let open_action = gtk4::gio::SimpleAction::new("open", None);
    let win_weak = window.downgrade();
    let da_weak = drawing_area.downgrade();

    open_action.connect_activate(move |_, _| {
        let win = match win_weak.upgrade() {
            Some(w) => w,
            None => return,
        };

        let dialog = FileChooserNative::new(
            Some("Open Structure File"),
            Some(&win),
            FileChooserAction::Open,
            Some("Open"),
            Some("Cancel"),
        );

        let filter = FileFilter::new();
        filter.set_name(Some("XYZ Files"));
        filter.add_pattern("*.xyz");
        filter.add_pattern("*.extxyz");
        dialog.add_filter(&filter);

        let state_inner = state.clone();
        let windows_inner = windows.clone();
        let da_inner = da_weak.clone();

        dialog.connect_response(move |d, response| {
            if response == ResponseType::Accept {
                if let Some(path) = d.file().and_then(|f| f.path()) {
                    open_path(&path, &state_inner, &windows_inner);
                    if let Some(da) = da_inner.upgrade() {
                        da.queue_draw();
                    }
                }
            }
            d.destroy();
        });
        dialog.show();
    });
    app.add_action(&open_action);

    // --- QUIT ACTION ---
    let quit_action = gtk4::gio::SimpleAction::new("quit", None);
    let app_weak = app.downgrade();
    quit_action.connect_activate(move |_, _| {
        if let Some(app) = app_weak.upgrade() {
            app.quit();
        }
    });
    app.add_action(&quit_action);
}
