// src/menu/mod.rs

use crate::state::AppState;
use crate::ui::Windows;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, DrawingArea};
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;
pub mod actions_plugin;
pub mod actions_view;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  windows: Rc<RefCell<Windows>>,
  drawing_area: &DrawingArea,
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app, window, state.clone(), windows.clone(), drawing_area);
  actions_view::setup(app, state.clone(), drawing_area);
  actions_plugin::setup(app, window, state.clone(), windows, drawing_area);
  actions_help::setup(app, window);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.open", &["<Primary>o"]);
  app.set_accels_for_action("app.quit", &["<Primary>q"]);
  app.set_accels_for_action("app.view_reset", &["<Primary>r"]);
  app.set_accels_for_action("app.clear_selection", &["<Primary><Shift>d"]);
  app.set_accels_for_action("app.cell_adjust", &["<Primary><Shift>a"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  file_menu.append(Some("Open..."), Some("app.open"));
  file_menu.append(Some("Quit"), Some("app.quit"));
  root_model.append_submenu(Some("File"), &file_menu);

  // --- VIEW MENU ---
  let view_menu = gtk4::gio::Menu::new();
  view_menu.append(Some("Restore View"), Some("app.view_reset"));
  view_menu.append(Some("Clear Selection"), Some("app.clear_selection"));
  root_model.append_submenu(Some("View"), &view_menu);

  // --- PLUGIN MENU ---
  let plugin_menu = gtk4::gio::Menu::new();
  plugin_menu.append(Some("Cell Adjust..."), Some("app.cell_adjust"));
  root_model.append_submenu(Some("Plugin"), &plugin_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}
