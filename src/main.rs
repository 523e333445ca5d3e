use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{Application, ApplicationWindow, DrawingArea, Frame, Orientation, ScrolledWindow, TextView};
use std::cell::RefCell;
use std::rc::Rc;

pub mod config;
pub mod error;
pub mod host;
pub mod io;
pub mod menu;
pub mod model;
pub mod physics;
pub mod plugin;
pub mod rendering;
pub mod state;
pub mod ui;
pub mod utils;

use state::AppState;
use ui::interactions::setup_interactions;
use ui::Windows;

fn main() {
    let app = Application::builder()
        .application_id("org.celladjust.celladjust")
        .build();

    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &Application) {
    let window = ApplicationWindow::builder()
        .application(app)
        .title("CellAdjust")
        .default_width(1100)
        .default_height(800)
        .build();

    // Console first, so everything after this is logged into it
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    if let Err(e) = utils::logger::init(&console_view, log::LevelFilter::Debug) {
        eprintln!("Logger already installed: {}", e);
    }

    let mut initial_state = AppState::new();
    initial_state.load_config();
    let state = Rc::new(RefCell::new(initial_state));
    let windows = Rc::new(RefCell::new(Windows::default()));

    // 1. TOP LEVEL: Vertical Box (Menu on top, viewport and console below)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    let drawing_area = DrawingArea::new();
    drawing_area.set_vexpand(true);

    let info_frame = Frame::new(None);
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(150)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    // 2. Menu Bar
    let menu_bar = menu::build_menu_and_actions(
        app,
        &window,
        state.clone(),
        windows,
        &drawing_area,
    );

    root_vbox.append(&menu_bar);
    root_vbox.append(&drawing_area);
    root_vbox.append(&info_frame);

    // --- Setup Logic ---
    setup_interactions(&window, state.clone(), &drawing_area);

    let s = state.clone();
    drawing_area.set_draw_func(move |_, cr, w, h| {
        let st = s.borrow();
        if let Err(e) = rendering::draw_viewport(cr, &st, w as f64, h as f64) {
            log::error!("Drawing failed: {}", e);
        }
    });

    // Write the settings back so users find a file to edit
    let s = state;
    app.connect_shutdown(move |_| {
        log::debug!("{}", s.borrow().config.save());
    });

    log::info!("Open a structure, then use Plugin > Cell Adjust...");
    window.present();
}
