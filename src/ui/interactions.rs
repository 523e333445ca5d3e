// src/ui/interactions.rs

use crate::rendering::scene;
use crate::state::AppState;
use gdk4::Key;
use gtk4::glib;
use gtk4::{self as gtk, prelude::*};
use gtk4::{
  ApplicationWindow, EventControllerKey, EventControllerScroll, EventControllerScrollFlags,
  GestureClick, GestureDrag,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Pixels within which a click picks an atom.
const PICK_RADIUS: f64 = 30.0;

/// Index (object, rank) of the atom nearest to a click, if close enough.
pub fn hit_test(atoms: &[scene::RenderAtom], x: f64, y: f64) -> Option<(usize, usize)> {
  let mut best = None;
  let mut min_dist = PICK_RADIUS;

  for atom in atoms {
    let dx = atom.screen_pos[0] - x;
    let dy = atom.screen_pos[1] - y;
    let dist = (dx * dx + dy * dy).sqrt();

    if dist < min_dist {
      min_dist = dist;
      best = Some((atom.object, atom.rank));
    }
  }
  best
}

pub fn setup_interactions(
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  drawing_area: &gtk::DrawingArea,
) {
  // 1. KEYBOARD: Escape clears the selection
  let key_controller = EventControllerKey::new();
  let s = state.clone();
  let da = drawing_area.clone();
  key_controller.connect_key_pressed(move |_, keyval, _keycode, _mods| {
    if keyval == Key::Escape {
      s.borrow_mut().session.clear_selection();
      da.queue_draw();
      return glib::Propagation::Stop;
    }
    glib::Propagation::Proceed
  });
  window.add_controller(key_controller);

  // 2. MOUSE DRAG (rotation)
  let drag = GestureDrag::new();
  let s = state.clone();
  let da = drawing_area.clone();
  let last = Rc::new(RefCell::new((0.0, 0.0)));
  let l = last.clone();
  drag.connect_drag_begin(move |_, _, _| {
    *l.borrow_mut() = (0.0, 0.0);
  });
  drag.connect_drag_update(move |_, x, y| {
    let (px, py) = *last.borrow();
    *last.borrow_mut() = (x, y);
    let mut st = s.borrow_mut();
    st.view.rot_y += (x - px) * 0.5;
    st.view.rot_x += (y - py) * 0.5;
    da.queue_draw();
  });
  drawing_area.add_controller(drag);

  // 3. SCROLL (ZOOM)
  let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
  let s = state.clone();
  let da = drawing_area.clone();
  scroll.connect_scroll(move |_, _, dy| {
    let mut st = s.borrow_mut();
    if dy > 0.0 {
      st.view.zoom *= 0.9;
    } else {
      st.view.zoom *= 1.1;
    }
    da.queue_draw();
    glib::Propagation::Stop
  });
  drawing_area.add_controller(scroll);

  // 4. CLICK (SELECTION)
  let click = GestureClick::new();
  let s = state.clone();
  click.connect_released(move |gesture, n_press, x, y| {
    if n_press != 1 {
      return;
    }
    let widget = gesture.widget();
    let (w, h) = (widget.width() as f64, widget.height() as f64);

    let mut st = s.borrow_mut();
    let (atoms, _, _) = scene::calculate_scene(&st, w, h);

    if let Some((obj, rank)) = hit_test(&atoms, x, y) {
      let on = st.session.toggle_selection(obj, rank);
      log::debug!(
        "{} atom {} of object {} ({} selected)",
        if on { "Selected" } else { "Deselected" },
        rank,
        obj,
        st.session.selection_len()
      );
      widget.queue_draw();
    }
  });
  drawing_area.add_controller(click);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rendering::scene::RenderAtom;

  fn at(x: f64, y: f64, rank: usize) -> RenderAtom {
    RenderAtom {
      screen_pos: [x, y, 0.0],
      element: "C".into(),
      object: 0,
      rank,
      selected: false,
    }
  }

  #[test]
  fn test_hit_test_picks_nearest() {
    let atoms = vec![at(100.0, 100.0, 0), at(110.0, 100.0, 1)];
    assert_eq!(hit_test(&atoms, 108.0, 101.0), Some((0, 1)));
    assert_eq!(hit_test(&atoms, 99.0, 99.0), Some((0, 0)));
  }

  #[test]
  fn test_hit_test_misses_far_clicks() {
    let atoms = vec![at(100.0, 100.0, 0)];
    assert_eq!(hit_test(&atoms, 200.0, 200.0), None);
  }
}
