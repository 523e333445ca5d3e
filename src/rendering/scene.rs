// src/rendering/scene.rs

use crate::model::OverlayStyle;
use crate::state::AppState;

// Used by interactions.rs for hit-testing and by painter.rs for drawing.
pub struct RenderAtom {
  pub screen_pos: [f64; 3], // x, y, z (depth)
  pub element: String,
  pub object: usize,
  pub rank: usize,
  pub selected: bool,
}

pub struct RenderLine {
  pub start: [f64; 2],
  pub end: [f64; 2],
  pub style: OverlayStyle,
}

pub struct SceneBounds {
  pub scale: f64,
}

/// Project every atom and overlay segment to window pixels.
pub fn calculate_scene(
  state: &AppState,
  win_w: f64,
  win_h: f64,
) -> (Vec<RenderAtom>, Vec<RenderLine>, SceneBounds) {
  let session = &state.session;

  // 1. Setup Rotation (Degrees -> Radians)
  let (sin_x, cos_x) = state.view.rot_x.to_radians().sin_cos();
  let (sin_y, cos_y) = state.view.rot_y.to_radians().sin_cos();

  let center = rotation_center(state);

  // Rotation Closure: X -> Y
  let rotate = |p: [f64; 3]| -> [f64; 3] {
    let x = p[0] - center[0];
    let y = p[1] - center[1];
    let z = p[2] - center[2];

    let y1 = y * cos_x - z * sin_x;
    let z1 = y * sin_x + z * cos_x;

    let x2 = x * cos_y - z1 * sin_y;
    let z2 = x * sin_y + z1 * cos_y;

    [x2, y1, z2]
  };

  let mut min_x = f64::MAX;
  let mut max_x = f64::MIN;
  let mut min_y = f64::MAX;
  let mut max_y = f64::MIN;
  let mut grow = |r: [f64; 3]| {
    min_x = min_x.min(r[0]);
    max_x = max_x.max(r[0]);
    min_y = min_y.min(r[1]);
    max_y = max_y.max(r[1]);
  };

  // --- 2. Atoms ---
  let mut render_atoms = Vec::new();
  for (oi, obj) in session.objects().iter().enumerate() {
    for (rank, atom) in obj.atoms.iter().enumerate() {
      let r = rotate(atom.position);
      grow(r);
      render_atoms.push(RenderAtom {
        screen_pos: r, // Rotated, not yet scaled to pixels
        element: atom.element.clone(),
        object: oi,
        rank,
        selected: session.is_selected(oi, rank),
      });
    }
  }

  // --- 3. Overlay segments ---
  let mut raw_lines = Vec::new();
  for overlay in session.overlays().values() {
    for [p, q] in &overlay.segments {
      let (a, b) = (rotate(*p), rotate(*q));
      grow(a);
      grow(b);
      raw_lines.push((a, b, overlay.style));
    }
  }

  if min_x > max_x {
    return (vec![], vec![], SceneBounds { scale: 1.0 });
  }

  // --- 4. Scaling to Pixels ---
  let model_w = (max_x - min_x).max(1.0);
  let model_h = (max_y - min_y).max(1.0);
  let margin = 0.8;
  let scale = ((win_w * margin) / model_w).min((win_h * margin) / model_h) * state.view.zoom;

  let box_cx = (min_x + max_x) / 2.0;
  let box_cy = (min_y + max_y) / 2.0;
  let win_cx = win_w / 2.0;
  let win_cy = win_h / 2.0;

  let to_screen = |p: [f64; 3]| -> [f64; 2] {
    [
      (p[0] - box_cx) * scale + win_cx,
      (p[1] - box_cy) * scale + win_cy,
    ]
  };

  // --- 5. World -> Pixel ---
  for atom in &mut render_atoms {
    let s = to_screen(atom.screen_pos);
    atom.screen_pos[0] = s[0];
    atom.screen_pos[1] = s[1];
  }

  let lines = raw_lines
    .into_iter()
    .map(|(a, b, style)| RenderLine {
      start: to_screen(a),
      end: to_screen(b),
      style,
    })
    .collect();

  (render_atoms, lines, SceneBounds { scale })
}

fn rotation_center(state: &AppState) -> [f64; 3] {
  let mut sum = [0.0; 3];
  let mut n = 0usize;
  for obj in state.session.objects() {
    for a in &obj.atoms {
      sum[0] += a.position[0];
      sum[1] += a.position[1];
      sum[2] += a.position[2];
      n += 1;
    }
  }
  if n > 0 {
    let n = n as f64;
    return [sum[0] / n, sum[1] / n, sum[2] / n];
  }
  [0.0; 3]
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::host::Host;
  use crate::model::{Atom, Cell, MolObject};

  fn state_with_pair() -> AppState {
    let mut st = AppState::new();
    st.session.load_object(MolObject::new(
      "pair",
      vec![
        Atom {
          element: "C".into(),
          position: [0.0, 0.0, 0.0],
        },
        Atom {
          element: "O".into(),
          position: [4.0, 0.0, 0.0],
        },
      ],
    ));
    st
  }

  #[test]
  fn test_empty_session() {
    let st = AppState::new();
    let (atoms, lines, _) = calculate_scene(&st, 800.0, 600.0);
    assert!(atoms.is_empty());
    assert!(lines.is_empty());
  }

  #[test]
  fn test_atoms_fit_in_window() {
    let mut st = state_with_pair();
    st.session.toggle_selection(0, 1);
    let (atoms, _, bounds) = calculate_scene(&st, 800.0, 600.0);

    assert_eq!(atoms.len(), 2);
    for a in &atoms {
      assert!(a.screen_pos[0] >= 0.0 && a.screen_pos[0] <= 800.0);
      assert!(a.screen_pos[1] >= 0.0 && a.screen_pos[1] <= 600.0);
    }
    // 4 Å across 80% of 800 px
    assert!((bounds.scale - 160.0).abs() < 1e-9);
    assert!(atoms.iter().any(|a| a.rank == 1 && a.selected));
  }

  #[test]
  fn test_overlay_lines_are_projected() {
    let mut st = state_with_pair();
    st.session.draw_overlay_box("PBC_CELL", &Cell::orthorhombic(4.0, 4.0, 4.0));
    let (_, lines, _) = calculate_scene(&st, 400.0, 400.0);
    assert_eq!(lines.len(), 12);
  }
}
