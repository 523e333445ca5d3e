// src/model/overlay.rs

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
  pub color: (f64, f64, f64),
  pub line_width: f64,
}

impl Default for OverlayStyle {
  fn default() -> Self {
    Self {
      color: (0.0, 0.0, 0.0),
      line_width: 1.0,
    }
  }
}

/// Named line geometry drawn on top of the molecules.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
  pub segments: Vec<[[f64; 3]; 2]>,
  pub style: OverlayStyle,
}
