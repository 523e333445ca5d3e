pub mod cell_adjust;

pub use cell_adjust::{apply_adjustment, draw_cell, pick_reference, CellForm};
