pub mod cell_adjust_dlg;

pub use cell_adjust_dlg::CellAdjustDialog;
