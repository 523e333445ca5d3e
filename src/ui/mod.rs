pub mod dialogs;
pub mod interactions;

// Re-exports
pub use interactions::setup_interactions;

use dialogs::CellAdjustDialog;

/// Tool windows owned by the main window. Each is created on first use and
/// reused afterwards.
#[derive(Default)]
pub struct Windows {
    pub cell_adjust: Option<CellAdjustDialog>,
}
