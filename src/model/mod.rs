//src/model/mod.rs
pub mod cell;
pub mod elements;
pub mod overlay;
pub mod session;
pub mod structure;

// Re-exports for cleaner imports
pub use cell::Cell;
pub use elements::get_atom_properties;
pub use overlay::{Overlay, OverlayStyle};
pub use session::Session;
pub use structure::{Atom, MolObject};
