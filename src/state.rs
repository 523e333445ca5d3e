// src/state.rs

use crate::config::Config;
use crate::model::{Cell, Session};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub rot_x: f64,
    pub rot_y: f64,
    pub zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rot_x: 0.0,
            rot_y: 0.0,
            zoom: 1.0,
        }
    }
}

pub struct AppState {
    pub session: Session,
    pub view: ViewState,
    pub config: Config,
    pub file_name: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            session: Session::new(config.overlay),
            view: ViewState::default(),
            config,
            file_name: String::new(),
        }
    }

    pub fn load_config(&mut self) {
        let (config, msg) = Config::load();
        log::info!("{}", msg);
        self.session.overlay_style = config.overlay;
        self.config = config;
    }

    /// Cell the Cell Adjust dialog should start with: the lattice of the first
    /// loaded object if its file carried one, otherwise the configured default.
    pub fn initial_cell(&self) -> Cell {
        self.session
            .objects()
            .first()
            .and_then(|o| o.cell)
            .unwrap_or(self.config.default_cell)
    }

    pub fn reset_view(&mut self) {
        self.view = ViewState::default();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MolObject;

    #[test]
    fn test_initial_cell_prefers_loaded_lattice() {
        let mut st = AppState::new();
        assert_eq!(st.initial_cell(), Cell::default());

        let mut obj = MolObject::new("slab", vec![]);
        obj.cell = Some(Cell::orthorhombic(3.0, 4.0, 5.0));
        st.session.load_object(obj);
        assert_eq!(st.initial_cell(), Cell::orthorhombic(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_overlay_style_follows_config() {
        let mut config = Config::default();
        config.overlay.line_width = 4.0;
        let st = AppState::with_config(config);
        assert_eq!(st.session.overlay_style.line_width, 4.0);
    }
}
