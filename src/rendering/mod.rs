pub mod painter;
pub mod primitives;
pub mod scene;

use crate::state::AppState;

/// Paint the whole viewport: background, atoms, then overlays on top.
pub fn draw_viewport(
    cr: &cairo::Context,
    state: &AppState,
    w: f64,
    h: f64,
) -> Result<(), cairo::Error> {
    let (bg_r, bg_g, bg_b) = state.config.style.background_color;
    cr.set_source_rgb(bg_r, bg_g, bg_b);
    cr.paint()?;

    let (atoms, lines, bounds) = scene::calculate_scene(state, w, h);
    painter::draw_structure(cr, &atoms, &state.config.style, bounds.scale)?;
    painter::draw_overlays(cr, &lines)
}
