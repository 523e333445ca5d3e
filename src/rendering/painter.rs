// src/rendering/painter.rs

use super::primitives::{draw_atom_vector, draw_ring, draw_segment};
use super::scene::{RenderAtom, RenderLine};
use crate::config::RenderStyle;
use crate::model::get_atom_properties;
use std::cmp::Ordering;

// ============================================================================
// OVERLAYS
// ============================================================================

pub fn draw_overlays(cr: &cairo::Context, lines: &[RenderLine]) -> Result<(), cairo::Error> {
    for line in lines {
        draw_segment(cr, line.start, line.end, line.style.color, line.style.line_width)?;
    }
    Ok(())
}

// ============================================================================
// ATOMS
// ============================================================================

pub fn draw_structure(
    cr: &cairo::Context,
    atoms: &[RenderAtom],
    style: &RenderStyle,
    scale: f64,
) -> Result<(), cairo::Error> {
    let mut sorted: Vec<&RenderAtom> = atoms.iter().collect();

    // Far to near
    sorted.sort_by(|a, b| {
        b.screen_pos[2]
            .partial_cmp(&a.screen_pos[2])
            .unwrap_or(Ordering::Equal)
    });

    for atom in sorted {
        let (raw_r, rgb) = get_atom_properties(&atom.element);
        let radius = (raw_r * style.atom_scale * scale).max(2.0);
        let (x, y) = (atom.screen_pos[0], atom.screen_pos[1]);

        draw_atom_vector(cr, x, y, radius, rgb)?;
        if atom.selected {
            draw_ring(cr, x, y, radius, style.selection_color)?;
        }
    }
    Ok(())
}
