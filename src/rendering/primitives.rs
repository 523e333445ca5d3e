// src/rendering/primitives.rs

use cairo::RadialGradient;
use std::f64::consts::PI;

pub fn draw_atom_vector(
    cr: &cairo::Context,
    x: f64,
    y: f64,
    radius: f64,
    color: (f64, f64, f64),
) -> Result<(), cairo::Error> {
    let (r, g, b) = color;

    // Highlight offset to the top-left, shadow centred
    let gradient = RadialGradient::new(
        x - radius * 0.3,
        y - radius * 0.3,
        radius * 0.1,
        x,
        y,
        radius,
    );

    gradient.add_color_stop_rgb(0.0, 1.0, 1.0, 1.0);
    gradient.add_color_stop_rgb(0.2, r + 0.2, g + 0.2, b + 0.2);
    gradient.add_color_stop_rgb(1.0, r * 0.6, g * 0.6, b * 0.6);

    cr.set_source(&gradient)?;
    cr.arc(x, y, radius, 0.0, 2.0 * PI);
    cr.fill()?;

    cr.set_source_rgba(0.0, 0.0, 0.0, 0.3);
    cr.set_line_width(radius * 0.05);
    cr.arc(x, y, radius, 0.0, 2.0 * PI);
    cr.stroke()
}

pub fn draw_ring(
    cr: &cairo::Context,
    x: f64,
    y: f64,
    radius: f64,
    color: (f64, f64, f64),
) -> Result<(), cairo::Error> {
    let (r, g, b) = color;
    cr.set_source_rgb(r, g, b);
    cr.set_line_width(3.0);
    cr.arc(x, y, radius + 3.0, 0.0, 2.0 * PI);
    cr.stroke()
}

pub fn draw_segment(
    cr: &cairo::Context,
    p1: [f64; 2],
    p2: [f64; 2],
    color: (f64, f64, f64),
    width: f64,
) -> Result<(), cairo::Error> {
    let (r, g, b) = color;
    cr.set_source_rgb(r, g, b);
    cr.set_line_width(width);
    cr.move_to(p1[0], p1[1]);
    cr.line_to(p2[0], p2[1]);
    cr.stroke()
}
