//! Binary PPM (P6) image output.

use crate::material::Color;
use crate::renderer::ImageBuffer;
use std::io::{self, Write};

/// Convert a linear component to gamma space (gamma 2).
fn linear_to_gamma(component: f32) -> f32 {
    if component > 0.0 {
        component.sqrt()
    } else {
        0.0
    }
}

/// Map one linear component to an output byte: gamma, clamp, round.
fn to_byte(component: f32) -> u8 {
    (255.0 * linear_to_gamma(component).clamp(0.0, 1.0)).round() as u8
}

/// Gamma-corrected 8-bit RGB triple for one linear pixel.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Write the image as binary PPM: a `P6` header followed by one RGB
/// triple per pixel in row-major order.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    for pixel in &image.pixels {
        writer.write_all(&color_to_rgb(*pixel))?;
    }
    Ok(())
}
