//! Raised-cell ("3D") preview effect.
//!
//! Each cell gets a two-pixel shadow along its right and bottom edges and a
//! one-pixel highlight along its top and left edges, so the preview reads as
//! an array of raised tiles.

use palette::{Hsl, IntoColor, Srgb};

use crate::types::{Colour, Image};

use super::grid::CellLayout;

/// Lightness change for shadow strips, in percent.
const SHADOW_PERCENT: f32 = -24.0;

/// Lightness change for highlight lines, in percent.
const HIGHLIGHT_PERCENT: f32 = 16.0;

/// Shadow strip thickness in pixels.
const SHADOW_WIDTH: u32 = 2;

/// Apply the raised-cell effect to a pixelated image.
pub fn emboss(image: &Image, layout: &CellLayout) -> Image {
    let mut result = image.clone();

    for row in 0..layout.rows() {
        for column in 0..layout.columns() {
            let (x, y, w, h) = layout.cell_rect(column, row);
            if w == 0 || h == 0 {
                continue;
            }

            // Shadow: right strip below the top margin, bottom strip right of
            // the left margin
            if w > SHADOW_WIDTH && h > SHADOW_WIDTH {
                let right = (x + w - SHADOW_WIDTH, y + SHADOW_WIDTH);
                let bottom = (x + SHADOW_WIDTH, y + h - SHADOW_WIDTH);
                shade_rect(
                    image,
                    &mut result,
                    right,
                    (SHADOW_WIDTH, h - SHADOW_WIDTH),
                    SHADOW_PERCENT,
                );
                shade_rect(
                    image,
                    &mut result,
                    bottom,
                    (w.saturating_sub(SHADOW_WIDTH * 2), SHADOW_WIDTH),
                    SHADOW_PERCENT,
                );
            }

            // Highlight: top row and left column
            shade_rect(image, &mut result, (x, y), (w, 1), HIGHLIGHT_PERCENT);
            shade_rect(
                image,
                &mut result,
                (x, y + 1),
                (1, h.saturating_sub(1)),
                HIGHLIGHT_PERCENT,
            );
        }
    }

    result
}

/// Shade a rectangle of `source` into `target`, clipped to the image.
fn shade_rect(
    source: &Image,
    target: &mut Image,
    (x, y): (u32, u32),
    (w, h): (u32, u32),
    percent: f32,
) {
    for py in y..y.saturating_add(h) {
        for px in x..x.saturating_add(w) {
            if let Some(c) = source.get(px, py) {
                target.put(px, py, adjust_lightness(c, percent));
            }
        }
    }
}

/// Adjust lightness in HSL space.
fn adjust_lightness(colour: Colour, percent: f32) -> Colour {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();

    // Relative to the remaining range in the direction of travel
    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.lightness += (1.0 - hsl.lightness) * delta;
    } else {
        hsl.lightness += hsl.lightness * delta;
    }
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::rgb(
        (rgb_out.red * 255.0).round() as u8,
        (rgb_out.green * 255.0).round() as u8,
        (rgb_out.blue * 255.0).round() as u8,
    )
}
