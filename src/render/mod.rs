//! Colour reduction pipeline.
//!
//! This module handles pixelating images into cells, reducing them to a
//! small palette, and writing preview images.

mod emboss;
mod grid;
mod pixelate;
mod png;
mod quantize;

pub use emboss::emboss;
pub use grid::{CellLayout, IndexGrid};
pub use pixelate::{average_block, pixelate, pixelate_grid, pixelate_layout};
pub use png::write_png;
pub use quantize::{apply_palette, build_palette, palette_for_image, quantize};
