//! pixcraft - Pixel art building guide generator
//!
//! A library for reducing images to a coarse grid of palette colours and
//! laying the result out as a printable PDF building guide.

pub mod artwork;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use artwork::{Artwork, LegendEntry};
pub use config::{ConfigFile, GridSize};
pub use document::{
    generate_document, plan_tiles, render_document, write_document, write_document_to,
    DocumentBuilder, PageTile,
};
pub use error::{CraftError, Result};
pub use render::{
    apply_palette, build_palette, emboss, palette_for_image, pixelate, pixelate_grid, quantize,
    write_png, CellLayout, IndexGrid,
};
pub use types::{ArtworkConfig, CellSpec, Colour, Image, OutputSize, Palette, RenderStyle};
