//! One guide's worth of reduced artwork.
//!
//! `Artwork::prepare` runs the whole colour reduction for a request:
//! pixelate into cells, build the palette from the coarse image, then
//! classify every cell. The legend and the grid pages both read from the
//! resulting `IndexGrid`.

use crate::render::{
    apply_palette, emboss, palette_for_image, pixelate_layout, CellLayout, IndexGrid,
};
use crate::types::{ArtworkConfig, Colour, Image, Palette};

/// A palette entry with its letter code and cell count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub code: String,
    pub colour: Colour,
    pub count: usize,
}

/// Reduced artwork: layout, coarse image, palette and per-cell indices.
#[derive(Debug, Clone)]
pub struct Artwork {
    layout: CellLayout,
    coarse: Image,
    palette: Palette,
    cells: IndexGrid,
}

impl Artwork {
    /// Run the colour reduction for `image` with `config`.
    pub fn prepare(image: &Image, config: &ArtworkConfig) -> Self {
        let layout = CellLayout::for_spec(image.width(), image.height(), config.cells());
        let coarse = pixelate_layout(image, &layout);
        let palette = palette_for_image(&coarse, config.colour_count() as usize);
        let cells = IndexGrid::sample(&coarse, &layout, &palette);

        Self {
            layout,
            coarse,
            palette,
            cells,
        }
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// The pixelated image, before palette mapping.
    pub fn coarse(&self) -> &Image {
        &self.coarse
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn cells(&self) -> &IndexGrid {
        &self.cells
    }

    /// Grid dimensions in cells.
    pub fn grid_size(&self) -> (u32, u32) {
        (self.cells.columns(), self.cells.rows())
    }

    /// Palette entries with codes and the number of cells using each.
    pub fn legend(&self) -> Vec<LegendEntry> {
        let counts = self.cells.tally(self.palette.len());
        self.palette
            .iter()
            .zip(counts)
            .enumerate()
            .map(|(i, (colour, count))| LegendEntry {
                code: Palette::code(i),
                colour,
                count,
            })
            .collect()
    }

    /// Full-resolution preview: the coarse image mapped to the palette, with
    /// the raised-cell effect for embossed guides.
    pub fn display_image(&self, config: &ArtworkConfig) -> Image {
        let quantized = apply_palette(&self.coarse, &self.palette);
        if config.style().is_embossed() {
            emboss(&quantized, &self.layout)
        } else {
            quantized
        }
    }
}
