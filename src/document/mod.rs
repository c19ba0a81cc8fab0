//! Building guide documents.
//!
//! A guide is a title page, a legend page and one grid page per sheet tile,
//! all drawn from a single `Artwork` so the legend counts and grid codes
//! agree.

mod content;
mod pages;
mod tiles;
mod writer;

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::artwork::Artwork;
use crate::error::{CraftError, Result};
use crate::types::{ArtworkConfig, Image};

pub use content::{encode_text, ContentProgram, Op};
pub use pages::{grid_page, legend_page, title_page, MARGIN, THUMBNAIL_NAME};
pub use tiles::{plan_tiles, PageTile};
pub use writer::{DocumentBuilder, CATALOG_ID, FONT_ID, PAGES_ID, PAGE_HEIGHT, PAGE_WIDTH};

/// Generate a complete guide for `image`.
pub fn generate_document(image: &Image, config: &ArtworkConfig) -> Vec<u8> {
    let artwork = Artwork::prepare(image, config);
    render_document(&artwork, config)
}

/// Lay out and encode a guide for already prepared artwork.
pub fn render_document(artwork: &Artwork, config: &ArtworkConfig) -> Vec<u8> {
    let (columns, rows) = artwork.grid_size();
    let tiles = plan_tiles(columns, rows, config.output_size());
    let page_count = 2 + tiles.len();

    let mut doc = DocumentBuilder::new();

    let thumbnail = config.thumbnail() && columns > 0 && rows > 0;
    let mut title_images = Vec::new();
    if thumbnail {
        let preview = artwork.cells().to_image(artwork.palette()).to_rgb_image();
        let id = doc.add_image(preview.width(), preview.height(), preview.as_raw());
        title_images.push((THUMBNAIL_NAME, id));
    }

    let title = title_page(config, artwork, page_count, thumbnail);
    doc.add_page(&title.encode(), &title_images);

    let legend = legend_page(config, artwork);
    doc.add_page(&legend.encode(), &[]);

    for tile in &tiles {
        let grid = grid_page(artwork, tile);
        doc.add_page(&grid.encode(), &[]);
    }

    doc.finish()
}

/// Generate a guide and write it to any byte sink.
pub fn write_document_to<W: Write>(image: &Image, config: &ArtworkConfig, mut out: W) -> Result<()> {
    let bytes = generate_document(image, config);
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}

/// Generate a guide and write it to `path`.
///
/// The document is written to a temporary file next to `path` and moved into
/// place once complete, so a failure never leaves a partial file behind.
pub fn write_document(image: &Image, config: &ArtworkConfig, path: &Path) -> Result<()> {
    let bytes = generate_document(image, config);
    persist(&bytes, path)
}

/// Write bytes to `path` through a temporary file in the same directory.
pub(crate) fn persist(bytes: &[u8], path: &Path) -> Result<()> {
    let write_err = |e: std::io::Error| CraftError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(bytes).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
