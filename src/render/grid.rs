//! Cell grid geometry and per-cell palette indices.
//!
//! A `CellLayout` maps grid cells to pixel rectangles of a source image and
//! fixes the point each cell is sampled at. Pixelation, the legend tally and
//! the grid pages all read cells through the same layout so they agree.

use crate::types::{CellSpec, Colour, Image, Palette};

/// How an image of a given size is divided into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    columns: u32,
    rows: u32,
    cell_width: u32,
    cell_height: u32,
    image_width: u32,
    image_height: u32,
}

impl CellLayout {
    /// Fixed-size cells. Edge cells are clipped to the image, so the grid is
    /// `ceil(width / cell_width)` by `ceil(height / cell_height)`.
    pub fn fixed(image_width: u32, image_height: u32, cell_width: u32, cell_height: u32) -> Self {
        let cell_width = cell_width.max(1);
        let cell_height = cell_height.max(1);
        Self {
            columns: image_width.div_ceil(cell_width),
            rows: image_height.div_ceil(cell_height),
            cell_width,
            cell_height,
            image_width,
            image_height,
        }
    }

    /// A fixed number of columns and rows. Cells are `dim / count` pixels
    /// (at least 1) and the last column and row stretch to the image edge.
    pub fn grid(image_width: u32, image_height: u32, columns: u32, rows: u32) -> Self {
        if image_width == 0 || image_height == 0 {
            return Self::fixed(image_width, image_height, 1, 1);
        }
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            columns,
            rows,
            cell_width: (image_width / columns).max(1),
            cell_height: (image_height / rows).max(1),
            image_width,
            image_height,
        }
    }

    /// Layout for a configured cell specification.
    pub fn for_spec(image_width: u32, image_height: u32, spec: CellSpec) -> Self {
        match spec {
            CellSpec::CellSize(size) => Self::fixed(image_width, image_height, size, size),
            CellSpec::Grid { columns, rows } => Self::grid(image_width, image_height, columns, rows),
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Nominal cell size in pixels (before edge clipping or stretching).
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// Pixel rectangle `(x, y, w, h)` covered by a cell.
    ///
    /// Clipped to the image; cells starting past the edge have zero extent.
    pub fn cell_rect(&self, column: u32, row: u32) -> (u32, u32, u32, u32) {
        let (x, w) = span(column, self.columns, self.cell_width, self.image_width);
        let (y, h) = span(row, self.rows, self.cell_height, self.image_height);
        (x, y, w, h)
    }

    /// Pixel sampled to classify a cell: the nominal cell centre, clamped to
    /// the image. `None` only for an empty image.
    pub fn sample_point(&self, column: u32, row: u32) -> Option<(u32, u32)> {
        if self.image_width == 0 || self.image_height == 0 {
            return None;
        }
        let x = (column * self.cell_width + self.cell_width / 2).min(self.image_width - 1);
        let y = (row * self.cell_height + self.cell_height / 2).min(self.image_height - 1);
        Some((x, y))
    }
}

/// Start and length of cell `index` along one axis.
fn span(index: u32, count: u32, cell: u32, dim: u32) -> (u32, u32) {
    let start = index.saturating_mul(cell);
    if start >= dim {
        return (start, 0);
    }
    let end = if index + 1 == count {
        dim
    } else {
        start.saturating_add(cell).min(dim)
    };
    (start, end - start)
}

/// Palette index of every cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGrid {
    columns: u32,
    rows: u32,
    indices: Vec<usize>,
}

impl IndexGrid {
    /// Classify every cell of `coarse` by sampling it at the layout's sample
    /// points and picking the nearest palette entry.
    pub fn sample(coarse: &Image, layout: &CellLayout, palette: &Palette) -> Self {
        let mut indices = Vec::with_capacity(layout.cell_count());

        for row in 0..layout.rows() {
            for column in 0..layout.columns() {
                let colour = layout
                    .sample_point(column, row)
                    .and_then(|(x, y)| coarse.get(x, y))
                    .unwrap_or(Colour::BLACK);
                indices.push(palette.nearest(colour).unwrap_or(0));
            }
        }

        Self {
            columns: layout.columns(),
            rows: layout.rows(),
            indices,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Palette index of a cell.
    pub fn get(&self, column: u32, row: u32) -> Option<usize> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.indices
            .get(row as usize * self.columns as usize + column as usize)
            .copied()
    }

    /// All indices, row-major.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of cells assigned to each of the first `palette_len` entries.
    pub fn tally(&self, palette_len: usize) -> Vec<usize> {
        let mut counts = vec![0; palette_len];
        for &index in &self.indices {
            if let Some(count) = counts.get_mut(index) {
                *count += 1;
            }
        }
        counts
    }

    /// Render the grid as a one-pixel-per-cell image.
    pub fn to_image(&self, palette: &Palette) -> Image {
        Image::from_fn(self.columns, self.rows, |x, y| {
            self.get(x, y)
                .and_then(|i| palette.get(i))
                .unwrap_or(Colour::BLACK)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_layout_exact() {
        let layout = CellLayout::fixed(100, 100, 10, 10);
        assert_eq!((layout.columns(), layout.rows()), (10, 10));
        assert_eq!(layout.cell_rect(9, 9), (90, 90, 10, 10));
        assert_eq!(layout.sample_point(0, 0), Some((5, 5)));
    }

    #[test]
    fn test_fixed_layout_clips_edge_cells() {
        let layout = CellLayout::fixed(25, 12, 10, 10);
        assert_eq!((layout.columns(), layout.rows()), (3, 2));
        assert_eq!(layout.cell_rect(2, 0), (20, 0, 5, 10));
        assert_eq!(layout.cell_rect(2, 1), (20, 10, 5, 2));
        // Centre of the nominal cell is clamped into the image
        assert_eq!(layout.sample_point(2, 1), Some((24, 11)));
    }

    #[test]
    fn test_grid_layout_stretches_last_cell() {
        let layout = CellLayout::grid(105, 50, 10, 10);
        assert_eq!(layout.cell_size(), (10, 5));
        assert_eq!(layout.cell_rect(0, 0), (0, 0, 10, 5));
        assert_eq!(layout.cell_rect(9, 9), (90, 45, 15, 5));

        let covered: u32 = (0..10).map(|c| layout.cell_rect(c, 0).2).sum();
        assert_eq!(covered, 105);
    }

    #[test]
    fn test_grid_layout_larger_than_image() {
        let layout = CellLayout::grid(4, 4, 10, 10);
        assert_eq!(layout.cell_size(), (1, 1));
        assert_eq!(layout.cell_rect(3, 0), (3, 0, 1, 1));
        assert_eq!(layout.cell_rect(5, 0).2, 0);
        assert_eq!(layout.sample_point(9, 9), Some((3, 3)));
    }

    #[test]
    fn test_empty_image_layout() {
        let layout = CellLayout::grid(0, 0, 50, 50);
        assert_eq!(layout.cell_count(), 0);
        assert_eq!(layout.sample_point(0, 0), None);
    }

    #[test]
    fn test_index_grid_tally_sums_to_cells() {
        let coarse = Image::from_fn(40, 30, |x, _| {
            if x < 20 {
                Colour::rgb(200, 0, 0)
            } else {
                Colour::rgb(0, 0, 200)
            }
        });
        let layout = CellLayout::fixed(40, 30, 10, 10);
        let palette = Palette::new(vec![Colour::rgb(0, 0, 255), Colour::rgb(255, 0, 0)]);
        let grid = IndexGrid::sample(&coarse, &layout, &palette);

        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(3, 2), Some(0));
        assert_eq!(grid.get(4, 0), None);

        let tally = grid.tally(palette.len());
        assert_eq!(tally, vec![6, 6]);
        assert_eq!(tally.iter().sum::<usize>(), layout.cell_count());
    }

    #[test]
    fn test_index_grid_to_image() {
        let coarse = Image::filled(20, 10, Colour::WHITE);
        let layout = CellLayout::fixed(20, 10, 5, 5);
        let palette = Palette::new(vec![Colour::BLACK, Colour::WHITE]);
        let grid = IndexGrid::sample(&coarse, &layout, &palette);

        let img = grid.to_image(&palette);
        assert_eq!(img.size(), (4, 2));
        assert!(img.pixels().iter().all(|&c| c == Colour::WHITE));
    }
}
