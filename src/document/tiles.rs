//! Splitting a cell grid across printed sheets.

use crate::types::OutputSize;

/// One sheet's share of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTile {
    /// First column owned by this tile.
    pub x: u32,
    /// First row owned by this tile.
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Zero-based position in row-major order.
    pub index: u32,
    pub total: u32,
}

impl PageTile {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive end column.
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive end row.
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    pub fn contains(&self, column: u32, row: u32) -> bool {
        column >= self.x && column < self.end_x() && row >= self.y && row < self.end_y()
    }
}

/// Plan the tiles for a `grid_width` x `grid_height` grid printed at `size`.
///
/// A4 prints on one sheet. Larger sizes are split into as many A4 sheets as
/// needed across and down, each owning `ceil(grid / sheets)` cells per axis.
/// Tiles at the far edges are clamped to the grid and may be empty when the
/// grid is smaller than the sheet count.
pub fn plan_tiles(grid_width: u32, grid_height: u32, size: OutputSize) -> Vec<PageTile> {
    let (tiles_x, tiles_y) = size.sheets();
    let per_x = grid_width.div_ceil(tiles_x);
    let per_y = grid_height.div_ceil(tiles_y);
    let total = tiles_x * tiles_y;

    let mut tiles = Vec::with_capacity(total as usize);
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x = (tx * per_x).min(grid_width);
            let y = (ty * per_y).min(grid_height);
            tiles.push(PageTile {
                x,
                y,
                width: per_x.min(grid_width - x),
                height: per_y.min(grid_height - y),
                index: ty * tiles_x + tx,
                total,
            });
        }
    }
    tiles
}
