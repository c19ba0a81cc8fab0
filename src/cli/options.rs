//! Guide settings shared by every command that processes an image.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{clamp_warning, colour_count_warning, ConfigFile, GridSize};
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::types::{ArtworkConfig, OutputSize, RenderStyle, CELL_SIZE_RANGE, GRID_RANGE};

/// Settings resolved from defaults, the config file and flags, in that order.
#[derive(Args, Debug, Clone, Default)]
pub struct GuideArgs {
    /// Square cell size in source pixels (2-50)
    #[arg(long, conflicts_with = "grid")]
    pub cell_size: Option<u32>,

    /// Grid dimensions in cells, e.g. 50x50 (10-200 each)
    #[arg(long, value_name = "WxH")]
    pub grid: Option<GridSize>,

    /// Palette size (8, 16 or 32)
    #[arg(long, visible_alias = "colours", value_name = "N")]
    pub colors: Option<u32>,

    /// Rendering style: flat (2d) or embossed (3d)
    #[arg(long)]
    pub style: Option<RenderStyle>,

    /// Printed size: a4, a3, a2, a1 or a0
    #[arg(long)]
    pub size: Option<OutputSize>,

    /// Title printed on the first page
    #[arg(long)]
    pub title: Option<String>,

    /// Embed a preview image on the title page
    #[arg(long)]
    pub thumbnail: bool,

    /// Config file (defaults to pixcraft.yaml in the working directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GuideArgs {
    /// Build the guide settings, looking for pixcraft.yaml in `dir`.
    ///
    /// Clamped or rejected values are reported as warnings.
    pub fn resolve(&self, dir: &Path, printer: &Printer) -> Result<ArtworkConfig> {
        let mut config = ArtworkConfig::default();

        if let Some(path) = ConfigFile::locate(self.config.as_deref(), dir) {
            printer.detail("Loading", &display_path(&path));
            let file = ConfigFile::load(&path)?;
            for warning in file.apply(&mut config) {
                printer.warning("Warning", &format!("{}: {}", display_path(&path), warning));
            }
        }

        for warning in self.apply(&mut config) {
            printer.warning("Warning", &warning);
        }

        Ok(config)
    }

    /// Apply the flags that were given over `config`.
    fn apply(&self, config: &mut ArtworkConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(size) = self.cell_size {
            config.set_cell_size(size);
            warnings.extend(clamp_warning("--cell-size", size, CELL_SIZE_RANGE));
        }

        if let Some(grid) = self.grid {
            config.set_grid(grid.width, grid.height);
            warnings.extend(clamp_warning("--grid width", grid.width, GRID_RANGE));
            warnings.extend(clamp_warning("--grid height", grid.height, GRID_RANGE));
        }

        if let Some(colors) = self.colors {
            warnings.extend(colour_count_warning(config, colors));
        }

        if let Some(style) = self.style {
            config.set_style(style);
        }

        if let Some(size) = self.size {
            config.set_output_size(size);
        }

        if let Some(title) = &self.title {
            config.set_title(title.clone());
        }

        if self.thumbnail {
            config.set_thumbnail(true);
        }

        warnings
    }
}
