//! Configuration file (pixcraft.yaml) parsing.
//!
//! A config file holds default guide settings. Every field is optional;
//! values present in the file are applied over the built-in defaults through
//! the same clamping setters the command line uses.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CraftError, Result};
use crate::types::{
    ArtworkConfig, OutputSize, RenderStyle, ALLOWED_COLOUR_COUNTS, CELL_SIZE_RANGE, GRID_RANGE,
};

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "pixcraft.yaml";

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for GridSize {
    type Err = String;

    /// Parse `WxH`, e.g. `64x48`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Invalid grid '{}' (expected WIDTHxHEIGHT, e.g. 50x50)", s))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid grid dimension '{}' in '{}'", v, s))
        };
        Ok(GridSize {
            width: parse(w)?,
            height: parse(h)?,
        })
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Settings loaded from pixcraft.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Square cell size in source pixels.
    pub cell_size: Option<u32>,

    /// Fixed grid dimensions. Takes precedence over `cell_size`.
    pub grid: Option<GridSize>,

    /// Palette size (8, 16 or 32).
    pub colors: Option<u32>,

    pub style: Option<RenderStyle>,

    /// Printed size (a4 to a0).
    pub size: Option<OutputSize>,

    pub title: Option<String>,

    /// Embed a preview image on the title page.
    pub thumbnail: Option<bool>,
}

impl ConfigFile {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CraftError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse a config file from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty or comment-only file is valid and sets nothing
        if content.lines().all(|l| {
            let l = l.trim();
            l.is_empty() || l.starts_with('#')
        }) {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| CraftError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// The config file to use: `explicit` when given, else pixcraft.yaml in
    /// `dir` if it exists.
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let candidate = dir.join(CONFIG_FILENAME);
        candidate.is_file().then_some(candidate)
    }

    /// Apply every value present in the file to `config`.
    ///
    /// Returns a warning for each value that was clamped or rejected.
    pub fn apply(&self, config: &mut ArtworkConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(size) = self.cell_size {
            config.set_cell_size(size);
            warnings.extend(clamp_warning("cell_size", size, CELL_SIZE_RANGE));
        }

        if let Some(grid) = self.grid {
            if self.cell_size.is_some() {
                warnings.push("both cell_size and grid are set; using grid".to_string());
            }
            config.set_grid(grid.width, grid.height);
            warnings.extend(clamp_warning("grid width", grid.width, GRID_RANGE));
            warnings.extend(clamp_warning("grid height", grid.height, GRID_RANGE));
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

        if let Some(thumbnail) = self.thumbnail {
            config.set_thumbnail(thumbnail);
        }

        warnings
    }
}

/// Set the colour count, describing the rejection if `count` is not allowed.
pub fn colour_count_warning(config: &mut ArtworkConfig, count: u32) -> Option<String> {
    if config.set_colour_count(count) {
        return None;
    }
    let allowed = ALLOWED_COLOUR_COUNTS
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        "colour count {} is not one of {}; keeping {}",
        count,
        allowed,
        config.colour_count()
    ))
}

/// Describe a value that falls outside `range` and was clamped.
pub fn clamp_warning(name: &str, value: u32, (min, max): (u32, u32)) -> Option<String> {
    let clamped = value.clamp(min, max);
    (clamped != value).then(|| {
        format!(
            "{} {} is outside {}-{}; using {}",
            name, value, min, max, clamped
        )
    })
}
