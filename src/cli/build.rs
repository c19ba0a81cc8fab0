//! Build command implementation.
//!
//! Turns images into PDF building guides.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::artwork::Artwork;
use crate::document::{persist, plan_tiles, render_document};
use crate::error::{CraftError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Image;

use super::options::GuideArgs;

/// Extensions picked up when walking input directories.
pub const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff", "webp"];

/// Build PDF guides from images
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Image files or directories to process
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory (defaults to next to each image)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub guide: GuideArgs,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = args.guide.resolve(&cwd, printer)?;

    let images = collect_images(&args.inputs)?;
    if images.is_empty() {
        return Err(CraftError::Parse {
            message: "No images found".to_string(),
            help: Some(format!(
                "Directories are searched for {} files",
                IMAGE_EXTENSIONS.join(", ")
            )),
        });
    }

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir).map_err(|e| CraftError::Write {
            path: dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    for input in &images {
        let output = output_path(input, args.output.as_deref());
        printer.detail("Loading", &display_path(input));
        let image = Image::open(input)?;

        let artwork = Artwork::prepare(&image, &config);
        let (columns, rows) = artwork.grid_size();
        printer.status(
            "Pixelating",
            &format!(
                "{} ({}x{} cells, {})",
                display_path(input),
                columns,
                rows,
                plural(artwork.palette().len(), "colour", "colours")
            ),
        );

        let pages = 2 + plan_tiles(columns, rows, config.output_size()).len();
        let bytes = render_document(&artwork, &config);
        persist(&bytes, &output)?;
        printer.status(
            "Writing",
            &format!("{} ({})", display_path(&output), plural(pages, "page", "pages")),
        );
    }

    printer.success(
        "Finished",
        &plural(images.len(), "guide", "guides"),
    );

    Ok(())
}

/// Expand inputs into image files. Files are taken as given; directories
/// are walked recursively for known image extensions, in name order.
pub fn collect_images(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if entry.file_type().is_file() && is_image(path) {
                    images.push(path.to_path_buf());
                }
            }
        } else if input.is_file() {
            images.push(input.clone());
        } else {
            return Err(CraftError::Load {
                path: input.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    Ok(images)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// `<stem>.pdf` in `dir`, or next to the input.
fn output_path(input: &Path, dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut name = PathBuf::from(stem);
    name.set_extension("pdf");
    match dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}
