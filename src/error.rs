use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pixcraft operations
#[derive(Error, Diagnostic, Debug)]
pub enum CraftError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pixcraft::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to load {path}: {message}")]
    #[diagnostic(
        code(pixcraft::load),
        help("The input must be a readable PNG, JPEG, GIF, BMP, TIFF or WebP image")
    )]
    Load {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(pixcraft::write))]
    Write {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to read config {path}: {message}")]
    #[diagnostic(code(pixcraft::config))]
    Config {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pixcraft::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, CraftError>;
