//! Error types shared by the scan, decode, compose and encode stages

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Result alias used throughout the crate
pub type SheetResult<T> = Result<T, SheetError>;

/// Error raised while turning a directory of frames into spritesheets
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SheetError {
    /// Input directory missing or unreadable
    #[error("Cannot read input directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Output directory missing or not a directory
    #[error("Output directory not found: {}", .0.display())]
    OutputDir(PathBuf),
    /// A frame could not be opened or decoded
    #[error("Failed to decode frame '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The composed sheet would exceed the maximum image width
    #[error(
        "Spritesheet too large: {frames} frames of width {cell_width} exceed {max} pixels",
        max = u32::MAX
    )]
    SheetTooLarge { frames: usize, cell_width: u32 },
    /// The requested output format is not known to the encoder
    #[error("Unsupported output format '{0}'")]
    UnsupportedFormat(String),
    /// The sheet could not be encoded or written
    #[error("Failed to write spritesheet '{}': {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Configuration file problem
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SheetError {
    /// Whether the error stems from how the tool was invoked rather than from
    /// the frames themselves.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            SheetError::ReadDir { .. } | SheetError::OutputDir(_) | SheetError::Config(_)
        )
    }
}
