//! Spritesheet output: format resolution, file naming and encoding

use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

use crate::error::{SheetError, SheetResult};

/// Resolve an output format name such as `png` or `JPG`.
///
/// Any extension the `image` crate recognises is accepted here; formats it
/// can read but not write fail later in [`save_sheet`].
pub fn resolve_format(name: &str) -> SheetResult<ImageFormat> {
    ImageFormat::from_extension(name).ok_or_else(|| SheetError::UnsupportedFormat(name.to_string()))
}

/// Build the output path for an animation.
///
/// The format string is used verbatim as the extension: `dir/{name}.{format}`.
pub fn sheet_path(output_dir: &Path, name: &str, format: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", name, format))
}

/// Encode a sheet and write it to `path`.
///
/// Parent directories are not created; a missing output directory is reported
/// as an encode error.
pub fn save_sheet(image: &RgbaImage, path: &Path, format: ImageFormat) -> SheetResult<()> {
    image
        .save_with_format(path, format)
        .map_err(|source| SheetError::Encode { path: path.to_path_buf(), source })
}
