//! Frame decoding

use image::RgbaImage;
use std::path::Path;

use crate::error::{SheetError, SheetResult};
use crate::grouping::FrameFile;

/// Decode a single frame as RGBA.
///
/// The format is detected from the file contents; animated GIFs contribute
/// their first frame.
pub fn load_frame(path: &Path) -> SheetResult<RgbaImage> {
    let img = image::io::Reader::open(path)
        .map_err(|e| SheetError::Decode { path: path.to_path_buf(), source: e.into() })?
        .with_guessed_format()
        .map_err(|e| SheetError::Decode { path: path.to_path_buf(), source: e.into() })?
        .decode()
        .map_err(|source| SheetError::Decode { path: path.to_path_buf(), source })?;
    Ok(img.to_rgba8())
}

/// Decode every frame of a group, in the given order.
///
/// Stops at the first frame that fails; no partial result is returned.
pub fn load_frames(input_dir: &Path, frames: &[&FrameFile]) -> SheetResult<Vec<RgbaImage>> {
    frames.iter().map(|frame| load_frame(&input_dir.join(&frame.file_name))).collect()
}
