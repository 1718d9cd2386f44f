//! Spritesheet composition - lays frames out side by side in a horizontal strip

use image::{imageops, Rgba, RgbaImage};

use crate::error::{SheetError, SheetResult};

/// Transparent color used for padding
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Geometry of a composed sheet
///
/// Layouts built with [`SheetLayout::new`] or [`SheetLayout::for_frames`]
/// always have a total width that fits in `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Number of cells (one per frame)
    pub frame_count: u32,
    /// Width of every cell, the widest frame
    pub cell_width: u32,
    /// Height of every cell, the tallest frame
    pub cell_height: u32,
}

impl SheetLayout {
    /// Build a layout of `frames` cells, failing when the sheet would be
    /// wider than an image can be.
    pub fn new(frames: usize, cell_width: u32, cell_height: u32) -> SheetResult<Self> {
        let too_large = || SheetError::SheetTooLarge { frames, cell_width };
        let frame_count = u32::try_from(frames).map_err(|_| too_large())?;
        cell_width.checked_mul(frame_count).ok_or_else(too_large)?;
        Ok(Self { frame_count, cell_width, cell_height })
    }

    /// Compute the layout for a set of frames.
    pub fn for_frames(frames: &[RgbaImage]) -> SheetResult<Self> {
        Self::new(
            frames.len(),
            frames.iter().map(|f| f.width()).max().unwrap_or(0),
            frames.iter().map(|f| f.height()).max().unwrap_or(0),
        )
    }

    /// Total sheet dimensions `(width, height)`, `None` if the width overflows.
    pub fn sheet_size(&self) -> Option<(u32, u32)> {
        let width = self.cell_width.checked_mul(self.frame_count)?;
        Some((width, self.cell_height))
    }

    /// Top-left position of a frame of size `frame` placed in cell `index`.
    ///
    /// Frames are centered in their cell; odd remainders round toward the
    /// top-left.
    pub fn cell_offset(&self, index: u32, frame: (u32, u32)) -> (u32, u32) {
        let (w, h) = frame;
        let x = index * self.cell_width + (self.cell_width - w) / 2;
        let y = (self.cell_height - h) / 2;
        (x, y)
    }
}

/// Render frames into a single-row spritesheet.
///
/// # Arguments
///
/// * `frames` - Frames in playback order
///
/// # Returns
///
/// An RGBA image of `max_width * frames.len()` by `max_height`. Each frame is
/// centered in its cell and everything outside a frame stays transparent.
///
/// # Errors
///
/// [`SheetError::SheetTooLarge`] when the sheet width does not fit in `u32`.
///
/// # Examples
///
/// ```
/// use image::RgbaImage;
/// use framesheet::spritesheet::render_spritesheet;
///
/// let small = RgbaImage::from_pixel(16, 16, image::Rgba([255, 0, 0, 255]));
/// let large = RgbaImage::from_pixel(20, 16, image::Rgba([0, 255, 0, 255]));
///
/// let sheet = render_spritesheet(&[small, large]).unwrap();
/// assert_eq!(sheet.dimensions(), (40, 16));
/// ```
pub fn render_spritesheet(frames: &[RgbaImage]) -> SheetResult<RgbaImage> {
    if frames.is_empty() {
        return Ok(RgbaImage::from_pixel(1, 1, TRANSPARENT));
    }

    let layout = SheetLayout::for_frames(frames)?;
    let (sheet_width, sheet_height) = layout.sheet_size().ok_or(SheetError::SheetTooLarge {
        frames: frames.len(),
        cell_width: layout.cell_width,
    })?;
    let mut sheet = RgbaImage::from_pixel(sheet_width, sheet_height, TRANSPARENT);

    for (i, frame) in frames.iter().enumerate() {
        let (x, y) = layout.cell_offset(i as u32, frame.dimensions());
        // Straight copy, no blending: source alpha is kept as-is
        imageops::replace(&mut sheet, frame, x as i64, y as i64);
    }

    Ok(sheet)
}
