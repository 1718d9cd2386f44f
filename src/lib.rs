//! Framesheet - library for packing animation frames into spritesheets
//!
//! This library provides functionality to:
//! - Group a directory of frame images into animations by filename prefix
//! - Order each animation's frames (by filename, or by frame number)
//! - Compose the frames into a single horizontal sheet with centered,
//!   transparent-padded cells
//! - Encode the sheet in any format the `image` crate writes

pub mod cli;
pub mod config;
pub mod error;
pub mod filename;
pub mod grouping;
pub mod loader;
pub mod logging;
pub mod order;
pub mod output;
pub mod pipeline;
pub mod spritesheet;

pub use config::SheetConfig;
pub use error::{SheetError, SheetResult};
pub use order::FrameOrder;
pub use pipeline::{run, RunResult};
