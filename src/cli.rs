// SPDX-License-Identifier: GPL-3.0-or-later
// src/cli.rs
//
// Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::document::operations::CropArea;

/// Crop a square out of an image and save it as JPEG
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Image to crop; without it the interactive shell starts
    pub file: Option<PathBuf>,

    /// Zoom factor of the square selection (1 to 3)
    #[arg(short, long, default_value_t = 1.0)]
    pub zoom: f32,

    /// Horizontal offset of the selection from the center, in source pixels
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub pan_x: f32,

    /// Vertical offset of the selection from the center, in source pixels
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub pan_y: f32,

    /// Explicit crop rectangle `x,y,width,height`, overrides zoom and pan
    #[arg(long, allow_hyphen_values = true)]
    pub rect: Option<CropArea>,

    /// Output file or directory (default: download dir / cropped-image.jpg)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Open the cropped image in the system viewer
    #[arg(short, long)]
    pub preview: bool,

    /// Start the interactive shell even when a file is given
    #[arg(short, long)]
    pub interactive: bool,

    /// Config file (default: <config dir>/cropper/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
