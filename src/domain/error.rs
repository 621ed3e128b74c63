// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Error type shared by loading, extraction and output.

use std::io;
use std::path::PathBuf;

/// Everything that can go wrong between opening a file and saving its crop.
#[derive(Debug, thiserror::Error)]
pub enum CropError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode {} as an image: {reason}", path.display())]
    DecodeFailure { path: PathBuf, reason: String },

    #[error("no drawing surface of {width}x{height} pixels available")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("crop rectangle lies outside the {width}x{height} image")]
    EmptyRegion { width: u32, height: u32 },

    #[error("failed to encode cropped image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open preview: {0}")]
    Preview(#[source] io::Error),

    #[error("no image loaded")]
    NoSource,

    #[error("nothing cropped yet")]
    NoOutput,

    #[error("background task failed: {0}")]
    Task(String),
}

pub type CropResult<T> = Result<T, CropError>;
