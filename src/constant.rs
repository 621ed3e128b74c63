// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Minimum zoom factor of the crop selector (whole short side selected).
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum zoom factor of the crop selector.
pub const MAX_ZOOM: f32 = 3.0;

/// Target aspect ratio (width / height) of the crop selection.
pub const CROP_ASPECT: f32 = 1.0;

/// Tolerance for zoom comparisons (float precision in zoom clamping).
pub const ZOOM_EPSILON: f32 = 0.0001;

/// Default file name of a downloaded crop.
pub const OUTPUT_FILE_NAME: &str = "cropped-image.jpg";

/// File name of the preview written to the cache directory.
pub const PREVIEW_FILE_NAME: &str = "preview.jpg";

/// Config and cache directory name.
pub const APP_DIR: &str = "cropper";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Largest drawing surface handed out by default (16384 x 16384 pixels).
pub const DEFAULT_MAX_SURFACE_PIXELS: u64 = 16_384 * 16_384;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// How many ` (n)` suffixes are tried before a download gives up.
pub const MAX_NAME_ATTEMPTS: u32 = 1000;
