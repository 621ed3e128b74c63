// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/source.rs
//
// The decoded source image a crop is taken from.

use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use super::orientation;
use crate::domain::error::{CropError, CropResult};

/// Options applied while turning file bytes into a [`SourceImage`].
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Apply the EXIF orientation tag, if the file carries one.
    pub apply_exif_orientation: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            apply_exif_orientation: true,
        }
    }
}

/// A decoded raster, held as RGBA8 like a 2D drawing surface would.
///
/// Pixels sit behind an `Arc` so the session can hand the image to the
/// blocking pool and keep it at the same time. The image is never mutated;
/// opening another file replaces the whole value.
#[derive(Clone)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
    path: Option<PathBuf>,
    format: Option<ImageFormat>,
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("dimensions", &self.dimensions())
            .field("path", &self.path)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl SourceImage {
    /// Wrap pixels that did not come from a file.
    #[must_use]
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
            path: None,
            format: None,
        }
    }

    /// Decode in-memory file contents.
    ///
    /// The container format is sniffed from the bytes, the file extension is
    /// not trusted.
    pub fn decode(path: &Path, bytes: &[u8], options: LoadOptions) -> CropResult<Self> {
        let decode_failure = |reason: String| CropError::DecodeFailure {
            path: path.to_path_buf(),
            reason,
        };

        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| decode_failure(e.to_string()))?;
        let format = reader
            .format()
            .ok_or_else(|| decode_failure("unrecognized image format".to_string()))?;
        let image = reader.decode().map_err(|e| decode_failure(e.to_string()))?;

        let image = if options.apply_exif_orientation {
            orientation::correct(bytes, image)
        } else {
            image
        };

        Ok(Self {
            pixels: Arc::new(image.into_rgba8()),
            path: Some(path.to_path_buf()),
            format: Some(format),
        })
    }

    /// Read and decode an image file.
    ///
    /// Reading is async, decoding runs on the blocking pool. There is no
    /// timeout; the caller keeps showing its prior state until this resolves.
    pub async fn load(path: &Path, options: LoadOptions) -> CropResult<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|source| CropError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        let owned_path = path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::decode(&owned_path, &bytes, options))
            .await
            .map_err(|e| CropError::Task(e.to_string()))?
    }

    /// Native pixel dimensions (width, height).
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the RGBA pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Container format detected while decoding.
    #[must_use]
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Display name for status lines.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map_or_else(|| "<memory>".to_string(), |n| n.to_string_lossy().into_owned())
    }
}

impl From<DynamicImage> for SourceImage {
    fn from(image: DynamicImage) -> Self {
        Self::from_rgba(image.into_rgba8())
    }
}
