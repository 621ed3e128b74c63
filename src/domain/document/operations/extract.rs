// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/extract.rs
//
// Extraction: block-copy a crop region out of a source image and encode it.

use std::fmt;

use image::RgbaImage;

use super::crop::{CropArea, CropRegion};
use super::encode::encode_jpeg;
use crate::constant::{BYTES_PER_PIXEL, DEFAULT_MAX_SURFACE_PIXELS};
use crate::domain::document::SourceImage;
use crate::domain::error::{CropError, CropResult};

/// An RGBA drawing surface of fixed size.
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Acquire a zeroed surface, or fail with `SurfaceUnavailable`.
    ///
    /// Fails when the byte size overflows, exceeds `max_pixels`, or the
    /// allocator refuses the reservation.
    pub fn allocate(width: u32, height: u32, max_pixels: u64) -> CropResult<Self> {
        let unavailable = || CropError::SurfaceUnavailable { width, height };

        let pixels = u64::from(width) * u64::from(height);
        if pixels > max_pixels {
            log::warn!("surface {width}x{height} exceeds the {max_pixels} pixel limit");
            return Err(unavailable());
        }

        let len = usize::try_from(pixels)
            .ok()
            .and_then(|p| p.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(unavailable)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            log::warn!("cannot reserve {len} bytes for surface: {e}");
            unavailable()
        })?;
        data.resize(len, 0);

        Ok(Self { width, height, data })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Copy the block of `source` at `region` to the surface origin.
    ///
    /// The region must lie inside `source` and match the surface size.
    /// Rows are copied verbatim, no resampling.
    fn draw_region(&mut self, source: &RgbaImage, region: CropRegion) {
        debug_assert_eq!((region.width, region.height), (self.width, self.height));

        let src_stride = source.width() as usize * BYTES_PER_PIXEL;
        let row_len = region.width as usize * BYTES_PER_PIXEL;
        let src_x = region.x as usize * BYTES_PER_PIXEL;
        let raw = source.as_raw();

        for (row, dst) in self.data.chunks_exact_mut(row_len).enumerate() {
            let start = (region.y as usize + row) * src_stride + src_x;
            dst.copy_from_slice(&raw[start..start + row_len]);
        }
    }

    fn into_image(self) -> RgbaImage {
        RgbaImage::from_raw(self.width, self.height, self.data)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }
}

/// The extracted raster and its JPEG encoding.
#[derive(Clone)]
pub struct OutputImage {
    raster: RgbaImage,
    region: CropRegion,
    encoded: Vec<u8>,
}

impl fmt::Debug for OutputImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputImage")
            .field("region", &self.region)
            .field("encoded_len", &self.encoded.len())
            .finish_non_exhaustive()
    }
}

impl OutputImage {
    /// Exact copy of the source pixels, before JPEG encoding.
    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    /// Region of the source the pixels came from.
    pub fn region(&self) -> CropRegion {
        self.region
    }

    /// JPEG bytes, ready to be written to disk.
    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.raster.dimensions()
    }
}

/// Extraction with a surface size limit.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    pub max_surface_pixels: u64,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            max_surface_pixels: DEFAULT_MAX_SURFACE_PIXELS,
        }
    }
}

impl Extractor {
    pub fn new(max_surface_pixels: u64) -> Self {
        Self { max_surface_pixels }
    }

    /// Copy `area` out of `source` into a new output image.
    ///
    /// `area` is rounded and clamped to the image first, so an area hanging
    /// over an edge yields a smaller image instead of an error. Neither
    /// argument is modified.
    pub fn extract(&self, source: &SourceImage, area: &CropArea) -> CropResult<OutputImage> {
        let (width, height) = source.dimensions();
        let region = area
            .to_region((width, height))
            .ok_or(CropError::EmptyRegion { width, height })?;
        debug_assert!(region.is_valid());

        let mut surface = Surface::allocate(region.width, region.height, self.max_surface_pixels)?;
        surface.draw_region(source.pixels(), region);
        let raster = surface.into_image();
        let encoded = encode_jpeg(&raster)?;

        log::info!(
            "extracted {}x{} ({} px) at ({}, {}) from {}x{} source",
            region.width,
            region.height,
            region.pixel_count(),
            region.x,
            region.y,
            width,
            height
        );

        Ok(OutputImage {
            raster,
            region,
            encoded,
        })
    }
}

/// Extract with the default surface limit.
pub fn extract(source: &SourceImage, area: &CropArea) -> CropResult<OutputImage> {
    Extractor::default().extract(source, area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> SourceImage {
        SourceImage::from_rgba(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
        }))
    }

    #[test]
    fn square_crop_from_landscape_source() {
        let source = gradient(800, 600);
        let output = extract(&source, &CropArea::new(100.0, 100.0, 300.0, 300.0)).unwrap();

        assert_eq!(output.dimensions(), (300, 300));
        assert_eq!(output.raster().get_pixel(0, 0), source.pixels().get_pixel(100, 100));
        assert_eq!(output.raster().get_pixel(299, 299), source.pixels().get_pixel(399, 399));
        assert_eq!(output.region().as_tuple(), (100, 100, 300, 300));
    }

    #[test]
    fn every_pixel_matches_its_source() {
        let source = gradient(64, 48);
        let output = extract(&source, &CropArea::new(5.0, 7.0, 20.0, 30.0)).unwrap();

        for (i, j, pixel) in output.raster().enumerate_pixels() {
            assert_eq!(pixel, source.pixels().get_pixel(5 + i, 7 + j));
        }
    }

    #[test]
    fn full_area_extracts_whole_image() {
        let source = gradient(33, 17);
        let output = extract(&source, &CropArea::full(33, 17)).unwrap();

        assert_eq!(output.dimensions(), (33, 17));
        assert_eq!(output.raster(), source.pixels());
    }

    #[test]
    fn repeated_extraction_is_identical() {
        let source = gradient(120, 90);
        let area = CropArea::new(10.0, 20.0, 50.0, 50.0);

        let first = extract(&source, &area).unwrap();
        let second = extract(&source, &area).unwrap();

        assert_eq!(first.raster(), second.raster());
        assert_eq!(first.region(), second.region());
        assert_eq!(first.encoded(), second.encoded());
    }

    #[test]
    fn overhanging_area_shrinks_output() {
        let source = gradient(100, 100);
        let output = extract(&source, &CropArea::new(80.0, 90.0, 40.0, 40.0)).unwrap();

        assert_eq!(output.dimensions(), (20, 10));
        assert_eq!(output.raster().get_pixel(0, 0), source.pixels().get_pixel(80, 90));
    }

    #[test]
    fn area_outside_image_is_rejected() {
        let source = gradient(10, 10);
        let err = extract(&source, &CropArea::new(20.0, 0.0, 5.0, 5.0)).unwrap_err();
        assert!(matches!(err, CropError::EmptyRegion { width: 10, height: 10 }));
    }

    #[test]
    fn surface_limit_makes_extraction_fail() {
        let source = gradient(50, 50);
        let err = Extractor::new(100)
            .extract(&source, &CropArea::new(0.0, 0.0, 20.0, 20.0))
            .unwrap_err();
        assert!(matches!(err, CropError::SurfaceUnavailable { width: 20, height: 20 }));
    }

    #[test]
    fn oversized_surface_is_unavailable() {
        let err = Surface::allocate(u32::MAX, u32::MAX, u64::MAX).err().unwrap();
        assert!(matches!(err, CropError::SurfaceUnavailable { .. }));
    }

    #[test]
    fn allocated_surface_has_requested_size() {
        let surface = Surface::allocate(3, 2, 100).unwrap();
        assert_eq!(surface.dimensions(), (3, 2));
        assert_eq!(surface.into_image().as_raw().len(), 3 * 2 * BYTES_PER_PIXEL);
    }

    #[test]
    fn encoded_jpeg_has_output_dimensions() {
        let source = gradient(200, 150);
        let output = extract(&source, &CropArea::new(25.0, 25.0, 100.0, 100.0)).unwrap();

        let decoded = image::load_from_memory(output.encoded()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 100));
    }
}
