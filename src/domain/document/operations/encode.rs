// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/encode.rs
//
// JPEG encoding of cropped rasters.

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage, RgbaImage};

use crate::domain::error::CropResult;

/// Encode `raster` as JPEG at the encoder's default quality.
///
/// JPEG carries no alpha, so pixels are first flattened onto black, the way
/// a 2D canvas with transparent areas exports to JPEG.
pub fn encode_jpeg(raster: &RgbaImage) -> CropResult<Vec<u8>> {
    let flat = flatten_onto_black(raster);

    let mut bytes = Vec::new();
    JpegEncoder::new(&mut bytes).encode_image(&flat)?;

    log::debug!(
        "encoded {}x{} JPEG, {} bytes",
        flat.width(),
        flat.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Composite RGBA over opaque black.
pub fn flatten_onto_black(raster: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(raster.width(), raster.height(), |x, y| {
        let [r, g, b, a] = raster.get_pixel(x, y).0;
        Rgb([premultiply(r, a), premultiply(g, a), premultiply(b, a)])
    })
}

fn premultiply(channel: u8, alpha: u8) -> u8 {
    // Rounded channel * alpha / 255; the result never exceeds 255.
    let value = (u16::from(channel) * u16::from(alpha) + 127) / 255;
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};

    #[test]
    fn opaque_pixels_are_unchanged_by_flattening() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([12, 200, 99, 255]));
        let flat = flatten_onto_black(&img);
        assert_eq!(flat.get_pixel(1, 1), &Rgb([12, 200, 99]));
    }

    #[test]
    fn transparent_pixels_become_black() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 0]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 128]));

        let flat = flatten_onto_black(&img);
        assert_eq!(flat.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(flat.get_pixel(1, 0), &Rgb([100, 50, 25]));
    }

    #[test]
    fn output_is_a_decodable_jpeg_of_same_size() {
        let img = RgbaImage::from_fn(37, 21, |x, y| Rgba([x as u8 * 5, y as u8 * 9, 128, 255]));
        let bytes = encode_jpeg(&img).unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (37, 21));
    }
}
