// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/orientation.rs
//
// EXIF orientation correction, so photos are cropped the way they are shown.

use image::DynamicImage;

/// Upright `image` according to the EXIF orientation stored in `raw_bytes`.
///
/// No-op when the file has no EXIF block or the `exif` feature is off.
#[must_use]
pub fn correct(raw_bytes: &[u8], image: DynamicImage) -> DynamicImage {
    let orientation = read_orientation(raw_bytes);
    if orientation != 1 {
        log::debug!("applying EXIF orientation {orientation}");
    }
    apply(image, orientation)
}

/// Read the EXIF orientation tag (1 = normal when absent).
#[cfg(feature = "exif")]
#[must_use]
pub fn read_orientation(raw_bytes: &[u8]) -> u32 {
    let mut cursor = std::io::Cursor::new(raw_bytes);
    let Ok(reader) = exif::Reader::new().read_from_container(&mut cursor) else {
        return 1;
    };

    reader
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .unwrap_or(1)
}

#[cfg(not(feature = "exif"))]
#[must_use]
pub fn read_orientation(_raw_bytes: &[u8]) -> u32 {
    1
}

/// Apply one of the eight EXIF orientations.
///
/// 1 normal, 2 mirrored, 3 rotated 180, 4 flipped vertically,
/// 5 mirrored + 90 CW, 6 90 CW, 7 mirrored + 270 CW, 8 270 CW.
#[must_use]
pub fn apply(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}
