// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop rectangles: the float area a selector reports and the pixel region copied.

use std::fmt;
use std::str::FromStr;

/// Crop rectangle in source pixel coordinates, as reported by a selector.
///
/// Coordinates are fractional: a selector working on a zoomed view rarely
/// lands on whole pixels. Each report replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Crop region in pixel coordinates.
///
/// Always non-empty and inside the image it was clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropArea {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Area covering a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (width as f32, height as f32);
        Self::new(0.0, 0.0, width, height)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Round to whole pixels and clamp into `[0, width] x [0, height]`.
    ///
    /// Each edge is rounded to the nearest pixel first, so an in-bounds area
    /// keeps its rounded size exactly. Parts hanging over an edge are cut
    /// off. Returns `None` when nothing is left.
    pub fn to_region(&self, (img_width, img_height): (u32, u32)) -> Option<CropRegion> {
        if !self.is_finite() {
            return None;
        }

        let (x, width) = clamp_span(self.x, self.width, img_width)?;
        let (y, height) = clamp_span(self.y, self.height, img_height)?;

        Some(CropRegion::new(x, y, width, height))
    }
}

fn clamp_span(start: f32, len: f32, limit: u32) -> Option<(u32, u32)> {
    let start = f64::from(start).round();
    let end = start + f64::from(len).round();

    let lo = start.max(0.0);
    let hi = end.min(f64::from(limit));
    if hi <= lo {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let span = (lo as u32, (hi - lo) as u32);
    Some(span)
}

impl fmt::Display for CropArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// Parses `x,y,width,height`.
impl FromStr for CropArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid number in '{s}': {e}"))?;

        match parts.as_slice() {
            &[x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(format!("expected x,y,width,height but got '{s}'")),
        }
    }
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
