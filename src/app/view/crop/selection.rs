// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Crop selection state: an aspect-locked square moved by pan/drag and sized by zoom.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

use crate::constant::{CROP_ASPECT, MAX_ZOOM, MIN_ZOOM, ZOOM_EPSILON};
use crate::domain::document::operations::CropArea;

/// Selector over a `img_width` x `img_height` image.
///
/// At zoom 1 the selection is the largest rectangle of `CROP_ASPECT` that fits
/// the image; zooming shrinks it around its center. The center is clamped so
/// the selection never leaves the image.
#[derive(Debug, Clone)]
pub struct CropSelection {
    img_width: f32,
    img_height: f32,
    zoom: f32,
    center: (f32, f32),
    is_dragging: bool,
    drag_start: Option<(f32, f32)>,
    drag_start_center: Option<(f32, f32)>,
}

impl CropSelection {
    /// Centered selection at minimum zoom.
    pub fn new(img_width: u32, img_height: u32) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let (w, h) = (img_width as f32, img_height as f32);

        Self {
            img_width: w,
            img_height: h,
            zoom: MIN_ZOOM,
            center: (w / 2.0, h / 2.0),
            is_dragging: false,
            drag_start: None,
            drag_start_center: None,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Selection size at zoom 1.
    fn base_size(&self) -> (f32, f32) {
        if self.img_height <= 0.0 {
            return (0.0, 0.0);
        }
        if self.img_width / self.img_height > CROP_ASPECT {
            (self.img_height * CROP_ASPECT, self.img_height)
        } else {
            (self.img_width, self.img_width / CROP_ASPECT)
        }
    }

    /// Current selection size in source pixels.
    pub fn crop_size(&self) -> (f32, f32) {
        let (w, h) = self.base_size();
        (w / self.zoom, h / self.zoom)
    }

    /// The rectangle currently selected.
    pub fn area(&self) -> CropArea {
        let (w, h) = self.crop_size();
        let (cx, cy) = self.center;
        CropArea::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Set zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Returns whether it changed.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if (zoom - self.zoom).abs() < ZOOM_EPSILON {
            return false;
        }

        self.zoom = zoom;
        self.clamp_center();
        true
    }

    pub fn zoom_by(&mut self, delta: f32) -> bool {
        self.set_zoom(self.zoom + delta)
    }

    /// Zoom while keeping source point `(x, y)` at the same relative spot
    /// inside the selection.
    pub fn zoom_at(&mut self, zoom: f32, x: f32, y: f32) -> bool {
        if !(zoom.is_finite() && x.is_finite() && y.is_finite()) {
            return false;
        }
        let old_zoom = self.zoom;
        let new_zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - old_zoom).abs() < ZOOM_EPSILON {
            return false;
        }

        let ratio = old_zoom / new_zoom;
        let (cx, cy) = self.center;
        self.center = (x + (cx - x) * ratio, y + (cy - y) * ratio);
        self.zoom = new_zoom;
        self.clamp_center();
        true
    }

    /// Move the selection by source pixels.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        if !(dx.is_finite() && dy.is_finite()) {
            return;
        }
        self.center.0 += dx;
        self.center.1 += dy;
        self.clamp_center();
    }

    pub fn start_drag(&mut self, x: f32, y: f32) {
        self.is_dragging = true;
        self.drag_start = Some((x, y));
        self.drag_start_center = Some(self.center);
    }

    pub fn update_drag(&mut self, x: f32, y: f32) {
        if !self.is_dragging || !(x.is_finite() && y.is_finite()) {
            return;
        }

        if let (Some((start_x, start_y)), Some((cx, cy))) =
            (self.drag_start, self.drag_start_center)
        {
            self.center = (cx + x - start_x, cy + y - start_y);
            self.clamp_center();
        }
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
        self.drag_start = None;
        self.drag_start_center = None;
    }

    /// Back to a centered selection at minimum zoom.
    pub fn reset(&mut self) {
        self.zoom = MIN_ZOOM;
        self.center = (self.img_width / 2.0, self.img_height / 2.0);
        self.end_drag();
    }

    fn clamp_center(&mut self) {
        let (w, h) = self.crop_size();
        let (cx, cy) = self.center;
        self.center = (
            cx.max(w / 2.0).min(self.img_width - w / 2.0),
            cy.max(h / 2.0).min(self.img_height - h / 2.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_area(area: CropArea, expected: (f32, f32, f32, f32)) {
        let actual = (area.x, area.y, area.width, area.height);
        assert!(
            (actual.0 - expected.0).abs() < 0.01
                && (actual.1 - expected.1).abs() < 0.01
                && (actual.2 - expected.2).abs() < 0.01
                && (actual.3 - expected.3).abs() < 0.01,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn starts_centered_at_minimum_zoom() {
        let selection = CropSelection::new(800, 600);
        assert_eq!(selection.zoom(), MIN_ZOOM);
        assert_area(selection.area(), (100.0, 0.0, 600.0, 600.0));
    }

    #[test]
    fn portrait_image_uses_full_width() {
        let selection = CropSelection::new(300, 500);
        assert_area(selection.area(), (0.0, 100.0, 300.0, 300.0));
    }

    #[test]
    fn zoom_shrinks_around_center_and_clamps() {
        let mut selection = CropSelection::new(800, 600);

        assert!(selection.set_zoom(2.0));
        assert_area(selection.area(), (250.0, 150.0, 300.0, 300.0));

        selection.set_zoom(10.0);
        assert_eq!(selection.zoom(), MAX_ZOOM);

        selection.set_zoom(0.2);
        assert_eq!(selection.zoom(), MIN_ZOOM);
        assert!(!selection.set_zoom(f32::NAN));
    }

    #[test]
    fn pan_stops_at_image_edges() {
        let mut selection = CropSelection::new(800, 600);
        selection.set_zoom(2.0);

        selection.pan_by(1000.0, -1000.0);
        assert_area(selection.area(), (500.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn zooming_out_pulls_selection_back_inside() {
        let mut selection = CropSelection::new(800, 600);
        selection.set_zoom(3.0);
        selection.pan_by(1000.0, 1000.0);

        selection.set_zoom(1.0);
        assert_area(selection.area(), (200.0, 0.0, 600.0, 600.0));
    }

    #[test]
    fn zoom_at_keeps_focal_point() {
        let mut selection = CropSelection::new(800, 600);

        // Top-left corner of the initial square stays its top-left corner.
        assert!(selection.zoom_at(2.0, 100.0, 0.0));
        assert_area(selection.area(), (100.0, 0.0, 300.0, 300.0));
    }

    #[test]
    fn drag_moves_selection() {
        let mut selection = CropSelection::new(800, 600);
        selection.set_zoom(2.0);

        selection.start_drag(400.0, 300.0);
        selection.update_drag(350.0, 320.0);
        assert!(selection.is_dragging());
        assert_area(selection.area(), (200.0, 170.0, 300.0, 300.0));

        selection.end_drag();
        selection.update_drag(0.0, 0.0);
        assert_area(selection.area(), (200.0, 170.0, 300.0, 300.0));
    }

    #[test]
    fn reset_recenters() {
        let mut selection = CropSelection::new(800, 600);
        selection.set_zoom(2.5);
        selection.pan_by(-80.0, 40.0);

        selection.reset();
        assert_area(selection.area(), (100.0, 0.0, 600.0, 600.0));
    }

    #[test]
    fn selection_stays_square_and_inside() {
        let mut selection = CropSelection::new(1024, 333);
        for step in 0..40 {
            let step = step as f32;
            selection.zoom_at(1.0 + step * 0.07, step * 31.0, step * 7.0);
            selection.pan_by(step * 13.0 - 200.0, 50.0 - step * 3.0);

            let area = selection.area();
            assert!((area.width - area.height).abs() < 0.01);
            assert!(area.x >= -0.01 && area.y >= -0.01);
            assert!(area.x + area.width <= 1024.01);
            assert!(area.y + area.height <= 333.01);
        }
    }
}
