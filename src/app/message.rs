// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: user actions and selector reports.

use std::path::PathBuf;

use crate::domain::document::operations::CropArea;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // File.
    OpenPath(PathBuf),

    // Zoom.
    ZoomTo(f32),
    ZoomIn,
    ZoomOut,
    ZoomAt { zoom: f32, x: f32, y: f32 },

    // Pan / drag.
    Pan { dx: f32, dy: f32 },
    CropDragStart { x: f32, y: f32 },
    CropDragMove { x: f32, y: f32 },
    CropDragEnd,
    ResetSelection,

    // Rectangle reported by an external selector.
    ReportArea(CropArea),

    // Crop operations.
    ApplyCrop,

    // Output.
    Download(Option<PathBuf>),
    Preview,

    // Errors.
    ClearError,
}
