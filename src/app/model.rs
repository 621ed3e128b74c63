// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::PathBuf;

use crate::app::view::crop::CropSelection;
use crate::domain::document::SourceImage;
use crate::domain::document::operations::{CropArea, OutputImage};

// =============================================================================
// Model
// =============================================================================

/// Session state. Every field is replaced as a whole, never patched.
#[derive(Debug, Default)]
pub struct AppModel {
    // Document.
    pub source: Option<SourceImage>,

    // Tools.
    pub crop_selection: Option<CropSelection>,
    pub crop_area: Option<CropArea>,

    // Result.
    pub output: Option<OutputImage>,
    pub last_saved: Option<PathBuf>,

    // UI state.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly loaded source.
    ///
    /// The selection restarts centered at minimum zoom, and any crop of the
    /// previous image is dropped so no stale result survives.
    pub fn replace_source(&mut self, source: SourceImage) {
        let (width, height) = source.dimensions();
        let selection = CropSelection::new(width, height);

        self.crop_area = Some(selection.area());
        self.crop_selection = Some(selection);
        self.output = None;
        self.last_saved = None;
        self.source = Some(source);
        self.error = None;
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }
}
