// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: the square selector driven by pan, zoom and drag.
// Inspired by cosmic-viewer (https://codeberg.org/bhh by Bryan Hyland

mod selection;

pub use selection::CropSelection;
