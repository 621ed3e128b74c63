// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/mod.rs
//
// Operations on source documents.

pub mod crop;
pub mod encode;
pub mod extract;

pub use crop::{CropArea, CropRegion};
pub use extract::{Extractor, OutputImage, extract};
