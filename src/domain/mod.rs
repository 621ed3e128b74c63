// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Domain layer: images, crop geometry and errors. No UI concerns.

pub mod document;
pub mod error;

pub use error::{CropError, CropResult};
