// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Source documents: decoding, orientation and crop operations.

pub mod operations;
pub mod orientation;
pub mod source;

pub use source::{LoadOptions, SourceImage};
