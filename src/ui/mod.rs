// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// Front end: application wiring and the interactive shell.

pub mod app;
pub mod shell;

pub use app::CropperApp;
