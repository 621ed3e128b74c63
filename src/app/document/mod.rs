// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Document file handling on the application side.

pub mod file;
