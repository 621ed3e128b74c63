// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View layer: crop selector state and textual rendering of the session.

pub mod crop;
pub mod status;
