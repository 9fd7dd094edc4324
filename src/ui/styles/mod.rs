// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the toolbar, grid, and lightbox.

pub mod button;
pub mod container;
