// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each view
//! takes a `ViewContext` borrowed from `App` and emits component messages.
//!
//! # Views
//!
//! - [`toolbar`] - App title, shuffle, and theme toggle
//! - [`gallery`] - Shuffled photo grid
//! - [`lightbox`] - Full-window viewer overlay
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode and derived colors

pub mod design_tokens;
pub mod gallery;
pub mod lightbox;
pub mod styles;
pub mod theming;
pub mod toolbar;
pub mod widgets;
