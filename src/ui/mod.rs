// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! renders from a `ViewContext` and emits its own `Message` type, which the
//! application maps into its top-level message.
//!
//! - [`gallery`] - Sectioned thumbnail grid
//! - [`lightbox`] - Full-window photo overlay
//! - [`navbar`] - Site title and the section menu
//! - [`state`] - Page scroll lock
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod lightbox;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
