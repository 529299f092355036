// SPDX-License-Identifier: MPL-2.0
//! Style functions shared by the gallery, the lightbox and the navbar.

pub mod button;
pub mod container;
pub mod overlay;

pub use button::{overlay as button_overlay, thumbnail as button_thumbnail};
