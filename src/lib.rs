// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a photo portfolio viewer built with the Iced GUI framework.
//!
//! A catalog of categorized photos is flattened once into a render plan (the
//! gallery sections) and a sequence (what the lightbox navigates). Clicking a
//! thumbnail opens the lightbox; arrows, keys and swipes move through the whole
//! catalog with wraparound, and the gallery stops scrolling while it is open.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod lightbox;
pub mod ui;
