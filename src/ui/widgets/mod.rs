// SPDX-License-Identifier: MPL-2.0
pub mod backdrop;

pub use backdrop::{backdrop, Backdrop};
