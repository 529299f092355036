// SPDX-License-Identifier: MPL-2.0
//! UI state kept outside the component views.

pub mod page_scroll;

pub use page_scroll::{LockHolder, PageScroll};
