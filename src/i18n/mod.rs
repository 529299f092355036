// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings.
//!
//! Translations are Fluent (`.ftl`) files embedded at build time from
//! `assets/i18n/`. An extra directory can be given with `--i18n-dir` to add
//! locales or override the embedded strings.
//!
//! The active locale is picked from the CLI, then the config file, then the
//! system locale, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
