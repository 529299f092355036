// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for the configuration.

// ==========================================================================
// Gallery Grid Defaults
// ==========================================================================

/// Thumbnails per gallery row.
pub const DEFAULT_COLUMNS: u16 = 3;

/// Minimum thumbnails per row.
pub const MIN_COLUMNS: u16 = 1;

/// Maximum thumbnails per row.
pub const MAX_COLUMNS: u16 = 8;

/// Thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 220.0;

/// Smallest thumbnail height accepted from the config file.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 80.0;

/// Largest thumbnail height accepted from the config file.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 600.0;

// ==========================================================================
// Validation
// ==========================================================================

const _: () = {
    assert!(MIN_COLUMNS >= 1);
    assert!(DEFAULT_COLUMNS >= MIN_COLUMNS && DEFAULT_COLUMNS <= MAX_COLUMNS);
    assert!(MIN_THUMBNAIL_HEIGHT > 0.0);
    assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);
};
