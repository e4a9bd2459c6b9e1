//! Constants shared by the helper functions

/// Lowercase tokens read as `true`
pub const TRUE_TOKENS: [&str; 5] = ["true", "t", "1", "yes", "y"];

/// Lowercase tokens read as `false`
pub const FALSE_TOKENS: [&str; 5] = ["false", "f", "0", "no", "n"];

/// Separator between composite key segments
pub const KEY_DELIMITER: char = '.';

/// Default number of lines kept by text cropping
pub const DEFAULT_CROP_LINES: usize = 2;

/// Default maximum line length, in characters, for text cropping
pub const DEFAULT_CROP_LINE_LEN: usize = 32;

/// Marker appended to cropped text (HTML entity for a horizontal ellipsis)
pub const CROP_ELLIPSIS: &str = "&#133;";

/// Width of the random seed drawn by [`UniqueIdGenerator::new`](crate::UniqueIdGenerator::new)
pub const DEFAULT_ID_BITS: u32 = 32;
