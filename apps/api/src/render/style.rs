//! Fixed layout constants for the profile report.
//!
//! Lengths are in twips (1/1440 inch); font sizes are in half-points, which is
//! what the docx run properties expect.

pub const TWIPS_PER_INCH: u32 = 1440;

/// US Letter, portrait.
pub const PAGE_WIDTH_TWIPS: u32 = 12_240;
pub const PAGE_HEIGHT_TWIPS: u32 = 15_840;

pub const MARGIN_TWIPS: i32 = TWIPS_PER_INCH as i32;

/// Printable width between the left and right margins; tables span all of it.
pub const TEXT_WIDTH_TWIPS: usize = (PAGE_WIDTH_TWIPS - 2 * TWIPS_PER_INCH) as usize;

pub const TITLE_SIZE: usize = 32; // 16pt
pub const HEADING_SIZE: usize = 26; // 13pt
pub const TABLE_HEADER_SIZE: usize = 22; // 11pt

pub const TABLE_HEADER_FILL: &str = "261418";
pub const TABLE_HEADER_TEXT_COLOR: &str = "FFFFFF";

pub const TITLE_PREFIX: &str = "Level Set Profile Report: ";

pub const FOOTER_TEXT: &str =
    "© 2025 LEVEL SET NEXT | Pivot With Power    |    Phone: 678-870-8341";

pub const BULLET_PREFIX: &str = "- ";
