//! Fixed sheet layout: headers, dropdown values and colours

/// Column headers of every workday sheet (A..G)
pub const HEADERS: [&str; 7] = [
    "Jira ticket",
    "status",
    "type",
    "project",
    "comment",
    "reporter",
    "assignee",
];

/// Allowed values of the `status` column (B)
pub const STATUS_OPTIONS: [&str; 9] = [
    "Open",
    "UAT",
    "Done",
    "Failed on test - Ready for dev",
    "Rejected",
    "Ready for PRD",
    "IAT",
    "QAT",
    "Implemented",
];

/// Allowed values of the `type` column (C)
pub const TYPE_OPTIONS: [&str; 5] = ["Sub-bug", "US", "Bug", "Tech-Story", "AC"];

/// Zero-based column of the status dropdown
pub const STATUS_COLUMN: u16 = 1;

/// Zero-based column of the type dropdown
pub const TYPE_COLUMN: u16 = 2;

/// Tab and fill colour per weekday, Monday first
pub const WEEKDAY_COLORS: [u32; 5] = [
    0x4682B4, // Monday: steel blue
    0x3CB371, // Tuesday: medium sea green
    0xFFD700, // Wednesday: gold
    0xFF8C00, // Thursday: dark orange
    0xDC143C, // Friday: crimson
];

/// Weekend separator tab and fill
pub const WEEKEND_COLOR: u32 = 0xD3D3D3;

/// Header row background
pub const HEADER_BACKGROUND: u32 = 0x000099;

/// Header row font
pub const HEADER_FONT: u32 = 0xFFFFFF;

/// Default width of columns A..G
pub const DEFAULT_COLUMN_WIDTH: f64 = 20.0;

/// Default last formatted row (1-based, as Excel shows it)
pub const DEFAULT_LAST_ROW: u32 = 1000;

/// Colour for a weekday index (Monday = 0)
pub fn weekday_color(index: u8) -> Option<u32> {
    WEEKDAY_COLORS.get(usize::from(index)).copied()
}

/// Last zero-based column index covered by the layout
pub fn last_column() -> u16 {
    HEADERS.len() as u16 - 1
}
