//! # todolist-core
//!
//! Core domain model for the monthly TO DO workbook generator.
//!
//! This crate provides:
//! - Calendar types: `MonthRange`, `SheetDescriptor`, `SheetKind`
//! - The calendar partitioner (`partition`) that turns a month into an
//!   ordered list of sheets
//! - Input validation for month/year entries
//! - The output file-name template
//! - The `Renderer` trait and error types
//!
//! ## Example
//!
//! ```rust
//! use todolist_core::{partition, MonthRange};
//!
//! let range = MonthRange::new(2025, 11).unwrap();
//! let sheets = partition(&range);
//!
//! assert_eq!(sheets.first().unwrap().name, "03-11-2025");
//! assert_eq!(sheets.last().unwrap().name, "WEEKEND 4");
//!
//! let last_workday = sheets.iter().filter(|s| s.is_workday()).last().unwrap();
//! assert_eq!(last_workday.name, "28-11-2025");
//! ```

pub mod calendar;
pub mod input;
pub mod naming;

pub use calendar::{parse_sheet_date, partition, MonthRange, SheetDescriptor, SheetKind};
pub use input::{parse_month, parse_year, validate, YearBounds};
pub use naming::FileNameTemplate;

use thiserror::Error;

// ============================================================================
// Traits
// ============================================================================

/// Output backend for a partitioned month
pub trait Renderer {
    type Output;

    /// Render the ordered sheet list to the output format
    fn render(&self, sheets: &[SheetDescriptor]) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Month/year entry error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input: '{0}' is not a whole number")]
    NotANumber(String),

    #[error("Invalid date: month {0} is outside 1-12")]
    MonthOutOfRange(i64),

    #[error("Invalid date: year {year} is outside {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Invalid date: {year}-{month:02} has no calendar representation")]
    InvalidDate { year: i32, month: u32 },
}

/// File-name template error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template is empty")]
    Empty,

    #[error("Unknown placeholder '{{{0}}}' (expected month, month_name or year)")]
    UnknownPlaceholder(String),

    #[error("Unbalanced brace at byte {0}")]
    UnbalancedBrace(usize),

    #[error("Template must produce a bare file name, found path separator '{0}'")]
    PathSeparator(char),
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
