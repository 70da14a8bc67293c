//! # todolist-render
//!
//! Rendering backends for a partitioned month.
//!
//! This crate provides:
//! - Excel workbook output (one formatted sheet per descriptor)
//! - A plain-text sheet plan for dry runs
//! - The fixed layout tables (headers, dropdown values, colours)
//!
//! ## Example
//!
//! ```rust,ignore
//! use todolist_core::{partition, MonthRange, Renderer};
//! use todolist_render::{ExcelRenderer, PlanRenderer};
//!
//! let sheets = partition(&MonthRange::new(2025, 11)?);
//!
//! // Sheet list as text
//! println!("{}", PlanRenderer::new().render(&sheets)?);
//!
//! // Excel workbook
//! ExcelRenderer::new().save(&sheets, "TO DO LIST-11-November 2025.xlsx".as_ref())?;
//! ```

pub mod excel;
pub mod layout;
pub mod plan;

pub use excel::ExcelRenderer;
pub use plan::PlanRenderer;
