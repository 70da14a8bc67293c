//! Excel workbook renderer
//!
//! Generates one XLSX workbook per month:
//! - Workday sheets: coloured tab, header row, coloured fill for non-blank
//!   cells, `status`/`type` dropdowns
//! - Weekend sheets: grey tab and grey columns, nothing else
//!
//! ## Example Output Structure
//!
//! ```text
//! Sheet: 03-11-2025 (blue tab)
//! | Jira ticket | status   | type     | project | comment | reporter | assignee |
//! |-------------|----------|----------|---------|---------|----------|----------|
//! |             | [Open v] | [Bug v]  |         |         |          |          |
//!
//! Sheet: WEEKEND 1 (grey tab, grey columns A:G)
//! ```
//!
//! The fill colour is a conditional format (`notContainsBlanks`), so rows
//! only take the weekday colour once something is typed into them.

use std::path::Path;

use rust_xlsxwriter::{
    ConditionalFormatBlank, DataValidation, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};
use todolist_core::{RenderError, Renderer, SheetDescriptor, SheetKind};

use crate::layout::{
    self, DEFAULT_COLUMN_WIDTH, DEFAULT_LAST_ROW, HEADERS, HEADER_BACKGROUND, HEADER_FONT,
    STATUS_COLUMN, STATUS_OPTIONS, TYPE_COLUMN, TYPE_OPTIONS, WEEKEND_COLOR,
};

/// Excel workbook renderer
#[derive(Clone, Debug)]
pub struct ExcelRenderer {
    /// Width of columns A..G
    pub column_width: f64,
    /// Last formatted row, 1-based
    pub last_row: u32,
}

impl Default for ExcelRenderer {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            last_row: DEFAULT_LAST_ROW,
        }
    }
}

impl ExcelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set width of columns A..G
    pub fn column_width(mut self, width: f64) -> Self {
        self.column_width = width;
        self
    }

    /// Set the last row (1-based) covered by fills and dropdowns
    pub fn last_row(mut self, row: u32) -> Self {
        self.last_row = row;
        self
    }

    /// Generate Excel workbook bytes
    pub fn render_to_bytes(&self, sheets: &[SheetDescriptor]) -> Result<Vec<u8>, RenderError> {
        if self.last_row < 2 {
            return Err(RenderError::InvalidData(format!(
                "last row must leave room below the header, got {}",
                self.last_row
            )));
        }

        let mut workbook = Workbook::new();
        let formats = self.create_formats();

        for sheet in sheets {
            match &sheet.kind {
                SheetKind::Workday { .. } => {
                    self.add_workday_sheet(&mut workbook, sheet, &formats)?;
                }
                SheetKind::WeekendGap { .. } => {
                    self.add_weekend_sheet(&mut workbook, sheet, &formats)?;
                }
            }
        }

        let buffer = workbook
            .save_to_buffer()
            .map_err(|e| RenderError::Format(format!("Failed to create Excel: {e}")))?;

        tracing::debug!(sheets = sheets.len(), bytes = buffer.len(), "rendered workbook");

        Ok(buffer)
    }

    /// Render and write the workbook to `path`.
    ///
    /// The workbook is built in memory first; the file is only created
    /// once rendering has succeeded.
    pub fn save(&self, sheets: &[SheetDescriptor], path: &Path) -> Result<(), RenderError> {
        let bytes = self.render(sheets)?;
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), sheets = sheets.len(), "saved workbook");
        Ok(())
    }

    /// Create reusable formats
    fn create_formats(&self) -> ExcelFormats {
        let header = Format::new()
            .set_bold()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_background_color(HEADER_BACKGROUND)
            .set_font_color(HEADER_FONT)
            .set_border(FormatBorder::Thin);

        let weekdays = layout::WEEKDAY_COLORS.map(|color| Format::new().set_background_color(color));

        let weekend = Format::new().set_background_color(WEEKEND_COLOR);

        ExcelFormats {
            header,
            weekdays,
            weekend,
        }
    }

    /// Zero-based index of the last formatted row
    fn last_row_index(&self) -> u32 {
        self.last_row - 1
    }

    /// Add a workday sheet
    fn add_workday_sheet(
        &self,
        workbook: &mut Workbook,
        descriptor: &SheetDescriptor,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let index = descriptor.weekday_index().ok_or_else(|| {
            RenderError::InvalidData(format!("'{}' is not a workday sheet", descriptor.name))
        })?;
        let color = layout::weekday_color(index).ok_or_else(|| {
            RenderError::InvalidData(format!(
                "'{}' has no colour for weekday index {index}",
                descriptor.name
            ))
        })?;
        let body = &formats.weekdays[usize::from(index)];
        let last_row = self.last_row_index();
        let last_col = layout::last_column();

        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&descriptor.name)
            .map_err(|e| RenderError::Format(e.to_string()))?;
        sheet.set_tab_color(color);

        self.write_headers(sheet, formats)?;

        let filled = ConditionalFormatBlank::new()
            .invert()
            .set_format(body.clone());
        sheet
            .add_conditional_format(1, 0, last_row, last_col, &filled)
            .map_err(|e| RenderError::Format(e.to_string()))?;

        self.set_widths(sheet, None)?;

        let status = DataValidation::new()
            .allow_list_strings(&STATUS_OPTIONS)
            .map_err(|e| RenderError::Format(e.to_string()))?;
        sheet
            .add_data_validation(1, STATUS_COLUMN, last_row, STATUS_COLUMN, &status)
            .map_err(|e| RenderError::Format(e.to_string()))?;

        let kind = DataValidation::new()
            .allow_list_strings(&TYPE_OPTIONS)
            .map_err(|e| RenderError::Format(e.to_string()))?;
        sheet
            .add_data_validation(1, TYPE_COLUMN, last_row, TYPE_COLUMN, &kind)
            .map_err(|e| RenderError::Format(e.to_string()))?;

        tracing::debug!(sheet = %descriptor.name, weekday = index, "added workday sheet");
        Ok(())
    }

    /// Add a weekend separator sheet
    fn add_weekend_sheet(
        &self,
        workbook: &mut Workbook,
        descriptor: &SheetDescriptor,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&descriptor.name)
            .map_err(|e| RenderError::Format(e.to_string()))?;
        sheet.set_tab_color(WEEKEND_COLOR);

        let filled = ConditionalFormatBlank::new()
            .invert()
            .set_format(formats.weekend.clone());
        sheet
            .add_conditional_format(0, 0, self.last_row_index(), layout::last_column(), &filled)
            .map_err(|e| RenderError::Format(e.to_string()))?;

        self.set_widths(sheet, Some(&formats.weekend))?;

        tracing::debug!(sheet = %descriptor.name, "added weekend sheet");
        Ok(())
    }

    fn write_headers(&self, sheet: &mut Worksheet, formats: &ExcelFormats) -> Result<(), RenderError> {
        for (col, header) in HEADERS.iter().enumerate() {
            sheet
                .write_with_format(0, col as u16, *header, &formats.header)
                .map_err(|e| RenderError::Format(e.to_string()))?;
        }
        Ok(())
    }

    /// Column widths (and an optional column format) for A..G
    fn set_widths(&self, sheet: &mut Worksheet, format: Option<&Format>) -> Result<(), RenderError> {
        for col in 0..=layout::last_column() {
            sheet
                .set_column_width(col, self.column_width)
                .map_err(|e| RenderError::Format(e.to_string()))?;
            if let Some(format) = format {
                sheet
                    .set_column_format(col, format)
                    .map_err(|e| RenderError::Format(e.to_string()))?;
            }
        }
        Ok(())
    }
}

/// Reusable cell formats
struct ExcelFormats {
    header: Format,
    /// Body fill per weekday, Monday first
    weekdays: [Format; 5],
    weekend: Format,
}

impl Renderer for ExcelRenderer {
    type Output = Vec<u8>;

    fn render(&self, sheets: &[SheetDescriptor]) -> Result<Vec<u8>, RenderError> {
        if sheets.is_empty() {
            return Err(RenderError::InvalidData("No sheets to render".into()));
        }
        self.render_to_bytes(sheets)
    }
}
