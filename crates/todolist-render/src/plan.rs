//! Plain-text sheet plan
//!
//! Lists the sheets a workbook would contain without building it:
//!
//! ```text
//!  1  03-11-2025  Monday
//!  2  04-11-2025  Tuesday
//!  ...
//!  6  WEEKEND 1   weekend
//!
//! 20 workday sheets, 4 weekend sheets
//! ```

use std::fmt::Write;

use todolist_core::{RenderError, Renderer, SheetDescriptor, SheetKind};

/// Text renderer for the sheet list
#[derive(Clone, Copy, Debug, Default)]
pub struct PlanRenderer;

impl PlanRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn weekday_label(kind: &SheetKind) -> &'static str {
    match kind {
        SheetKind::Workday { weekday, .. } => match weekday {
            chrono::Weekday::Mon => "Monday",
            chrono::Weekday::Tue => "Tuesday",
            chrono::Weekday::Wed => "Wednesday",
            chrono::Weekday::Thu => "Thursday",
            chrono::Weekday::Fri => "Friday",
            chrono::Weekday::Sat => "Saturday",
            chrono::Weekday::Sun => "Sunday",
        },
        SheetKind::WeekendGap { .. } => "weekend",
    }
}

impl Renderer for PlanRenderer {
    type Output = String;

    fn render(&self, sheets: &[SheetDescriptor]) -> Result<String, RenderError> {
        if sheets.is_empty() {
            return Err(RenderError::InvalidData("No sheets to render".into()));
        }

        let index_width = sheets.len().to_string().len();
        let name_width = sheets.iter().map(|s| s.name.len()).max().unwrap_or(0);
        let mut out = String::new();

        for (i, sheet) in sheets.iter().enumerate() {
            writeln!(
                out,
                "{:>iw$}  {:<nw$}  {}",
                i + 1,
                sheet.name,
                weekday_label(&sheet.kind),
                iw = index_width,
                nw = name_width,
            )
            .map_err(|e| RenderError::Format(e.to_string()))?;
        }

        let workdays = sheets.iter().filter(|s| s.is_workday()).count();
        writeln!(
            out,
            "\n{} workday sheets, {} weekend sheets",
            workdays,
            sheets.len() - workdays
        )
        .map_err(|e| RenderError::Format(e.to_string()))?;

        Ok(out)
    }
}
