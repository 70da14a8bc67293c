//! Calendar partitioning
//!
//! Walks a calendar month and produces the ordered list of sheets the
//! workbook is built from: one sheet per weekday, plus a single
//! `WEEKEND <n>` separator after every Friday that is not the last day
//! of the month.
//!
//! ```text
//! November 2025 (starts on a Saturday)
//!
//! 03-11-2025  04-11-2025  05-11-2025  06-11-2025  07-11-2025  WEEKEND 1
//! 10-11-2025  ...                                 14-11-2025  WEEKEND 2
//! ...
//! 24-11-2025  ...                                 28-11-2025  WEEKEND 4
//! ```
//!
//! Saturday and Sunday never get sheets of their own. A weekend that
//! trails the month (the month ends on a Friday, or on Saturday/Sunday
//! after a Friday gap was already emitted) adds nothing further.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use serde::Serialize;

use crate::InputError;

/// `strftime` pattern used for workday sheet names
pub const SHEET_DATE_FORMAT: &str = "%d-%m-%Y";

/// Prefix of the weekend separator sheet names
pub const WEEKEND_PREFIX: &str = "WEEKEND";

/// Inclusive span of dates covering one calendar month
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonthRange {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl MonthRange {
    /// Build the range for `(year, month)`.
    ///
    /// The last day is the day before the first of the following month,
    /// so December rolls over into January of the next year.
    pub fn new(year: i32, month: u32) -> Result<Self, InputError> {
        if !(1..=12).contains(&month) {
            return Err(InputError::MonthOutOfRange(i64::from(month)));
        }

        let invalid = || InputError::InvalidDate { year, month };

        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;
        let last_day = next_month_start.pred_opt().ok_or_else(invalid)?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// Every date from `first_day` to `last_day`, inclusive
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day;
        self.first_day.iter_days().take_while(move |d| *d <= last)
    }

    /// Number of calendar days in the month
    pub fn day_count(&self) -> usize {
        (self.last_day - self.first_day).num_days() as usize + 1
    }

    /// Number of Monday-Friday dates in the month
    pub fn weekday_count(&self) -> usize {
        self.days().filter(|d| is_weekday(*d)).count()
    }

    /// English month name ("November")
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("", |m| m.name())
    }
}

/// What a sheet stands for
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SheetKind {
    /// One Monday-Friday date
    Workday { date: NaiveDate, weekday: Weekday },
    /// Placeholder for the Saturday+Sunday pair after a Friday
    WeekendGap {
        /// 1-based count of gaps emitted so far
        ordinal: u32,
    },
}

/// One sheet of the output workbook
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SheetDescriptor {
    /// Sheet tab name (`DD-MM-YYYY` or `WEEKEND <n>`)
    pub name: String,
    pub kind: SheetKind,
}

impl SheetDescriptor {
    pub fn workday(date: NaiveDate) -> Self {
        Self {
            name: date.format(SHEET_DATE_FORMAT).to_string(),
            kind: SheetKind::Workday {
                date,
                weekday: date.weekday(),
            },
        }
    }

    pub fn weekend_gap(ordinal: u32) -> Self {
        Self {
            name: format!("{WEEKEND_PREFIX} {ordinal}"),
            kind: SheetKind::WeekendGap { ordinal },
        }
    }

    pub fn is_workday(&self) -> bool {
        matches!(self.kind, SheetKind::Workday { .. })
    }

    /// Monday = 0 ... Friday = 4; `None` for weekend gaps
    pub fn weekday_index(&self) -> Option<u8> {
        match self.kind {
            SheetKind::Workday { weekday, .. } => Some(weekday.num_days_from_monday() as u8),
            SheetKind::WeekendGap { .. } => None,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self.kind {
            SheetKind::Workday { date, .. } => Some(date),
            SheetKind::WeekendGap { .. } => None,
        }
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Partition a month into ordered workbook sheets.
///
/// Produces a workday sheet for each Monday-Friday date in increasing
/// order. A weekend gap follows each Friday unless that Friday is the
/// last day of the month.
pub fn partition(range: &MonthRange) -> Vec<SheetDescriptor> {
    let mut sheets = Vec::with_capacity(range.weekday_count() + 5);
    let mut gaps = 0u32;

    for day in range.days() {
        if !is_weekday(day) {
            continue;
        }

        sheets.push(SheetDescriptor::workday(day));

        if day.weekday() == Weekday::Fri && day != range.last_day {
            gaps += 1;
            sheets.push(SheetDescriptor::weekend_gap(gaps));
        }
    }

    tracing::debug!(
        year = range.year,
        month = range.month,
        workdays = sheets.len() - gaps as usize,
        weekend_gaps = gaps,
        "partitioned month"
    );

    sheets
}

/// Parse a workday sheet name back into its date.
///
/// Returns `None` for weekend gaps and anything not in `DD-MM-YYYY` form.
pub fn parse_sheet_date(name: &str) -> Option<NaiveDate> {
    if name.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(name, SHEET_DATE_FORMAT).ok()
}
