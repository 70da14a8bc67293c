//! Month/year entry validation
//!
//! Text entered by the user is parsed in two steps: first as a whole
//! number (`InputError::NotANumber`), then range-checked
//! (`MonthOutOfRange` / `YearOutOfRange`). Nothing here touches the
//! filesystem, so a rejected entry never leaves a file behind.

use crate::{InputError, MonthRange};

/// Inclusive window of accepted years
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl Default for YearBounds {
    fn default() -> Self {
        Self {
            min: 2020,
            max: 2050,
        }
    }
}

impl YearBounds {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    fn check(&self, year: i32) -> Result<i32, InputError> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(InputError::YearOutOfRange {
                year,
                min: self.min,
                max: self.max,
            })
        }
    }
}

fn parse_int<T: std::str::FromStr>(text: &str) -> Result<T, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Parse a month entry (1-12)
pub fn parse_month(text: &str) -> Result<u32, InputError> {
    let month: i64 = parse_int(text)?;
    if (1..=12).contains(&month) {
        Ok(month as u32)
    } else {
        Err(InputError::MonthOutOfRange(month))
    }
}

/// Parse a year entry and check it against `bounds`
pub fn parse_year(text: &str, bounds: YearBounds) -> Result<i32, InputError> {
    let year: i32 = parse_int(text)?;
    bounds.check(year)
}

/// Range-check an already numeric `(year, month)` and build its range
pub fn validate(year: i32, month: u32, bounds: YearBounds) -> Result<MonthRange, InputError> {
    if !(1..=12).contains(&month) {
        return Err(InputError::MonthOutOfRange(i64::from(month)));
    }
    bounds.check(year)?;
    MonthRange::new(year, month)
}
