//! Output file-name template
//!
//! Placeholders:
//!
//! | Placeholder    | Example    |
//! |----------------|------------|
//! | `{month}`      | `09`       |
//! | `{month_name}` | `September`|
//! | `{year}`       | `2025`     |
//!
//! `{{` and `}}` produce literal braces. The rendered name must be a bare
//! file name; the output directory is chosen separately.

use std::fmt;
use std::str::FromStr;

use crate::{MonthRange, TemplateError};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Month,
    MonthName,
    Year,
}

/// Parsed file-name template
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNameTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FileNameTemplate {
    /// `TO DO LIST-10-October 2025.xlsx`
    pub const DEFAULT: &'static str = "TO DO LIST-{month}-{month_name} {year}.xlsx";

    /// `TO DO LIST - October 2025.xlsx`
    pub const POPUP: &'static str = "TO DO LIST - {month_name} {year}.xlsx";

    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        if template.trim().is_empty() {
            return Err(TemplateError::Empty);
        }
        if let Some(sep) = template.chars().find(|c| matches!(c, '/' | '\\')) {
            return Err(TemplateError::PathSeparator(sep));
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        if c == '{' {
                            return Err(TemplateError::UnbalancedBrace(pos));
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::UnbalancedBrace(pos));
                    }
                    let segment = match name.as_str() {
                        "month" => Segment::Month,
                        "month_name" => Segment::MonthName,
                        "year" => Segment::Year,
                        _ => return Err(TemplateError::UnknownPlaceholder(name)),
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' => return Err(TemplateError::UnbalancedBrace(pos)),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// Template text as given
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Produce the file name for `range`
    pub fn render(&self, range: &MonthRange) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Month => out.push_str(&format!("{:02}", range.month)),
                Segment::MonthName => out.push_str(range.month_name()),
                Segment::Year => out.push_str(&range.year.to_string()),
            }
        }
        out
    }
}

impl Default for FileNameTemplate {
    fn default() -> Self {
        Self::parse(Self::DEFAULT).unwrap_or_else(|_| unreachable!("built-in template parses"))
    }
}

impl FromStr for FileNameTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FileNameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
