//! Interactive month/year prompt
//!
//! Asks for the month, then the year, each pre-filled with a default that
//! Enter accepts. An invalid entry prints the reason and asks again.
//! `q` or end of input cancels.

use std::io::{self, BufRead, Write};

use todolist_core::{parse_month, parse_year, InputError, YearBounds};

/// Entries that cancel the prompt
const CANCEL_WORDS: [&str; 2] = ["q", "quit"];

/// Line-based prompt over any reader/writer pair
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `None` when the user cancels
    pub fn ask_month(&mut self, default: u32) -> io::Result<Option<u32>> {
        self.ask("Month (1-12)", default, parse_month)
    }

    /// `None` when the user cancels
    pub fn ask_year(&mut self, default: i32, bounds: YearBounds) -> io::Result<Option<i32>> {
        let label = format!("Year ({}-{})", bounds.min, bounds.max);
        self.ask(&label, default, |text| parse_year(text, bounds))
    }

    fn ask<T: std::fmt::Display + Copy>(
        &mut self,
        label: &str,
        default: T,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<Option<T>> {
        loop {
            write!(self.output, "{label} [{default}]: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let entry = line.trim();
            if CANCEL_WORDS.iter().any(|w| entry.eq_ignore_ascii_case(w)) {
                return Ok(None);
            }
            if entry.is_empty() {
                return Ok(Some(default));
            }

            match parse(entry) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!(entry, error = %e, "rejected entry");
                    writeln!(self.output, "  {e}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    fn transcript(prompt: Prompt<&[u8], Vec<u8>>) -> String {
        String::from_utf8(prompt.output).unwrap()
    }

    #[test]
    fn reads_month() {
        let mut p = prompt("11\n");
        assert_eq!(p.ask_month(1).unwrap(), Some(11));
        assert_eq!(transcript(p), "Month (1-12) [1]: ");
    }

    #[test]
    fn empty_entry_takes_default() {
        let mut p = prompt("\n");
        assert_eq!(p.ask_month(7).unwrap(), Some(7));
    }

    #[test]
    fn invalid_entries_are_reasked() {
        let mut p = prompt("abc\n13\n4\n");
        assert_eq!(p.ask_month(1).unwrap(), Some(4));

        let out = transcript(p);
        assert!(out.contains("'abc' is not a whole number"));
        assert!(out.contains("month 13 is outside 1-12"));
        assert_eq!(out.matches("Month (1-12)").count(), 3);
    }

    #[test]
    fn year_respects_bounds() {
        let mut p = prompt("1999\n2025\n");
        assert_eq!(p.ask_year(2024, YearBounds::default()).unwrap(), Some(2025));

        let out = transcript(p);
        assert!(out.starts_with("Year (2020-2050) [2024]: "));
        assert!(out.contains("year 1999 is outside 2020-2050"));
    }

    #[test]
    fn end_of_input_cancels() {
        let mut p = prompt("");
        assert_eq!(p.ask_month(1).unwrap(), None);

        let mut p = prompt("abc\n");
        assert_eq!(p.ask_month(1).unwrap(), None);
    }

    #[test]
    fn quit_cancels() {
        let mut p = prompt("Q\n");
        assert_eq!(p.ask_year(2025, YearBounds::default()).unwrap(), None);
    }
}
