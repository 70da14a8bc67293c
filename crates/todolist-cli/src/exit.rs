//! Exit codes and run outcomes
//!
//! | Exit Code | Meaning |
//! |-----------|---------|
//! | 0 | Workbook created, plan printed, or generation cancelled |
//! | 1 | Invalid input, bad configuration, or the file could not be written |

use std::path::PathBuf;
use std::process;

/// Exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        process::ExitCode::from(code as u8)
    }
}

/// What a successful run did; every outcome exits with `ExitCode::Success`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Workbook written to this path
    Created(PathBuf),
    /// Sheet plan printed, nothing written
    Planned,
    /// User left the prompt without entering a month/year
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::Success as u8, 0);
        assert_eq!(ExitCode::Failure as u8, 1);
    }

    #[test]
    fn converts_to_process_exit_code() {
        assert_eq!(process::ExitCode::from(ExitCode::Success), process::ExitCode::SUCCESS);
        assert_eq!(process::ExitCode::from(ExitCode::Failure), process::ExitCode::FAILURE);
    }
}
