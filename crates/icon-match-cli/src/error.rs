//! Exit codes and top-level error reporting.

use tracing::error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Log `err` with its cause chain and return the failure exit code.
pub fn report(err: &anyhow::Error) -> i32 {
    error!("{:#}", err);
    CliExitCode::Failure.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(CliExitCode::Success), 0);
        assert_eq!(i32::from(CliExitCode::Failure), 1);
    }

    #[test]
    fn test_report_returns_failure() {
        let err = anyhow::anyhow!("catalog missing").context("loading catalog");
        assert_eq!(report(&err), 1);
    }
}
