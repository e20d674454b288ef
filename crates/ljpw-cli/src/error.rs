//! Exit codes for the `ljpw` binary.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | General or numeric error (divergence, capacity, I/O) |
//! | 2 | Invalid input or configuration |

use ljpw_core::LjpwError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    Error = 1,
    InvalidInput = 2,
}

impl CliExitCode {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code.code()
    }
}

/// Map an error to its exit code.
///
/// Anything that is not an [`LjpwError`] counts as a general error.
pub fn exit_code_for_error(err: &anyhow::Error) -> CliExitCode {
    match err.downcast_ref::<LjpwError>() {
        Some(
            LjpwError::NonPositiveComponent { .. }
            | LjpwError::NonFiniteComponent { .. }
            | LjpwError::InvalidParameter { .. }
            | LjpwError::ConfigError(_)
            | LjpwError::ParseError(_),
        ) => CliExitCode::InvalidInput,
        Some(
            LjpwError::Diverged { .. }
            | LjpwError::CapacityError(_)
            | LjpwError::SerializationError(_),
        ) => CliExitCode::Error,
        None => CliExitCode::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(CliExitCode::Success.code(), 0);
        assert_eq!(CliExitCode::Error.code(), 1);
        assert_eq!(i32::from(CliExitCode::InvalidInput), 2);
    }

    #[test]
    fn test_invalid_input_errors() {
        let err = anyhow::Error::new(LjpwError::ParseError("bad".into()));
        assert_eq!(exit_code_for_error(&err), CliExitCode::InvalidInput);

        let err = anyhow::Error::new(LjpwError::ConfigError("bad".into()));
        assert_eq!(exit_code_for_error(&err), CliExitCode::InvalidInput);
    }

    #[test]
    fn test_context_preserves_code() {
        let err = anyhow::Error::new(LjpwError::Diverged { step: 3, time: 0.03 })
            .context("simulation failed");
        assert_eq!(exit_code_for_error(&err), CliExitCode::Error);
    }

    #[test]
    fn test_foreign_error_is_general() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code_for_error(&err), CliExitCode::Error);
    }
}
