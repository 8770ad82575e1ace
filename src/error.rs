//! The one error type the binary surfaces.
//!
//! The fitting core never errors (unmet preconditions yield empty results),
//! so errors only arise at the edges: argument validation, file I/O, and
//! terminal setup.

/// A user-facing failure carrying the process exit code it maps to.
///
/// Exit code 2 means bad input (flags, files, extents); 4 means a runtime
/// problem (terminal setup, draw/event errors).
#[derive(Debug, Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_only_the_message() {
        let err = AppError::new(2, "bad flag");
        assert_eq!(err.to_string(), "bad flag");
        assert_eq!(err.exit_code(), 2);
    }
}
