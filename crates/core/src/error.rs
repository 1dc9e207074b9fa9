//! Error type for Fibonacci index validation.
//!
//! There is exactly one expected failure: a negative index. It propagates
//! as a `Result` to the caller and is reported at the CLI boundary only.

/// Error returned by [`crate::fibonacci`].
///
/// This allows proper error propagation using `?` from the single
/// validation failure the calculator can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FibError {
    /// The requested index was invalid (negative)
    InvalidArgument(String),
}

impl FibError {
    /// The negative-index error, with its fixed message
    pub fn negative_index() -> Self {
        FibError::InvalidArgument("n must be non-negative".to_string())
    }
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::InvalidArgument(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FibError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_index_message() {
        let err = FibError::negative_index();
        assert_eq!(err.to_string(), "n must be non-negative");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FibError::negative_index(), FibError::negative_index());
        assert_ne!(
            FibError::negative_index(),
            FibError::InvalidArgument("other".to_string())
        );
    }
}
