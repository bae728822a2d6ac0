//! Error types for trace analysis

use thiserror::Error;

/// Errors raised by the analysis core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("empty input: {what} must contain at least one record")]
    EmptyInput { what: &'static str },

    #[error("thread {thread} appears in the trace but has no metadata record")]
    UnknownThread { thread: i64 },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        let err = AnalysisError::EmptyInput { what: "samples" };
        assert_eq!(
            err.to_string(),
            "empty input: samples must contain at least one record"
        );
    }

    #[test]
    fn test_unknown_thread_message() {
        let err = AnalysisError::UnknownThread { thread: 7 };
        assert!(err.to_string().contains("thread 7"));
        assert!(err.to_string().contains("no metadata record"));
    }
}
