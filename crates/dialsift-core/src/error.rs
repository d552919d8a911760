use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("expected {expected}-digit numbers, got: {}", offending.join(", "))]
    InvalidTokens {
        expected: usize,
        offending: Vec<String>,
    },
    #[error("invalid token length: {0}")]
    InvalidTokenLength(usize),
    #[error("invalid prefix: {0:?}")]
    InvalidPrefix(String),
    #[error("invalid sample count: {0}")]
    InvalidSampleCount(i64),
    #[error("sample count {requested} exceeds available numbers ({available})")]
    SampleTooLarge { requested: i64, available: usize },
}
