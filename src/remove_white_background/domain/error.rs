use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Threshold must be between 0 and 255, got {0}")]
    ThresholdOutOfRange(i64),
}
