use thiserror::Error;

/// Error type for bearer credential extraction.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Missing Authorization Header")]
    MissingHeader,

    #[error("Malformed Authorization Header")]
    MalformedHeader,
}
