use thiserror::Error;

/// Decode failures. All of them are local to the answer buffer being
/// decoded: the caller stops consuming that buffer and moves on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("message truncated")]
    Truncated,
    #[error("malformed domain name")]
    Malformed,
    #[error("domain name too long")]
    TooLong,
    #[error("record data length mismatch")]
    LengthMismatch,
}
