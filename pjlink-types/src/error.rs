//! Error types for pjlink-types

/// Result type alias for pjlink-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or decoding typed reply values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Value outside the range the protocol allows
    #[error("Invalid value: {0}")]
    Validation(String),

    /// Reply token that does not decode to the expected type
    #[error("Cannot decode reply: {0}")]
    Parse(String),
}

impl Error {
    /// Check if the error comes from decoding a projector reply
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}
