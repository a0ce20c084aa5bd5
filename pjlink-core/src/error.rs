//! Error types for pjlink-core

/// Result type alias for pjlink-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command mnemonic is not four bytes long
    #[error("Invalid command length: expected 4 characters, got {actual} ({command:?})")]
    InvalidCommandLength {
        command: String,
        actual: usize,
    },

    /// Parameter longer than the protocol maximum
    #[error("Parameter too long: {size} bytes (max: {max} bytes)")]
    InvalidParameterLength {
        size: usize,
        max: usize,
    },

    /// Parameter of length zero
    #[error("Parameter must not be empty")]
    EmptyParameter,

    /// Class outside 1..=2
    #[error("Invalid PJLink class {0}: must be 1 or 2")]
    InvalidClass(u8),

    /// Mnemonic not in the catalog of its class
    #[error("Unknown class {class} command: {command}")]
    UnknownCommand {
        class: u8,
        command: String,
    },

    /// Class 2 commands are recognized but never sent
    #[error("Class 2 command {0} is not supported")]
    UnsupportedClass(String),

    /// Greeting rejected in strict mode
    #[error("Unexpected greeting: {0:?}")]
    UnexpectedGreeting(String),

    /// Projector answered ERRA
    #[error("Authentication failed - incorrect password")]
    AuthenticationFailed,

    /// Reply line carried no data
    #[error("Empty response from projector")]
    EmptyResponse,

    /// Reply header does not have the `%<class><command>=<value>` shape
    #[error("Malformed response: {0:?}")]
    MalformedResponse(String),
}

impl Error {
    /// Check if error is a local request validation failure (nothing was sent)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidCommandLength { .. }
                | Self::InvalidParameterLength { .. }
                | Self::EmptyParameter
                | Self::InvalidClass(_)
                | Self::UnknownCommand { .. }
                | Self::UnsupportedClass(_)
        )
    }

    /// Check if error comes from parsing a line received from the projector
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedGreeting(_) | Self::EmptyResponse | Self::MalformedResponse(_)
        )
    }
}
