//! High-level error types

use pjlink_types::ErrorCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] pjlink_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] pjlink_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] pjlink_types::Error),

    #[error("Could not turn on projector: {0}")]
    CouldNotTurnOn(String),

    #[error("Could not turn off projector: {0}")]
    CouldNotTurnOff(String),

    #[error("Projector rejected {command}: {code}")]
    Rejected {
        command: String,
        code: ErrorCode,
    },
}

impl Error {
    /// Check if the request was refused locally, before anything was sent
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_validation())
    }

    /// Check if the projector could not be reached or stopped answering
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connection())
    }

    /// Check if the projector refused the password
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Core(pjlink_core::Error::AuthenticationFailed))
    }
}
