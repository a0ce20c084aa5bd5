//! Transport errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not connected")]
    NotConnected,

    #[error("Already connected")]
    AlreadyConnected,

    #[error("Failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Connection to {addr} timed out after {millis}ms")]
    ConnectionTimeout {
        addr: String,
        millis: u64,
    },

    #[error("Read timeout after {millis}ms")]
    ReadTimeout {
        millis: u64,
    },

    #[error("Line exceeds {max} bytes without a terminator")]
    LineTooLong {
        max: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Check if the error comes from reaching or hearing from the projector
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::Connect { .. }
                | Self::ConnectionTimeout { .. }
                | Self::ReadTimeout { .. }
                | Self::LineTooLong { .. }
                | Self::InvalidAddress(_)
                | Self::Io(_)
        )
    }
}
