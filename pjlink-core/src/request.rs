//! PJLink request validation and wire encoding

use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::{
    auth, catalog,
    constants::{COMMAND_LEN, HEADER_MARK, LINE_TERMINATOR, MAX_PARAMETER_LEN, QUERY},
    error::{Error, Result},
};

/// A single PJLink command
///
/// # Wire format
///
/// ```text
/// [<md5 hex digest>]%<class><command> <parameter>\r
/// ```
///
/// The digest prefix is only present when the projector issued a seed and a
/// password is configured.
///
/// # Examples
///
/// ```
/// use pjlink_core::Request;
///
/// let request = Request::new(1, "POWR", "1");
/// let encoded = request.encode("", "").unwrap();
/// assert_eq!(&encoded[..], b"%1POWR 1\r");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    class: u8,
    command: String,
    parameter: String,
}

impl Request {
    /// Create a request; nothing is checked until [`Request::validate`]
    pub fn new(class: u8, command: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            class,
            command: command.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a class 1 query (`?` parameter)
    pub fn query(command: impl Into<String>) -> Self {
        Self::new(crate::PROTOCOL_CLASS, command, QUERY)
    }

    /// PJLink class
    pub fn class(&self) -> u8 {
        self.class
    }

    /// Command mnemonic
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Command parameter
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Check if this request is a status query
    pub fn is_query(&self) -> bool {
        self.parameter == QUERY
    }

    /// Check the request against the protocol rules
    ///
    /// Checks run in this order: command length, parameter length, class,
    /// catalog membership. Class 2 mnemonics are recognized but rejected with
    /// [`Error::UnsupportedClass`].
    pub fn validate(&self) -> Result<()> {
        if self.command.len() != COMMAND_LEN {
            return Err(Error::InvalidCommandLength {
                command: self.command.clone(),
                actual: self.command.len(),
            });
        }

        if self.parameter.len() > MAX_PARAMETER_LEN {
            return Err(Error::InvalidParameterLength {
                size: self.parameter.len(),
                max: MAX_PARAMETER_LEN,
            });
        }

        if self.parameter.is_empty() {
            return Err(Error::EmptyParameter);
        }

        if self.class != 1 && self.class != 2 {
            return Err(Error::InvalidClass(self.class));
        }

        if !catalog::is_valid(self.class, &self.command) {
            return Err(Error::UnknownCommand {
                class: self.class,
                command: self.command.clone(),
            });
        }

        if self.class == 2 {
            return Err(Error::UnsupportedClass(self.command.clone()));
        }

        Ok(())
    }

    /// Validate and encode the request for the wire
    ///
    /// `seed` comes from the connection greeting (empty when the projector
    /// does not require authentication).
    pub fn encode(&self, seed: &str, password: &str) -> Result<Bytes> {
        self.validate()?;

        let prefix = auth::prefix(seed, password);

        // digest + '%' + class + command + ' ' + parameter + '\r'
        let size = prefix.as_ref().map_or(0, String::len) + COMMAND_LEN + self.parameter.len() + 4;
        let mut buf = BytesMut::with_capacity(size);

        if let Some(digest) = &prefix {
            buf.put_slice(digest.as_bytes());
        }
        buf.put_u8(HEADER_MARK as u8);
        buf.put_u8(b'0' + self.class);
        buf.put_slice(self.command.as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(self.parameter.as_bytes());
        buf.put_u8(LINE_TERMINATOR);

        trace!(
            command = %self,
            authenticated = prefix.is_some(),
            len = buf.len(),
            "Encoded request"
        );

        Ok(buf.freeze())
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}{} {}", self.class, self.command, self.parameter)
    }
}
