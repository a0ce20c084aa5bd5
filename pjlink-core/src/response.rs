//! PJLink reply parsing

use std::fmt;

use tracing::trace;

use crate::{
    constants::{AUTH_ERROR, COMMAND_LEN, HEADER_MARK, OK},
    error::{Error, Result},
};

/// Offset of the `=` separating the reply header from its value
const VALUE_SEPARATOR_OFFSET: usize = 2 + COMMAND_LEN;

/// Parsed projector reply
///
/// # Reply format
///
/// ```text
/// %<class><command>=<value>[ <token>...]
/// ```
///
/// The value after `=` is the first token; any further space-separated tokens
/// follow in order.
///
/// # Examples
///
/// ```
/// use pjlink_core::Response;
///
/// let response = Response::parse("%1POWR=OK").unwrap();
/// assert_eq!(response.command, "POWR");
/// assert!(response.is_success());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Class digit echoed by the projector
    pub class: String,

    /// Command mnemonic echoed by the projector
    pub command: String,

    /// Reply value followed by any extra tokens
    pub tokens: Vec<String>,
}

impl Response {
    /// Parse a reply line (terminator already stripped)
    ///
    /// # Errors
    ///
    /// - [`Error::AuthenticationFailed`] if the line contains `ERRA`
    /// - [`Error::EmptyResponse`] if the line is empty
    /// - [`Error::MalformedResponse`] if the header is not `%<class><command>=`
    ///
    /// Device-level rejections (`ERR1`..`ERR4`) parse successfully and show up
    /// as the first token.
    pub fn parse(line: &str) -> Result<Self> {
        trace!(line, "Parsing response");

        if line.contains(AUTH_ERROR) {
            return Err(Error::AuthenticationFailed);
        }

        if line.is_empty() {
            return Err(Error::EmptyResponse);
        }

        let mut parts = line.split(' ');
        let header = parts.next().unwrap_or_default();

        let malformed = || Error::MalformedResponse(line.to_string());

        if !header.starts_with(HEADER_MARK)
            || header.as_bytes().get(VALUE_SEPARATOR_OFFSET) != Some(&b'=')
        {
            return Err(malformed());
        }

        let class = header.get(1..2).ok_or_else(malformed)?;
        let command = header
            .get(2..VALUE_SEPARATOR_OFFSET)
            .filter(|command| command.is_ascii())
            .ok_or_else(malformed)?;
        let value = header.get(VALUE_SEPARATOR_OFFSET + 1..).ok_or_else(malformed)?;

        let tokens = std::iter::once(value)
            .chain(parts)
            .map(str::to_string)
            .collect();

        Ok(Self {
            class: class.to_string(),
            command: command.to_string(),
            tokens,
        })
    }

    /// First token (the value after `=`)
    pub fn value(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    /// Check if the projector accepted the command
    pub fn is_success(&self) -> bool {
        self.value() == OK
    }

    /// Check if the projector answered with an `ERRn` code
    pub fn is_error(&self) -> bool {
        let value = self.value();
        value.len() == 4 && value.starts_with("ERR")
    }

    /// All tokens joined back with single spaces
    ///
    /// Useful for free-text replies such as `NAME` or `INFO`.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}{}={}", self.class, self.command, self.text())
    }
}
