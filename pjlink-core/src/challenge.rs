//! Connection greeting parsing
//!
//! On every new connection the projector sends one line before anything else:
//!
//! ```text
//! PJLINK 0            authentication disabled
//! PJLINK 1 <seed>     authentication required, seed is opaque
//! ```

use crate::{
    constants::{GREETING_MARKER, auth_flags},
    error::{Error, Result},
};

/// How an unrecognized greeting is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GreetingMode {
    /// Anything unrecognized is read as "no authentication"
    #[default]
    Lenient,

    /// Anything unrecognized fails with [`Error::UnexpectedGreeting`]
    Strict,
}

/// Authentication challenge derived from the greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Challenge {
    /// Commands are sent without a digest
    NoAuth,

    /// Commands must carry the digest of `seed` + password
    Auth {
        seed: String,
    },
}

impl Challenge {
    /// Parse greeting tokens, falling back to [`Challenge::NoAuth`]
    ///
    /// # Examples
    ///
    /// ```
    /// use pjlink_core::Challenge;
    ///
    /// assert_eq!(Challenge::parse(&["PJLINK", "0"]), Challenge::NoAuth);
    /// assert_eq!(Challenge::parse(&["PJLINK", "1", "abcdef12"]).seed(), "abcdef12");
    /// assert_eq!(Challenge::parse(&["HELLO"]), Challenge::NoAuth);
    /// ```
    pub fn parse(tokens: &[&str]) -> Self {
        Self::parse_strict(tokens).unwrap_or(Self::NoAuth)
    }

    /// Parse greeting tokens, rejecting anything that is not a PJLink greeting
    pub fn parse_strict(tokens: &[&str]) -> Result<Self> {
        let unexpected = || Error::UnexpectedGreeting(tokens.join(" "));

        if tokens.first() != Some(&GREETING_MARKER) {
            return Err(unexpected());
        }

        match tokens.get(1).copied() {
            Some(auth_flags::DISABLED) => Ok(Self::NoAuth),
            Some(auth_flags::ENABLED) => match tokens.get(2) {
                Some(seed) => Ok(Self::Auth {
                    seed: (*seed).to_string(),
                }),
                None => Err(unexpected()),
            },
            _ => Err(unexpected()),
        }
    }

    /// Parse a greeting line (terminator already stripped)
    pub fn from_greeting(line: &str, mode: GreetingMode) -> Result<Self> {
        let tokens: Vec<&str> = line.split(' ').collect();

        match mode {
            GreetingMode::Lenient => Ok(Self::parse(&tokens)),
            GreetingMode::Strict => Self::parse_strict(&tokens),
        }
    }

    /// Seed to hash with the password (empty when no authentication)
    pub fn seed(&self) -> &str {
        match self {
            Self::NoAuth => "",
            Self::Auth { seed } => seed,
        }
    }

    /// Check if authentication is required
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}
