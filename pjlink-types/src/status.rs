//! Power, error code and error status values

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Power state reported by `POWR ?`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerStatus {
    Standby,
    On,
    Cooling,
    WarmUp,
}

impl PowerStatus {
    /// Check if the projector is on or getting there
    pub fn is_powered(self) -> bool {
        matches!(self, Self::On | Self::WarmUp)
    }

    /// Check if the projector is between states
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Cooling | Self::WarmUp)
    }
}

impl FromStr for PowerStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "0" => Ok(Self::Standby),
            "1" => Ok(Self::On),
            "2" => Ok(Self::Cooling),
            "3" => Ok(Self::WarmUp),
            _ => Err(Error::Parse(format!("Unknown power status: {s:?}"))),
        }
    }
}

impl fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standby => "standby",
            Self::On => "on",
            Self::Cooling => "cooling",
            Self::WarmUp => "warm-up",
        };
        f.write_str(name)
    }
}

/// Command rejection codes carried as a reply value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// ERR1
    UndefinedCommand,
    /// ERR2
    OutOfParameter,
    /// ERR3
    UnavailableTime,
    /// ERR4
    ProjectorFailure,
}

impl ErrorCode {
    /// Wire form (`ERR1`..`ERR4`)
    pub fn code(self) -> &'static str {
        match self {
            Self::UndefinedCommand => "ERR1",
            Self::OutOfParameter => "ERR2",
            Self::UnavailableTime => "ERR3",
            Self::ProjectorFailure => "ERR4",
        }
    }

    /// Map a reply value to an error code, if it is one
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "ERR1" => Some(Self::UndefinedCommand),
            "ERR2" => Some(Self::OutOfParameter),
            "ERR3" => Some(Self::UnavailableTime),
            "ERR4" => Some(Self::ProjectorFailure),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::UndefinedCommand => "undefined command",
            Self::OutOfParameter => "out of parameter",
            Self::UnavailableTime => "unavailable time",
            Self::ProjectorFailure => "projector failure",
        };
        write!(f, "{} ({})", self.code(), reason)
    }
}

/// Health of a single component in the `ERST` report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Health {
    Ok,
    Warning,
    Error,
}

impl TryFrom<char> for Health {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '0' => Ok(Health::Ok),
            '1' => Ok(Health::Warning),
            '2' => Ok(Health::Error),
            _ => Err(Error::Parse(format!("Unknown health digit: {c:?}"))),
        }
    }
}

/// Six-digit error report from `ERST ?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorStatus {
    pub fan: Health,
    pub lamp: Health,
    pub temperature: Health,
    pub cover_open: Health,
    pub filter: Health,
    pub other: Health,
}

impl ErrorStatus {
    /// Check if every component reports OK
    pub fn is_healthy(&self) -> bool {
        self.components().iter().all(|(_, h)| *h == Health::Ok)
    }

    /// Components with their names, in report order
    pub fn components(&self) -> [(&'static str, Health); 6] {
        [
            ("fan", self.fan),
            ("lamp", self.lamp),
            ("temperature", self.temperature),
            ("cover", self.cover_open),
            ("filter", self.filter),
            ("other", self.other),
        ]
    }
}

impl FromStr for ErrorStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .chars()
            .map(Health::try_from)
            .collect::<Result<Vec<_>>>()?;

        match digits.as_slice() {
            &[fan, lamp, temperature, cover_open, filter, other] => Ok(Self {
                fan,
                lamp,
                temperature,
                cover_open,
                filter,
                other,
            }),
            _ => Err(Error::Parse(format!(
                "Error status must be 6 digits, got {s:?}"
            ))),
        }
    }
}
