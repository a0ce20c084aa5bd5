//! Audio/video mute values (`AVMT`)

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Mute state, both as reported and as sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvMute {
    VideoOn,
    VideoOff,
    AudioOn,
    AudioOff,
    AudioVideoOn,
    AudioVideoOff,
}

impl AvMute {
    /// Two-digit wire value
    pub fn code(self) -> &'static str {
        match self {
            Self::VideoOff => "10",
            Self::VideoOn => "11",
            Self::AudioOff => "20",
            Self::AudioOn => "21",
            Self::AudioVideoOff => "30",
            Self::AudioVideoOn => "31",
        }
    }

    /// Check if this value turns a mute on
    pub fn is_muted(self) -> bool {
        matches!(self, Self::VideoOn | Self::AudioOn | Self::AudioVideoOn)
    }
}

impl FromStr for AvMute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "10" => Ok(Self::VideoOff),
            "11" => Ok(Self::VideoOn),
            "20" => Ok(Self::AudioOff),
            "21" => Ok(Self::AudioOn),
            "30" => Ok(Self::AudioVideoOff),
            "31" => Ok(Self::AudioVideoOn),
            _ => Err(Error::Parse(format!("Unknown mute value: {s:?}"))),
        }
    }
}

impl fmt::Display for AvMute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
