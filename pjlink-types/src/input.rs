//! Input source values (`INPT`, `INST`)

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Input signal type, the first digit of an input value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Rgb,
    Video,
    Digital,
    Storage,
    Network,
}

impl InputKind {
    fn digit(self) -> char {
        match self {
            Self::Rgb => '1',
            Self::Video => '2',
            Self::Digital => '3',
            Self::Storage => '4',
            Self::Network => '5',
        }
    }
}

impl TryFrom<char> for InputKind {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '1' => Ok(Self::Rgb),
            '2' => Ok(Self::Video),
            '3' => Ok(Self::Digital),
            '4' => Ok(Self::Storage),
            '5' => Ok(Self::Network),
            _ => Err(Error::Parse(format!("Unknown input type: {c:?}"))),
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rgb => "RGB",
            Self::Video => "VIDEO",
            Self::Digital => "DIGITAL",
            Self::Storage => "STORAGE",
            Self::Network => "NETWORK",
        };
        f.write_str(name)
    }
}

/// Input source: signal type plus a channel number `1`..`9`
///
/// `Display` renders the two-character wire value, so the same value can be
/// sent back with `INPT`.
///
/// # Examples
///
/// ```
/// use pjlink_types::{InputKind, InputSource};
///
/// let input: InputSource = "31".parse().unwrap();
/// assert_eq!(input.kind, InputKind::Digital);
/// assert_eq!(input.to_string(), "31");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputSource {
    pub kind: InputKind,
    pub number: char,
}

impl InputSource {
    /// Create an input source, checking the channel number
    pub fn new(kind: InputKind, number: char) -> Result<Self> {
        if !('1'..='9').contains(&number) {
            return Err(Error::Validation(format!(
                "Input number must be 1-9, got {number:?}"
            )));
        }
        Ok(Self { kind, number })
    }

    /// Parse the space-separated list returned by `INST ?`
    pub fn parse_list<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Vec<Self>> {
        tokens
            .into_iter()
            .filter(|t| !t.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for InputSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(kind), Some(number), None) => Self::new(InputKind::try_from(kind)?, number)
                .map_err(|_| Error::Parse(format!("Invalid input number in {s:?}"))),
            _ => Err(Error::Parse(format!(
                "Input must be 2 characters, got {s:?}"
            ))),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.digit(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_input_parse() {
        let input: InputSource = "11".parse().unwrap();
        assert_eq!(input.kind, InputKind::Rgb);
        assert_eq!(input.number, '1');

        let input: InputSource = "52".parse().unwrap();
        assert_eq!(input.kind, InputKind::Network);
        assert_eq!(input.to_string(), "52");
    }

    #[test]
    fn test_input_invalid() {
        for value in ["", "1", "111", "61", "10", "ERR2"] {
            assert!(value.parse::<InputSource>().is_err(), "{value:?}");
        }
    }

    #[test]
    fn test_input_new() {
        assert!(InputSource::new(InputKind::Video, '3').is_ok());
        assert!(matches!(
            InputSource::new(InputKind::Video, '0'),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_input_list() {
        let inputs = InputSource::parse_list(["11", "12", "31", "32"]).unwrap();
        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs[2].kind, InputKind::Digital);
        assert!(InputSource::parse_list(["11", "x"]).is_err());
        assert!(InputSource::parse_list([""]).unwrap().is_empty());
    }
}
