//! Lamp values (`LAMP`)

use crate::error::{Error, Result};

/// One lamp as reported by `LAMP ?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lamp {
    /// Cumulative lighting time in hours
    pub hours: u32,

    /// Lamp currently lit
    pub on: bool,
}

impl Lamp {
    /// Parse the `<hours> <on/off>` pairs returned by `LAMP ?`
    ///
    /// # Examples
    ///
    /// ```
    /// use pjlink_types::Lamp;
    ///
    /// let lamps = Lamp::parse_list(["1200", "1", "340", "0"]).unwrap();
    /// assert_eq!(lamps.len(), 2);
    /// assert!(lamps[0].on);
    /// ```
    pub fn parse_list<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Vec<Self>> {
        let tokens: Vec<&str> = tokens.into_iter().collect();

        if tokens.is_empty() || tokens.len() % 2 != 0 {
            return Err(Error::Parse(format!(
                "Lamp report must be hour/state pairs, got {} tokens",
                tokens.len()
            )));
        }

        tokens
            .chunks(2)
            .map(|pair| -> Result<Self> {
                let hours = pair[0]
                    .parse::<u32>()
                    .map_err(|_| Error::Parse(format!("Invalid lamp hours: {:?}", pair[0])))?;
                let on = match pair[1] {
                    "0" => false,
                    "1" => true,
                    other => {
                        return Err(Error::Parse(format!("Invalid lamp state: {other:?}")));
                    }
                };
                Ok(Self { hours, on })
            })
            .collect()
    }
}
