//! Projector information structures

use std::fmt;

/// Projector identification gathered from the class 1 info commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectorInfo {
    /// Projector name (`NAME`)
    pub name: String,
    
    /// Manufacturer name (`INF1`)
    pub manufacturer: String,
    
    /// Product name (`INF2`)
    pub product: String,
    
    /// Other information (`INFO`)
    pub other: String,
    
    /// Highest supported class (`CLSS`)
    pub class: String,
}

impl fmt::Display for ProjectorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Projector[{}: {} {}, class {}]",
            self.name, self.manufacturer, self.product, self.class
        )
    }
}
