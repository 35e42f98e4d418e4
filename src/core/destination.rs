//! Output destination switch

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where rendered entries go: straight to standard output, or appended to
/// the current log segment on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Destination {
    #[default]
    Console,
    File,
}

impl Destination {
    pub fn to_str(&self) -> &'static str {
        match self {
            Destination::Console => "CONSOLE",
            Destination::File => "FILE",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CONSOLE" => Ok(Destination::Console),
            "FILE" => Ok(Destination::File),
            _ => Err(format!("Invalid destination: '{}'", s)),
        }
    }
}
