//! Battle.net regions.

use std::fmt;
use std::str::FromStr;

/// A Battle.net region. Each region has its own API host and its own set of realms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Us,
    Eu,
    Kr,
    Tw,
}

impl Region {
    /// Lowercase code used in API hosts, namespaces and the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::Kr => "kr",
            Region::Tw => "tw",
        }
    }

    /// Base URL of the game data/profile API for this region.
    pub fn api_base_url(&self) -> String {
        format!("https://{}.api.blizzard.com", self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" | "na" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "kr" => Ok(Region::Kr),
            "tw" => Ok(Region::Tw),
            other => Err(format!("Unknown Battle.net region '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("US".parse::<Region>().unwrap(), Region::Us);
        assert_eq!("eu".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!("NA".parse::<Region>().unwrap(), Region::Us);
    }

    #[test]
    fn rejects_unknown_region() {
        assert!("cn".parse::<Region>().is_err());
    }

    #[test]
    fn builds_regional_host() {
        assert_eq!(Region::Eu.api_base_url(), "https://eu.api.blizzard.com");
    }
}
