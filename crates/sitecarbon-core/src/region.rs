//! Fixed enumerations used to look up energy and carbon factors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// Geographic category of the hosting server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    NorthAmerica,
    Europe,
    Asia,
    Oceania,
    SouthAmerica,
    Africa,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::Oceania,
        Region::SouthAmerica,
        Region::Africa,
    ];

    /// Identifier used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::NorthAmerica => "north-america",
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Oceania => "oceania",
            Region::SouthAmerica => "south-america",
            Region::Africa => "africa",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = LookupError;

    /// Exact (case-insensitive) match on the identifier. No fallback region.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LookupError::Region(s.to_string()))
    }
}

/// Hosting class: whether the provider runs on renewable energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostingType {
    Standard,
    Green,
}

impl HostingType {
    pub fn as_str(self) -> &'static str {
        match self {
            HostingType::Standard => "standard",
            HostingType::Green => "green",
        }
    }
}

impl fmt::Display for HostingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostingType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(HostingType::Standard),
            "green" => Ok(HostingType::Green),
            _ => Err(LookupError::Hosting(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_parses_every_identifier() {
        for r in Region::ALL {
            assert_eq!(r.as_str().parse::<Region>().unwrap(), r);
        }
        assert_eq!("Europe".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!(" south-america ".parse::<Region>().unwrap(), Region::SouthAmerica);
    }

    #[test]
    fn unknown_region_is_lookup_error() {
        assert_eq!(
            "antarctica".parse::<Region>(),
            Err(LookupError::Region("antarctica".into()))
        );
        assert!("".parse::<Region>().is_err());
        assert!("north_america".parse::<Region>().is_err());
    }

    #[test]
    fn hosting_type_parse() {
        assert_eq!("standard".parse::<HostingType>().unwrap(), HostingType::Standard);
        assert_eq!("GREEN".parse::<HostingType>().unwrap(), HostingType::Green);
        assert_eq!(
            "solar".parse::<HostingType>(),
            Err(LookupError::Hosting("solar".into()))
        );
    }

    #[test]
    fn serde_uses_kebab_case_identifiers() {
        let json = serde_json::to_string(&Region::SouthAmerica).unwrap();
        assert_eq!(json, "\"south-america\"");
        let back: Region = serde_json::from_str("\"north-america\"").unwrap();
        assert_eq!(back, Region::NorthAmerica);
        let hosting = serde_json::to_string(&HostingType::Green).unwrap();
        assert_eq!(hosting, "\"green\"");
    }
}
