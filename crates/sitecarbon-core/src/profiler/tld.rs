//! Coarse server-region guess from the domain suffix.
//!
//! This is a heuristic: a `.com` site may be hosted anywhere, and a `.de`
//! site may sit behind a US CDN. It only provides a starting point.

use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Region assumed when no suffix group matches.
pub const DEFAULT_REGION: Region = Region::NorthAmerica;

/// Suffixes (without the leading dot) that map to one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldGroup {
    pub region: Region,
    pub suffixes: Vec<String>,
}

/// Ordered suffix groups; the first group with a matching suffix wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldTable {
    pub groups: Vec<TldGroup>,
}

fn group(region: Region, suffixes: &[&str]) -> TldGroup {
    TldGroup {
        region,
        suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
    }
}

impl Default for TldTable {
    fn default() -> Self {
        Self {
            groups: vec![
                group(
                    Region::Europe,
                    &[
                        "eu", "uk", "de", "fr", "it", "es", "nl", "be", "ch", "at", "se", "no",
                        "dk", "fi", "ie", "pt", "pl", "cz", "gr", "hu", "ro",
                    ],
                ),
                group(
                    Region::Asia,
                    &[
                        "cn", "jp", "kr", "in", "sg", "hk", "tw", "th", "my", "id", "vn", "ph",
                    ],
                ),
                group(Region::Oceania, &["au", "nz", "fj"]),
                group(
                    Region::SouthAmerica,
                    &["br", "ar", "cl", "co", "pe", "ve", "uy", "ec"],
                ),
                group(Region::Africa, &["za", "ng", "ke", "eg", "ma", "gh", "tz"]),
            ],
        }
    }
}

impl TldTable {
    /// Infer a region for `host` (e.g. `www.example.co.uk`).
    pub fn infer(&self, host: &str) -> Region {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.groups
            .iter()
            .find(|g| g.suffixes.iter().any(|s| host_has_suffix(&host, s)))
            .map(|g| g.region)
            .unwrap_or(DEFAULT_REGION)
    }
}

/// Label-aligned suffix match: `example.co.uk` has suffix `uk` and `co.uk`,
/// `dock` does not have suffix `uk`.
fn host_has_suffix(host: &str, suffix: &str) -> bool {
    let suffix = suffix.trim_start_matches('.').to_ascii_lowercase();
    if suffix.is_empty() {
        return false;
    }
    host == suffix
        || host
            .strip_suffix(&suffix)
            .is_some_and(|rest| rest.ends_with('.'))
}
