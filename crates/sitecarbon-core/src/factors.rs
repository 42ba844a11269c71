//! Energy and carbon-intensity tables.
//!
//! Both tables have one field per [`Region`], so a lookup with a parsed
//! region can never miss. Defaults are the built-in figures; `config.toml`
//! may override them, after which they are treated as read-only.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::region::{HostingType, Region};

/// One value per region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RegionTable {
    pub north_america: f64,
    pub europe: f64,
    pub asia: f64,
    pub oceania: f64,
    pub south_america: f64,
    pub africa: f64,
}

impl RegionTable {
    pub fn get(&self, region: Region) -> f64 {
        match region {
            Region::NorthAmerica => self.north_america,
            Region::Europe => self.europe,
            Region::Asia => self.asia,
            Region::Oceania => self.oceania,
            Region::SouthAmerica => self.south_america,
            Region::Africa => self.africa,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (Region, f64)> + '_ {
        Region::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}

/// Carbon intensity (kg CO2 per kWh) per hosting class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonIntensityTable {
    pub standard: RegionTable,
    pub green: RegionTable,
}

impl CarbonIntensityTable {
    pub fn get(&self, hosting: HostingType, region: Region) -> f64 {
        match hosting {
            HostingType::Standard => self.standard.get(region),
            HostingType::Green => self.green.get(region),
        }
    }
}

/// Factor set consumed by [`crate::estimator::estimate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    /// Energy consumed per gigabyte transferred (kWh/GB).
    pub energy_kwh_per_gb: RegionTable,
    pub carbon_intensity: CarbonIntensityTable,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            energy_kwh_per_gb: RegionTable {
                north_america: 0.81,
                europe: 0.65,
                asia: 0.79,
                oceania: 0.94,
                south_america: 0.74,
                africa: 0.68,
            },
            carbon_intensity: CarbonIntensityTable {
                standard: RegionTable {
                    north_america: 0.42,
                    europe: 0.28,
                    asia: 0.62,
                    oceania: 0.60,
                    south_america: 0.21,
                    africa: 0.47,
                },
                green: RegionTable {
                    north_america: 0.05,
                    europe: 0.04,
                    asia: 0.06,
                    oceania: 0.05,
                    south_america: 0.03,
                    africa: 0.05,
                },
            },
        }
    }
}

impl EmissionFactors {
    pub fn energy_factor(&self, region: Region) -> f64 {
        self.energy_kwh_per_gb.get(region)
    }

    pub fn carbon_intensity(&self, hosting: HostingType, region: Region) -> f64 {
        self.carbon_intensity.get(hosting, region)
    }

    /// Rows of (region, kWh/GB, standard kg/kWh, green kg/kWh) for display.
    pub fn rows(&self) -> Vec<(Region, f64, f64, f64)> {
        self.energy_kwh_per_gb
            .iter()
            .map(|(r, energy)| {
                (
                    r,
                    energy,
                    self.carbon_intensity(HostingType::Standard, r),
                    self.carbon_intensity(HostingType::Green, r),
                )
            })
            .collect()
    }

    /// Rejects tables containing negative or non-finite figures.
    pub fn check(&self) -> Result<()> {
        let tables = [
            ("energy_kwh_per_gb", &self.energy_kwh_per_gb),
            ("carbon_intensity.standard", &self.carbon_intensity.standard),
            ("carbon_intensity.green", &self.carbon_intensity.green),
        ];
        for (name, table) in tables {
            for (region, value) in table.iter() {
                if !value.is_finite() || value < 0.0 {
                    bail!("{name}.{region} must be a non-negative number, got {value}");
                }
            }
        }
        Ok(())
    }
}
