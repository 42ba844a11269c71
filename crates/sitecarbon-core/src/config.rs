use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::factors::EmissionFactors;
use crate::profiler::{ResourceWeights, TldTable};

/// Largest response body the profiler will buffer (50 MiB).
pub const DEFAULT_MAX_BODY_BYTES: u64 = 50 * 1024 * 1024;

/// Page retrieval settings (`[fetch]` in config.toml). Any key may be
/// omitted; omitted keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Optional retrieval proxy. The percent-encoded target URL is appended,
    /// or substituted for a `{url}` placeholder if one is present.
    pub proxy_url: Option<String>,
    /// Seconds allowed to establish the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole transfer.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Transfers whose body grows past this many bytes are aborted.
    pub max_body_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            proxy_url: None,
            connect_timeout_secs: 10,
            timeout_secs: 30,
            user_agent: format!("sitecarbon/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Global configuration loaded from `~/.config/sitecarbon/config.toml`.
///
/// Every section is optional; missing sections take the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteCarbonConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Average size assumed per linked resource when profiling a page.
    #[serde(default)]
    pub weights: ResourceWeights,
    #[serde(default)]
    pub factors: EmissionFactors,
    /// Domain-suffix groups used to guess the hosting region.
    #[serde(default)]
    pub regions: TldTable,
}

impl SiteCarbonConfig {
    /// Reject values the model cannot work with.
    pub fn check(&self) -> Result<()> {
        self.factors.check().context("invalid [factors]")?;
        let w = &self.weights;
        for (name, v) in [
            ("stylesheet_kb", w.stylesheet_kb),
            ("script_kb", w.script_kb),
            ("image_kb", w.image_kb),
        ] {
            if !v.is_finite() || v < 0.0 {
                anyhow::bail!("invalid [weights]: {name} must be a non-negative number, got {v}");
            }
        }
        if self.fetch.timeout_secs == 0 {
            anyhow::bail!("invalid [fetch]: timeout_secs must be at least 1");
        }
        if self.fetch.max_body_bytes == 0 {
            anyhow::bail!("invalid [fetch]: max_body_bytes must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitecarbon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteCarbonConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteCarbonConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and check configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SiteCarbonConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: SiteCarbonConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.check()?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
