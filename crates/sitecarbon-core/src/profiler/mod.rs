//! Page-weight heuristic: fetch a page, count what it links to, and guess
//! where it is hosted.

mod fetch;
mod scan;
mod tld;

pub use scan::{ResourceCounts, ResourceWeights};
pub use tld::{TldGroup, TldTable, DEFAULT_REGION};

use serde::Serialize;
use url::Url;

use crate::config::{FetchConfig, SiteCarbonConfig};
use crate::error::{CarbonError, ValidationError};
use crate::region::Region;

/// Outcome of profiling one URL. Not retained between calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileResult {
    /// The URL that was profiled (normalized).
    pub url: String,
    /// Markup size plus heuristic resource weights (KB).
    pub estimated_page_size_kb: f64,
    pub inferred_region: Region,
    /// Size of the fetched markup alone (KB).
    pub markup_kb: f64,
    pub resources: ResourceCounts,
}

/// Fetches and inspects pages. Holds only immutable settings, so one value
/// can serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    fetch: FetchConfig,
    weights: ResourceWeights,
    regions: TldTable,
}

impl Profiler {
    pub fn new(fetch: FetchConfig, weights: ResourceWeights, regions: TldTable) -> Self {
        Self {
            fetch,
            weights,
            regions,
        }
    }

    pub fn from_config(cfg: &SiteCarbonConfig) -> Self {
        Self::new(cfg.fetch.clone(), cfg.weights, cfg.regions.clone())
    }

    /// Fetch `url` and estimate its page weight and hosting region.
    ///
    /// An empty or unparseable URL fails with a validation error before any
    /// network access. Transport failures, timeouts and non-2xx responses
    /// fail with a fetch error.
    pub async fn profile(&self, url: &str) -> Result<ProfileResult, CarbonError> {
        let target = parse_target(url)?;
        tracing::info!("profiling {}", target);
        let body = fetch::fetch_page(&self.fetch, &target).await?;
        let result = self.profile_markup(&target, &body);
        tracing::info!(
            "profiled {}: {:.1} KB markup, {} css, {} js, {} img -> {:.1} KB, region {}",
            result.url,
            result.markup_kb,
            result.resources.stylesheets,
            result.resources.scripts,
            result.resources.images,
            result.estimated_page_size_kb,
            result.inferred_region
        );
        Ok(result)
    }

    /// Offline half of [`Profiler::profile`]: size and scan already-fetched
    /// markup for `target`.
    pub fn profile_markup(&self, target: &Url, body: &[u8]) -> ProfileResult {
        let markup_kb = body.len() as f64 / 1024.0;
        let markup = String::from_utf8_lossy(body);
        let resources = ResourceCounts::scan(&markup);
        let inferred_region = self.regions.infer(target.host_str().unwrap_or_default());

        ProfileResult {
            url: target.to_string(),
            estimated_page_size_kb: markup_kb + self.weights.weigh(&resources),
            inferred_region,
            markup_kb,
            resources,
        }
    }
}

/// Validate a user-supplied URL. A bare host such as `example.com` is taken
/// to mean `https://example.com`.
pub fn parse_target(raw: &str) -> Result<Url, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::new("url", "value is required"));
    }
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    let url = Url::parse(&candidate)
        .map_err(|e| ValidationError::new("url", format!("{raw:?} is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::new(
            "url",
            format!("unsupported scheme {:?}; use http or https", url.scheme()),
        ));
    }
    match url.host_str() {
        Some(h) if !h.is_empty() => Ok(url),
        _ => Err(ValidationError::new("url", format!("{raw:?} has no host"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_target_accepts_http_and_bare_hosts() {
        assert_eq!(
            parse_target("https://example.com/x").unwrap().as_str(),
            "https://example.com/x"
        );
        assert_eq!(parse_target(" example.de ").unwrap().as_str(), "https://example.de/");
        assert_eq!(parse_target("http://127.0.0.1:8080/").unwrap().port(), Some(8080));
    }

    #[test]
    fn parse_target_rejects_bad_input() {
        for bad in ["", "   ", "not a url", "ftp://example.com/", "https://", "http://exa mple.com"] {
            let err = parse_target(bad).unwrap_err();
            assert_eq!(err.field, "url", "input {bad:?}");
        }
    }

    #[test]
    fn profile_markup_adds_heuristic_weights() {
        let profiler = Profiler::default();
        let html = format!(
            "<html><head><link rel=stylesheet href=a.css><script src=a.js></script></head>\
             <body><img src=a.png><img src=b.png>{}</body></html>",
            "x".repeat(2048)
        );
        let target = Url::parse("https://www.example.co.uk/").unwrap();
        let r = profiler.profile_markup(&target, html.as_bytes());

        assert_eq!(
            r.resources,
            ResourceCounts {
                stylesheets: 1,
                scripts: 1,
                images: 2
            }
        );
        let markup_kb = html.len() as f64 / 1024.0;
        assert!((r.markup_kb - markup_kb).abs() < 1e-9);
        let expected = markup_kb + 50.0 + 120.0 + 2.0 * 200.0;
        assert!((r.estimated_page_size_kb - expected).abs() < 1e-9);
        assert_eq!(r.inferred_region, Region::Europe);
    }

    #[test]
    fn profile_markup_tolerates_binary_body() {
        let profiler = Profiler::default();
        let target = Url::parse("https://example.com/").unwrap();
        let body = [0xffu8, 0xfe, 0x00, 0x3c, 0x69, 0x6d, 0x67];
        let r = profiler.profile_markup(&target, &body);
        assert_eq!(r.inferred_region, Region::NorthAmerica);
        assert!(r.estimated_page_size_kb >= r.markup_kb);
    }

    #[tokio::test]
    async fn invalid_url_fails_without_network() {
        let err = Profiler::default().profile("::nonsense::").await.unwrap_err();
        assert!(matches!(err, CarbonError::Validation(_)));
        assert!(!err.is_recoverable());
    }
}
