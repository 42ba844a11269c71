//! Best-effort structural scan of fetched markup.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

const STYLESHEET_SELECTOR_STR: &str = r#"link[rel~="stylesheet"]"#;
const EXTERNAL_SCRIPT_SELECTOR_STR: &str = "script[src]";
const IMAGE_SELECTOR_STR: &str = "img";

static STYLESHEET_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| selector(STYLESHEET_SELECTOR_STR));
static EXTERNAL_SCRIPT_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| selector(EXTERNAL_SCRIPT_SELECTOR_STR));
static IMAGE_SELECTOR: LazyLock<Option<Selector>> = LazyLock::new(|| selector(IMAGE_SELECTOR_STR));

fn selector(s: &str) -> Option<Selector> {
    match Selector::parse(s) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::warn!("selector {s:?} unusable, counting zero: {e:?}");
            None
        }
    }
}

/// Linked resources found in a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceCounts {
    pub stylesheets: usize,
    pub scripts: usize,
    pub images: usize,
}

impl ResourceCounts {
    /// Count stylesheet links, external scripts and images in `markup`.
    ///
    /// The HTML5 parser recovers from any malformed input, so this never
    /// fails; the worst case is zero counts.
    pub fn scan(markup: &str) -> Self {
        let document = Html::parse_document(markup);
        let count = |sel: &Option<Selector>| {
            sel.as_ref().map(|s| document.select(s).count()).unwrap_or(0)
        };
        Self {
            stylesheets: count(&STYLESHEET_SELECTOR),
            scripts: count(&EXTERNAL_SCRIPT_SELECTOR),
            images: count(&IMAGE_SELECTOR),
        }
    }
}

/// Average transfer size assumed per resource type (KB).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceWeights {
    pub stylesheet_kb: f64,
    pub script_kb: f64,
    pub image_kb: f64,
}

impl Default for ResourceWeights {
    fn default() -> Self {
        Self {
            stylesheet_kb: 50.0,
            script_kb: 120.0,
            image_kb: 200.0,
        }
    }
}

impl ResourceWeights {
    /// Estimated KB contributed by `counts`.
    pub fn weigh(&self, counts: &ResourceCounts) -> f64 {
        counts.stylesheets as f64 * self.stylesheet_kb
            + counts.scripts as f64 * self.script_kb
            + counts.images as f64 * self.image_kb
    }
}
