//! Fixed rule list turning an estimate into improvement suggestions.
//!
//! Rules are evaluated in order and are independent: a 2.5 MB page gets both
//! the heavy-page and the over-1 MB suggestions.

use crate::estimator::Rating;
use crate::region::HostingType;

const HEAVY_PAGE: [&str; 3] = [
    "Optimize images using WebP format and efficient compression",
    "Minify CSS, JavaScript, and HTML files to reduce file sizes",
    "Implement lazy loading for images and videos below the fold",
];

const OVER_ONE_MB: [&str; 2] = [
    "Consider reducing third-party scripts and external resources",
    "Use system fonts instead of custom web fonts where possible",
];

const STANDARD_HOSTING: [&str; 2] = [
    "Switch to a green hosting provider powered by renewable energy",
    "Or purchase carbon offsets for your current hosting emissions",
];

const ALWAYS: [&str; 2] = [
    "Implement efficient browser caching strategies to reduce repeat downloads",
    "Consider implementing a Content Delivery Network (CDN) to reduce data travel distance",
];

/// Ordered recommendations for a page of `page_size_mb` on `hosting`.
///
/// `rating` is accepted so presentation code can pass the full estimate;
/// none of the current rules depend on it.
pub fn recommend(page_size_mb: f64, hosting: HostingType, _rating: Rating) -> Vec<String> {
    let mut out: Vec<&str> = Vec::with_capacity(9);

    if page_size_mb >= 2.0 {
        out.extend(HEAVY_PAGE);
    }
    if page_size_mb >= 1.0 {
        out.extend(OVER_ONE_MB);
    }
    if hosting == HostingType::Standard {
        out.extend(STANDARD_HOSTING);
    }
    out.extend(ALWAYS);

    out.into_iter().map(str::to_string).collect()
}
