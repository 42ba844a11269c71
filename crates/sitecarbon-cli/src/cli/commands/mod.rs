//! CLI command handlers, one per file.

mod analyze;
mod estimate;
mod factors;
mod profile;

pub use analyze::run_analyze;
pub use estimate::run_estimate;
pub use factors::run_factors;
pub use profile::run_profile;
