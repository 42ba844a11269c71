pub mod config;
pub mod error;
pub mod estimator;
pub mod factors;
pub mod logging;
pub mod profiler;
pub mod recommend;
pub mod region;
pub mod report;

pub use error::{CarbonError, FetchError, LookupError, ValidationError};
pub use estimator::{estimate, EstimateInput, EstimateOutput, RawEstimateInput, Rating};
pub use factors::EmissionFactors;
pub use profiler::{ProfileResult, Profiler};
pub use recommend::recommend;
pub use region::{HostingType, Region};
pub use report::{analyze, Report, Usage};
