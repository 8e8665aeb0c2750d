pub mod config;
pub mod cv;
pub mod error;
pub mod types;

pub use config::{CrossValidationConfig, RollingParams, SlidingParams};
pub use cv::{describe_splits, SplitReport, TimeSeriesSplitter};
pub use error::{Result, TscvError};
pub use types::{SplitIndices, SplitMethod};
