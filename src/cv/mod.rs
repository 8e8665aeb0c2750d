pub mod report;
pub mod splitter;

pub use report::{describe_splits, SplitReport, SplitSummary};
pub use splitter::TimeSeriesSplitter;
