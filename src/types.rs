use crate::error::TscvError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Windowing policy for train/test partitioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    /// Train always starts at row 0 and grows each split (expanding origin)
    Rolling,
    /// Fixed-width train window that moves forward, discarding the oldest rows
    Sliding,
}

impl SplitMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMethod::Rolling => "rolling",
            SplitMethod::Sliding => "sliding",
        }
    }
}

impl fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitMethod {
    type Err = TscvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rolling" => Ok(SplitMethod::Rolling),
            "sliding" => Ok(SplitMethod::Sliding),
            other => Err(TscvError::InvalidPolicy(other.to_string())),
        }
    }
}

/// Row-index view of one train/test partition.
///
/// Both ranges are contiguous blocks of positions into the same dataset,
/// with `test.start == train.end` by construction: the test segment begins
/// on the row immediately after the last training row, so no split can see
/// future data relative to its test segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Range<usize>,
    pub test: Range<usize>,
}

impl SplitIndices {
    pub(crate) fn new(train_start: usize, train_end: usize, test_size: usize) -> Self {
        Self {
            train: train_start..train_end,
            test: train_end..train_end + test_size,
        }
    }

    pub fn train_len(&self) -> usize {
        self.train.len()
    }

    pub fn test_len(&self) -> usize {
        self.test.len()
    }
}
