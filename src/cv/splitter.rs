use crate::config::{CrossValidationConfig, RollingParams, SlidingParams};
use crate::error::Result;
use crate::types::{SplitIndices, SplitMethod};
use polars::prelude::*;

/// Enumerates (train, test) row partitions over a time-ordered DataFrame.
///
/// The splitter is purely positional: it works on row offsets 0..N, so gaps
/// or irregular spacing in the time key never change the split geometry,
/// only the row count does. The frame must not be reordered between split
/// computation and row retrieval.
pub struct TimeSeriesSplitter<'a> {
    data: &'a DataFrame,
}

impl<'a> TimeSeriesSplitter<'a> {
    pub fn new(data: &'a DataFrame) -> Self {
        Self { data }
    }

    /// Expanding-origin splits: train is always `[0, train_end)` and grows by
    /// `step_size` rows per split; the test segment is the `test_size` rows
    /// immediately after it.
    ///
    /// `train_end` advances while `train_end < N - test_size`, so the final
    /// test block is never truncated. Returns an empty sequence when no
    /// `train_end` satisfies the bound.
    pub fn rolling_splits(&self, params: &RollingParams) -> Result<Vec<SplitIndices>> {
        params.validate()?;

        let total = self.data.height();
        // saturating_sub: test_size > N means nothing fits
        let bound = total.saturating_sub(params.test_size);

        let mut splits = Vec::new();
        let mut train_end = params.initial_train_size;
        while train_end < bound {
            splits.push(SplitIndices::new(0, train_end, params.test_size));
            train_end += params.step_size;
        }
        Ok(splits)
    }

    /// Fixed-width splits: a train window of `window_size` rows slides
    /// forward by `step_size`, discarding the oldest rows; the test segment
    /// follows the window.
    ///
    /// The loop bound pre-checks that the entire window plus test segment
    /// fits (`window_start + window_size + test_size <= N`), which is
    /// stricter than the rolling bound. The two boundary behaviors are
    /// deliberately different and pinned by tests; do not unify one into the
    /// other without retesting both.
    pub fn sliding_splits(&self, params: &SlidingParams) -> Result<Vec<SplitIndices>> {
        params.validate()?;

        let total = self.data.height();
        let span = params.window_size + params.test_size;
        let last_start = match total.checked_sub(span) {
            Some(v) => v,
            None => return Ok(Vec::new()),
        };

        let mut splits = Vec::new();
        let mut window_start = 0;
        while window_start <= last_start {
            splits.push(SplitIndices::new(
                window_start,
                window_start + params.window_size,
                params.test_size,
            ));
            window_start += params.step_size;
        }
        Ok(splits)
    }

    /// Index-level splits for the configured method, without materializing
    /// any rows. Dispatch is over the closed `SplitMethod` enum; an unknown
    /// method tag is rejected when the tag is parsed, before this point.
    pub fn split_indices(&self, config: &CrossValidationConfig) -> Result<Vec<SplitIndices>> {
        match config.method {
            SplitMethod::Rolling => self.rolling_splits(&config.rolling),
            SplitMethod::Sliding => self.sliding_splits(&config.sliding),
        }
    }

    /// Runs the configured method and materializes each partition as a pair
    /// of frame slices. Slices share the original frame's buffers, schema and
    /// row order; they must be treated as read-only views.
    pub fn run(&self, config: &CrossValidationConfig) -> Result<Vec<(DataFrame, DataFrame)>> {
        let indices = self.split_indices(config)?;
        let splits: Vec<(DataFrame, DataFrame)> =
            indices.iter().map(|s| self.materialize(s)).collect();

        log::info!(
            "created {} splits using {} window method",
            splits.len(),
            config.method
        );
        Ok(splits)
    }

    fn materialize(&self, split: &SplitIndices) -> (DataFrame, DataFrame) {
        let train = self.data.slice(split.train.start as i64, split.train_len());
        let test = self.data.slice(split.test.start as i64, split.test_len());
        (train, test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn frame(n: usize) -> DataFrame {
        let day: Vec<u32> = (0..n as u32).collect();
        let ret: Vec<f64> = (0..n).map(|i| i as f64 * 0.001).collect();
        df! {
            "day" => day,
            "excess_return" => ret,
        }
        .unwrap()
    }

    #[test]
    fn test_rolling_concrete_n30() {
        let df = frame(30);
        let splitter = TimeSeriesSplitter::new(&df);
        let params = RollingParams {
            initial_train_size: 10,
            step_size: 10,
            test_size: 5,
        };

        let splits = splitter.rolling_splits(&params).unwrap();

        // train_end = 10 -> [0,10)/[10,15); train_end = 20 -> [0,20)/[20,25);
        // train_end = 30 fails 30 < 25, so exactly two splits.
        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].train, 0..10);
        assert_eq!(splits[0].test, 10..15);
        assert_eq!(splits[1].train, 0..20);
        assert_eq!(splits[1].test, 20..25);
    }

    #[test]
    fn test_sliding_concrete_n30() {
        let df = frame(30);
        let splitter = TimeSeriesSplitter::new(&df);
        let params = SlidingParams {
            window_size: 10,
            step_size: 10,
            test_size: 5,
        };

        let splits = splitter.sliding_splits(&params).unwrap();

        // window_start = 20 needs 20+10+5 = 35 > 30 rows, discarded.
        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].train, 0..10);
        assert_eq!(splits[0].test, 10..15);
        assert_eq!(splits[1].train, 10..20);
        assert_eq!(splits[1].test, 20..25);
    }

    #[test]
    fn test_rolling_empty_when_no_room() {
        let df = frame(10);
        let splitter = TimeSeriesSplitter::new(&df);
        let params = RollingParams {
            initial_train_size: 8,
            step_size: 5,
            test_size: 5,
        };

        // 8 + 5 > 10: no train_end satisfies the bound, empty is not an error.
        let splits = splitter.rolling_splits(&params).unwrap();
        assert!(splits.is_empty());
    }

    #[test]
    fn test_sliding_empty_when_window_exceeds_rows() {
        let df = frame(10);
        let splitter = TimeSeriesSplitter::new(&df);
        let params = SlidingParams {
            window_size: 8,
            step_size: 1,
            test_size: 5,
        };

        let splits = splitter.sliding_splits(&params).unwrap();
        assert!(splits.is_empty());
    }

    #[test]
    fn test_zero_step_is_malformed() {
        let df = frame(30);
        let splitter = TimeSeriesSplitter::new(&df);
        let params = RollingParams {
            initial_train_size: 10,
            step_size: 0,
            test_size: 5,
        };

        assert!(splitter.rolling_splits(&params).is_err());
    }

    #[test]
    fn test_run_materializes_slices() {
        let df = frame(30);
        let splitter = TimeSeriesSplitter::new(&df);
        let config = CrossValidationConfig {
            method: SplitMethod::Sliding,
            sliding: SlidingParams {
                window_size: 10,
                step_size: 10,
                test_size: 5,
            },
            ..Default::default()
        };

        let splits = splitter.run(&config).unwrap();
        assert_eq!(splits.len(), 2);

        let (train, test) = &splits[1];
        assert_eq!(train.height(), 10);
        assert_eq!(test.height(), 5);
        assert_eq!(train.get_column_names(), df.get_column_names());

        // Second window starts at row 10; its test segment at row 20.
        let first_train_day = train.column("day").unwrap().u32().unwrap().get(0);
        let first_test_day = test.column("day").unwrap().u32().unwrap().get(0);
        assert_eq!(first_train_day, Some(10));
        assert_eq!(first_test_day, Some(20));
    }
}
