use crate::error::Result;
use crate::types::{SplitIndices, SplitMethod};
use polars::prelude::*;
use serde::Serialize;

/// Row ranges and time-key bounds for a single split.
#[derive(Debug, Clone, Serialize)]
pub struct SplitSummary {
    pub index: usize,
    pub train_start: usize,
    pub train_end: usize,
    pub test_start: usize,
    pub test_end: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    /// First and last time key of the train segment, when the dataset
    /// carries a recognizable datetime column
    pub train_period: Option<(String, String)>,
    pub test_period: Option<(String, String)>,
}

/// Summary of one cross-validation run, for logging and downstream tooling.
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub method: SplitMethod,
    pub total_rows: usize,
    pub split_count: usize,
    pub splits: Vec<SplitSummary>,
}

impl SplitReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds a per-split report. Reporting only: the split geometry stays
/// positional, the time key is read back solely for display.
pub fn describe_splits(
    data: &DataFrame,
    method: SplitMethod,
    splits: &[SplitIndices],
) -> Result<SplitReport> {
    let time_column = detect_datetime_column(data).and_then(|name| data.column(&name).ok());

    let mut summaries = Vec::with_capacity(splits.len());
    for (index, split) in splits.iter().enumerate() {
        let train_period = time_column.and_then(|col| segment_period(col, &split.train));
        let test_period = time_column.and_then(|col| segment_period(col, &split.test));

        summaries.push(SplitSummary {
            index,
            train_start: split.train.start,
            train_end: split.train.end,
            test_start: split.test.start,
            test_end: split.test.end,
            train_rows: split.train_len(),
            test_rows: split.test_len(),
            train_period,
            test_period,
        });
    }

    Ok(SplitReport {
        method,
        total_rows: data.height(),
        split_count: summaries.len(),
        splits: summaries,
    })
}

fn detect_datetime_column(df: &DataFrame) -> Option<String> {
    let datetime_aliases = ["date", "datetime", "time", "timestamp", "Date", "DateTime"];
    let columns = df.get_column_names();
    for alias in datetime_aliases {
        if columns.iter().any(|col| col.as_str() == alias) {
            return Some(alias.to_string());
        }
    }
    None
}

fn segment_period(column: &Column, range: &std::ops::Range<usize>) -> Option<(String, String)> {
    if range.is_empty() {
        return None;
    }
    let first = format_time_key(column, range.start)?;
    let last = format_time_key(column, range.end - 1)?;
    Some((first, last))
}

fn format_time_key(column: &Column, idx: usize) -> Option<String> {
    match column.get(idx).ok()? {
        AnyValue::Datetime(value, unit, _) => {
            let ms = match unit {
                TimeUnit::Nanoseconds => value / 1_000_000,
                TimeUnit::Microseconds => value / 1_000,
                TimeUnit::Milliseconds => value,
            };
            chrono::DateTime::<chrono::Utc>::from_timestamp_millis(ms)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        }
        AnyValue::Date(days) => {
            // Days since the Unix epoch
            chrono::DateTime::<chrono::Utc>::from_timestamp(i64::from(days) * 86_400, 0)
                .map(|dt| dt.format("%Y-%m-%d").to_string())
        }
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SplitIndices;
    use polars::df;

    #[test]
    fn test_report_with_string_dates() {
        let df = df! {
            "date" => &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05", "2024-01-06"],
            "excess_return" => &[0.1, -0.2, 0.0, 0.3, -0.1, 0.2],
        }
        .unwrap();

        let splits = vec![SplitIndices::new(0, 4, 2)];
        let report = describe_splits(&df, SplitMethod::Rolling, &splits).unwrap();

        assert_eq!(report.split_count, 1);
        assert_eq!(report.total_rows, 6);
        let summary = &report.splits[0];
        assert_eq!(summary.train_rows, 4);
        assert_eq!(summary.test_rows, 2);
        assert_eq!(
            summary.train_period,
            Some(("2024-01-01".to_string(), "2024-01-04".to_string()))
        );
        assert_eq!(
            summary.test_period,
            Some(("2024-01-05".to_string(), "2024-01-06".to_string()))
        );
    }

    #[test]
    fn test_report_without_time_column() {
        let df = df! {
            "excess_return" => &[0.1, -0.2, 0.0, 0.3],
        }
        .unwrap();

        let splits = vec![SplitIndices::new(0, 2, 2)];
        let report = describe_splits(&df, SplitMethod::Sliding, &splits).unwrap();

        assert!(report.splits[0].train_period.is_none());
        assert!(report.splits[0].test_period.is_none());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let df = df! {
            "excess_return" => &[0.1, -0.2, 0.0, 0.3],
        }
        .unwrap();

        let splits = vec![SplitIndices::new(0, 2, 2)];
        let report = describe_splits(&df, SplitMethod::Rolling, &splits).unwrap();

        let json = report.to_json().unwrap();
        assert!(json.contains("\"method\": \"rolling\""));
        assert!(json.contains("\"split_count\": 1"));
    }
}
