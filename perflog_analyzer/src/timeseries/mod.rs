//!
//! Relative performance time series.
//!

pub mod block;
pub mod cache;
pub mod error;
pub mod smoothing;

use crate::perflog::LogFile;

use self::error::Error;

///
/// A time series point: UNIX seconds and a relative value.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// The timestamp in UNIX seconds.
    pub x: f64,
    /// The value.
    pub y: f64,
}

impl Point {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    ///
    /// Sorts points by timestamp.
    ///
    pub fn sort(points: &mut [Self]) {
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
    }
}

///
/// A named series of relative values.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// The series name.
    pub name: String,
    /// The points ordered as they were recorded.
    pub points: Vec<Point>,
}

impl Series {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, points: Vec<Point>) -> Self {
        Self { name, points }
    }

    ///
    /// Builds the relative series of a metric from a log file.
    ///
    pub fn from_log_file(name: String, file: &LogFile, metric: &str) -> Result<Self, Error> {
        let records: Vec<_> = file.records_of(metric).collect();
        if records.is_empty() {
            return Err(Error::MetricMissing {
                path: file.path.clone(),
                metric: metric.to_owned(),
            });
        }
        let values: Vec<f64> = records.iter().map(|record| record.value).collect();
        let points = records
            .iter()
            .zip(normalize(values.as_slice())?)
            .map(|(record, value)| Point::new(record.unix_seconds(), value))
            .collect();
        Ok(Self::new(name, points))
    }
}

///
/// Divides every value by the first one.
///
pub fn normalize(values: &[f64]) -> Result<Vec<f64>, Error> {
    let Some(first) = values.first().copied() else {
        return Ok(vec![]);
    };
    if first == 0.0 {
        return Err(Error::ZeroBaseline);
    }
    Ok(values.iter().map(|value| value / first).collect())
}
