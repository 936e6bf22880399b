//!
//! A single performance log record.
//!

pub mod error;
pub mod value;

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::FixedOffset;
use chrono::NaiveDateTime;

use self::error::Error;
use self::value::Value;

///
/// A single performance log record.
///
/// The textual form is a pipe-delimited line:
/// `timestamp|field|...|metric=value|units|reference|tags`, where `tags` is a
/// comma-separated list of plain tags and `key=value` context fields.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// The completion timestamp.
    pub timestamp: DateTime<FixedOffset>,
    /// The free-form fields between the timestamp and the metric.
    ///
    /// These may contain `=`, e.g. Spack variants, as long as the text after it is not a number.
    pub info: Vec<String>,
    /// The scheduler job identifier.
    pub job_id: Option<String>,
    /// The metric name.
    pub metric: String,
    /// The metric value.
    pub value: f64,
    /// The metric units.
    pub units: String,
    /// The reference field following the units.
    pub reference: Option<String>,
    /// The plain tags.
    pub tags: Vec<String>,
    /// The `key=value` context fields, e.g. `num_total_cores`.
    pub context: BTreeMap<String, Value>,
}

impl Record {
    /// The field separator.
    pub const SEPARATOR: char = '|';
    /// The tags separator.
    pub const TAG_SEPARATOR: char = ',';
    /// The prefix of the job identifier field.
    pub const JOB_ID_PREFIX: &'static str = "jobid=";

    /// The total core count context key.
    pub const KEY_NUM_TOTAL_CORES: &'static str = "num_total_cores";
    /// The OpenMP thread count context key.
    pub const KEY_NUM_OMP_THREADS: &'static str = "num_omp_threads";
    /// The node count context key.
    pub const KEY_NUM_NODES: &'static str = "num_nodes";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(timestamp: DateTime<FixedOffset>, metric: &str, value: f64, units: &str) -> Self {
        Self {
            timestamp,
            info: vec![],
            job_id: None,
            metric: metric.to_owned(),
            value,
            units: units.to_owned(),
            reference: None,
            tags: vec![],
            context: BTreeMap::new(),
        }
    }

    ///
    /// Parses a record, checking that it carries the `expected` metric.
    ///
    pub fn parse_metric(line: &str, expected: &str) -> Result<Self, Error> {
        let record = Self::parse(line)?;
        if record.metric != expected {
            return Err(Error::MetricMismatch {
                expected: expected.to_owned(),
                found: record.metric,
            });
        }
        Ok(record)
    }

    ///
    /// Parses a record from a pipe-delimited line.
    ///
    pub fn parse(line: &str) -> Result<Self, Error> {
        let line = line.trim();
        if line.is_empty() {
            return Err(Error::Empty);
        }
        let fields: Vec<&str> = line.split(Self::SEPARATOR).collect();

        let timestamp = Self::parse_timestamp(fields[0])?;

        let last_index = fields.len() - 1;
        let candidates: Vec<(usize, &str, &str)> = (1..last_index)
            .filter(|index| !fields[*index].starts_with(Self::JOB_ID_PREFIX))
            .filter_map(|index| {
                fields[index]
                    .split_once('=')
                    .map(|(metric, raw_value)| (index, metric, raw_value))
            })
            .collect();
        let (metric_index, metric, value) = match candidates
            .iter()
            .find_map(|(index, metric, raw_value)| {
                raw_value
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .map(|value| (*index, *metric, value))
            }) {
            Some(found) => found,
            None => {
                let (_, metric, raw_value) =
                    candidates.first().ok_or_else(|| Error::MetricNotFound {
                        line: line.to_owned(),
                    })?;
                return Err(Error::NonNumericValue {
                    metric: metric.trim().to_owned(),
                    raw: (*raw_value).to_owned(),
                });
            }
        };
        let metric = metric.trim().to_owned();

        let units_index = metric_index + 1;
        let units = fields[units_index].trim();
        if units.is_empty() {
            return Err(Error::MissingUnits { metric });
        }

        let mut info = Vec::with_capacity(metric_index);
        let mut job_id = None;
        for field in fields[1..metric_index].iter() {
            match field.strip_prefix(Self::JOB_ID_PREFIX) {
                Some(id) => job_id = Some(id.to_owned()),
                None => info.push((*field).to_owned()),
            }
        }

        let reference = if units_index + 1 < last_index {
            Some(fields[units_index + 1].to_owned())
        } else {
            None
        };

        let mut tags = vec![];
        let mut context = BTreeMap::new();
        if last_index > units_index {
            for tag in fields[last_index]
                .split(Self::TAG_SEPARATOR)
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
            {
                match tag.split_once('=') {
                    Some((key, value)) => {
                        context.insert(key.to_owned(), Value::from(value));
                    }
                    None => tags.push(tag.to_owned()),
                }
            }
        }

        Ok(Self {
            timestamp,
            info,
            job_id,
            metric,
            value,
            units: units.to_owned(),
            reference,
            tags,
            context,
        })
    }

    ///
    /// Returns a context field.
    ///
    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    ///
    /// The total number of cores the run was given.
    ///
    pub fn num_total_cores(&self) -> Option<u64> {
        self.context_value(Self::KEY_NUM_TOTAL_CORES)
            .and_then(Value::as_u64)
    }

    ///
    /// The number of OpenMP threads per MPI task.
    ///
    pub fn num_omp_threads(&self) -> Option<u64> {
        self.context_value(Self::KEY_NUM_OMP_THREADS)
            .and_then(Value::as_u64)
    }

    ///
    /// The number of nodes the run occupied.
    ///
    pub fn num_nodes(&self) -> Option<u64> {
        self.context_value(Self::KEY_NUM_NODES).and_then(Value::as_u64)
    }

    ///
    /// The timestamp as UNIX seconds with a fractional part.
    ///
    pub fn unix_seconds(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64 / 1000.0
    }

    ///
    /// Parses an ISO 8601 timestamp. Timestamps without an offset are taken as UTC.
    ///
    fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, Error> {
        let raw = raw.trim();
        let error = match DateTime::parse_from_rfc3339(raw) {
            Ok(timestamp) => return Ok(timestamp),
            Err(error) => error,
        };
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc().fixed_offset())
            .ok_or_else(|| Error::Timestamp {
                raw: raw.to_owned(),
                error,
            })
    }
}

impl std::str::FromStr for Record {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::parse(string)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.timestamp.to_rfc3339())?;
        for field in self.info.iter() {
            write!(f, "{}{field}", Self::SEPARATOR)?;
        }
        if let Some(job_id) = self.job_id.as_ref() {
            write!(f, "{}{}{job_id}", Self::SEPARATOR, Self::JOB_ID_PREFIX)?;
        }
        write!(
            f,
            "{}{}={}{}{}",
            Self::SEPARATOR,
            self.metric,
            self.value,
            Self::SEPARATOR,
            self.units
        )?;
        if let Some(reference) = self.reference.as_ref() {
            write!(f, "{}{reference}", Self::SEPARATOR)?;
        }
        if !self.tags.is_empty() || !self.context.is_empty() {
            let tags = self
                .tags
                .iter()
                .cloned()
                .chain(
                    self.context
                        .iter()
                        .map(|(key, value)| format!("{key}={value}")),
                )
                .collect::<Vec<String>>()
                .join(&Self::TAG_SEPARATOR.to_string());
            write!(f, "{}{tags}", Self::SEPARATOR)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
