//!
//! Performance logs written by the regression-test framework.
//!

pub mod discovery;
pub mod error;
pub mod metadata;
pub mod record;

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use self::error::Error;
use self::metadata::Metadata;
use self::record::Record;

///
/// A performance log file: the ordered records sharing a path.
///
#[derive(Debug, Clone)]
pub struct LogFile {
    /// The log file path.
    pub path: PathBuf,
    /// The run metadata derived from the path.
    pub metadata: Metadata,
    /// The records in file order.
    pub records: Vec<Record>,
}

impl LogFile {
    ///
    /// Parses the log `text` read from `path`.
    ///
    pub fn parse(path: &Path, text: &str) -> Result<Self, Error> {
        let records = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                Record::parse(line).map_err(|error| Error::Malformed {
                    error,
                    path: path.to_path_buf(),
                    line: index + 1,
                })
            })
            .collect::<Result<Vec<Record>, Error>>()?;

        tracing::debug!(path = %path.display(), records = records.len(), "Parsed perflog");
        Ok(Self {
            path: path.to_path_buf(),
            metadata: Metadata::from(path),
            records,
        })
    }

    ///
    /// Returns the distinct metric names present in the file.
    ///
    pub fn metrics(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.metric.as_str())
            .collect()
    }

    ///
    /// Returns the records of a metric in file order.
    ///
    pub fn records_of<'a>(&'a self, metric: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records
            .iter()
            .filter(move |record| record.metric == metric)
    }

    ///
    /// Returns the values of a metric in file order.
    ///
    pub fn values(&self, metric: &str) -> Vec<f64> {
        self.records_of(metric).map(|record| record.value).collect()
    }

    ///
    /// Returns the last record of a metric.
    ///
    pub fn last(&self, metric: &str) -> Option<&Record> {
        self.records
            .iter()
            .rev()
            .find(|record| record.metric == metric)
    }

    ///
    /// Whether the file holds more than one value of a metric, i.e. a time series.
    ///
    pub fn is_time_series(&self, metric: &str) -> bool {
        self.records_of(metric).nth(1).is_some()
    }

    ///
    /// Returns the parent directory path as a string.
    ///
    pub fn directory(&self) -> String {
        self.path
            .parent()
            .map(|parent| parent.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl TryFrom<&Path> for LogFile {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Self::parse(path, text.as_str())
    }
}

///
/// Loads all log files matching a glob `pattern` relative to `root`.
///
pub fn load_pattern(root: &Path, pattern: &str) -> Result<Vec<LogFile>, Error> {
    discovery::expand(root, pattern)?
        .iter()
        .map(|path| LogFile::try_from(path.as_path()))
        .collect()
}

///
/// Loads every log file below `root`, optionally restricted to test directories matching `test`.
///
pub fn load_tree(root: &Path, test: Option<&str>, extension: &str) -> Result<Vec<LogFile>, Error> {
    discovery::find(root, test, extension)?
        .iter()
        .map(|path| LogFile::try_from(path.as_path()))
        .collect()
}

///
/// A record with the metadata of the file it was read from.
///
#[derive(Debug, Clone)]
pub struct Entry {
    /// The run metadata.
    pub metadata: Metadata,
    /// The record.
    pub record: Record,
}

///
/// Keeps only the most recent record for each system, partition, environment, test and metric.
/// Among records with equal timestamps, the later one wins.
///
pub fn last_entries(files: Vec<LogFile>) -> Vec<Entry> {
    let mut latest: BTreeMap<(Metadata, String), Entry> = BTreeMap::new();
    for LogFile {
        metadata, records, ..
    } in files.into_iter()
    {
        let key_metadata = Metadata {
            file: None,
            ..metadata.clone()
        };
        for record in records.into_iter() {
            let key = (key_metadata.clone(), record.metric.clone());
            let is_newer = latest
                .get(&key)
                .map(|entry| record.timestamp >= entry.record.timestamp)
                .unwrap_or(true);
            if is_newer {
                latest.insert(
                    key,
                    Entry {
                        metadata: metadata.clone(),
                        record,
                    },
                );
            }
        }
    }
    latest.into_values().collect()
}
