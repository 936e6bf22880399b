//!
//! Log files grouped into scaling series.
//!

pub mod error;
pub mod strategy;

use std::collections::BTreeMap;

use crate::perflog::LogFile;

use self::error::Error;
use self::strategy::Strategy;

///
/// A group of log files believed to belong to one scaling series, e.g. one
/// cluster, compiler and MPI combination swept over core counts.
///
#[derive(Debug, Clone)]
pub struct Group {
    /// The grouping key: the representative directory or the path key.
    pub key: String,
    /// The member files.
    pub files: Vec<LogFile>,
}

impl Group {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(key: String, files: Vec<LogFile>) -> Self {
        Self { key, files }
    }

    ///
    /// Groups log files using the given strategy.
    ///
    pub fn from_files(files: Vec<LogFile>, strategy: Strategy) -> Vec<Self> {
        match strategy {
            Strategy::PathKey => Self::by_path_key(files),
            Strategy::CharacterDistance { threshold } => Self::by_distance(files, threshold),
        }
    }

    ///
    /// Returns a human-readable series label.
    ///
    pub fn label(&self) -> String {
        let Some(first) = self.files.first() else {
            return self.key.clone();
        };
        let metadata = &first.metadata;
        let mut label = metadata.case();
        if let Some(environment) = metadata.environment.as_deref() {
            label.push(' ');
            label.push_str(environment);
        }
        label
    }

    ///
    /// Returns the `(core count, last value)` points of a metric sorted by core count.
    ///
    /// Every member must carry the metric, since all of them make up one series.
    ///
    pub fn series(&self, metric: &str) -> Result<Vec<(u64, f64)>, Error> {
        let mut points = self
            .files
            .iter()
            .map(|file| {
                let record = file.last(metric).ok_or_else(|| Error::MetricMissing {
                    path: file.path.clone(),
                    metric: metric.to_owned(),
                })?;
                let cores = record
                    .num_total_cores()
                    .or_else(|| {
                        file.metadata
                            .test
                            .as_deref()
                            .and_then(Self::numeric_suffix)
                    })
                    .ok_or_else(|| Error::CoreCountMissing {
                        path: file.path.clone(),
                    })?;
                Ok((cores, record.value))
            })
            .collect::<Result<Vec<(u64, f64)>, Error>>()?;
        points.sort_by_key(|(cores, _)| *cores);
        Ok(points)
    }

    ///
    /// Groups by the order-independent path key.
    ///
    fn by_path_key(files: Vec<LogFile>) -> Vec<Self> {
        let mut groups: BTreeMap<String, Vec<LogFile>> = BTreeMap::new();
        for file in files.into_iter() {
            groups
                .entry(Strategy::path_key(file.directory().as_str()))
                .or_default()
                .push(file);
        }
        groups
            .into_iter()
            .map(|(key, mut files)| {
                files.sort_by(|a, b| a.path.cmp(&b.path));
                Self::new(key, files)
            })
            .collect()
    }

    ///
    /// Greedy clustering: a file joins the first group whose representative directory
    /// differs by fewer than `threshold` characters. Depends on the input order.
    ///
    fn by_distance(files: Vec<LogFile>, threshold: usize) -> Vec<Self> {
        let mut groups: Vec<Self> = Vec::new();
        for file in files.into_iter() {
            let directory = file.directory();
            match groups
                .iter_mut()
                .find(|group| Strategy::distance(group.key.as_str(), directory.as_str()) < threshold)
            {
                Some(group) => group.files.push(file),
                None => groups.push(Self::new(directory, vec![file])),
            }
        }
        groups
    }

    ///
    /// Extracts the trailing number of a test name, e.g. `16` from `StrongScaling_16`.
    ///
    fn numeric_suffix(name: &str) -> Option<u64> {
        let prefix = name.trim_end_matches(|character: char| character.is_ascii_digit());
        name[prefix.len()..].parse::<u64>().ok()
    }
}

#[cfg(test)]
mod tests;
