//!
//! The last recorded performance of every system.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use crate::perflog::metadata::Metadata;
use crate::perflog::record::value::Value;
use crate::perflog::Entry;

///
/// A table row: the index value and one optional cell per column.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Row {
    /// The index value.
    pub index: Value,
    /// The metric values by column.
    pub cells: Vec<Option<f64>>,
}

///
/// The last value of a metric pivoted into index rows and `system:partition` columns.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Table {
    /// The index field name.
    pub index: String,
    /// The metric name.
    pub metric: String,
    /// The `system:partition` cases.
    pub columns: Vec<String>,
    /// The rows ordered by index value.
    pub rows: Vec<Row>,
}

impl Table {
    /// The perflog file extension.
    pub const EXTENSION: &'static str = "log";

    ///
    /// Loads the perflogs below `root` restricted to test directories matching `test`, and
    /// tabulates the last value of `metric` for every index value and case.
    ///
    pub fn tabulate(
        root: &Path,
        test: Option<&str>,
        index: &str,
        metric: &str,
    ) -> anyhow::Result<Self> {
        let files = crate::perflog::load_tree(root, test, Self::EXTENSION)?;
        tracing::debug!(files = files.len(), root = %root.display(), "Loaded perflogs for the table");
        Ok(Self::from_entries(
            crate::perflog::last_entries(files),
            index,
            metric,
        ))
    }

    ///
    /// Pivots the entries. For every system, partition, environment, and index value only the
    /// most recent entry is kept. Entries lacking the index field are skipped.
    ///
    pub fn from_entries(entries: Vec<Entry>, index: &str, metric: &str) -> Self {
        let mut latest: BTreeMap<(Metadata, String), (Value, Entry)> = BTreeMap::new();
        for entry in entries.into_iter() {
            if entry.record.metric != metric {
                continue;
            }
            let Some(index_value) = Self::index_value(&entry, index) else {
                tracing::debug!(index, metadata = ?entry.metadata, "Entry has no index field");
                continue;
            };
            let key = (
                Metadata {
                    test: None,
                    file: None,
                    ..entry.metadata.clone()
                },
                index_value.to_string(),
            );
            let is_newer = latest
                .get(&key)
                .map(|(_, existing)| entry.record.timestamp >= existing.record.timestamp)
                .unwrap_or(true);
            if is_newer {
                latest.insert(key, (index_value, entry));
            }
        }

        let columns: BTreeMap<String, usize> = latest
            .values()
            .map(|(_, entry)| entry.metadata.case())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .enumerate()
            .map(|(position, case)| (case, position))
            .collect();

        // Environments of one case share a cell, the most recent one wins.
        let mut cells: BTreeMap<(String, usize), &Entry> = BTreeMap::new();
        let mut rows: Vec<Row> = Vec::new();
        for (index_value, entry) in latest.values() {
            let column = columns[&entry.metadata.case()];
            let key = index_value.to_string();
            if !rows.iter().any(|row| row.index.to_string() == key) {
                rows.push(Row {
                    index: index_value.clone(),
                    cells: vec![None; columns.len()],
                });
            }
            let cell = cells
                .entry((key, column))
                .or_insert(entry);
            if entry.record.timestamp >= cell.record.timestamp {
                *cell = entry;
            }
        }
        for ((index_value, column), entry) in cells.into_iter() {
            if let Some(row) = rows
                .iter_mut()
                .find(|row| row.index.to_string() == index_value)
            {
                row.cells[column] = Some(entry.record.value);
            }
        }
        rows.sort_by(|a, b| Self::compare_index(&a.index, &b.index));

        Self {
            index: index.to_owned(),
            metric: metric.to_owned(),
            columns: columns.into_keys().collect(),
            rows,
        }
    }

    ///
    /// Returns the index field of an entry: a record context field or a path field.
    ///
    fn index_value(entry: &Entry, index: &str) -> Option<Value> {
        if let Some(value) = entry.record.context_value(index) {
            return Some(value.to_owned());
        }
        let metadata = &entry.metadata;
        let field = match index {
            "system" => metadata.system.as_deref(),
            "partition" => metadata.partition.as_deref(),
            "environment" => metadata.environment.as_deref(),
            "test" => metadata.test.as_deref(),
            "job_id" => entry.record.job_id.as_deref(),
            _ => None,
        };
        field.map(Value::from)
    }

    ///
    /// Orders numeric index values numerically before textual ones.
    ///
    fn compare_index(a: &Value, b: &Value) -> std::cmp::Ordering {
        match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.to_string().cmp(&b.to_string()),
        }
    }
}
