//!
//! OSU micro-benchmark output.
//!

use super::error::Error;

/// The header comment prefix.
pub const COMMENT_PREFIX: char = '#';

/// The separator between a test title and its version.
pub const VERSION_SEPARATOR: &str = " v";

/// Lines printed by misconfigured MPI libraries, dropped before parsing.
pub const NOISE_LINES: [&str; 1] = [
    "WARNING: release_mt library was used but no multi-ep feature was enabled. Please use release library instead.",
];

/// The known test titles and their column names.
const TESTS: [(&str, &[&str]); 7] = [
    (
        "# OSU MPI All-to-All Personalized Exchange Latency Test",
        &["Size", "Avg Latency(us)"],
    ),
    ("# OSU MPI Bandwidth Test", &["Size", "Bandwidth (MB/s)"]),
    (
        "# OSU MPI Bi-Directional Bandwidth Test",
        &["Size", "Bandwidth (MB/s)"],
    ),
    (
        "# OSU MPI Multiple Bandwidth / Message Rate Test",
        &["Size", "MB/s", "Messages/s"],
    ),
    ("# OSU MPI Latency Test", &["Size", "Latency (us)"]),
    ("# OSU MPI Allgather Latency Test", &["Size", "Avg Latency(us)"]),
    ("# OSU MPI Allreduce Latency Test", &["Size", "Avg Latency(us)"]),
];

///
/// A parsed OSU result table.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Table {
    /// The test title without the comment prefix.
    pub test: String,
    /// The benchmark suite version.
    pub version: String,
    /// The column names.
    pub columns: Vec<String>,
    /// The numeric rows.
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    ///
    /// Parses the standard output of an OSU test.
    ///
    /// Blank lines may precede the header. Every other comment line is skipped.
    ///
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut lines = text
            .lines()
            .filter(|line| !NOISE_LINES.iter().any(|noise| line.starts_with(noise)))
            .filter(|line| !line.trim().is_empty());

        let header = lines.next().ok_or(Error::OsuHeaderMissing)?.trim();
        if !header.starts_with(COMMENT_PREFIX) {
            return Err(Error::OsuUnexpectedLine {
                line: header.to_owned(),
            });
        }
        let (title, version) = header
            .rsplit_once(VERSION_SEPARATOR)
            .unwrap_or((header, ""));
        let columns = TESTS
            .iter()
            .find(|(known, _)| *known == title)
            .map(|(_, columns)| *columns)
            .ok_or_else(|| Error::OsuUnknownTest {
                title: title.to_owned(),
            })?;

        let mut rows = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.starts_with(COMMENT_PREFIX) {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(str::parse::<f64>)
                .collect::<Result<Vec<f64>, _>>()
                .ok()
                .filter(|row| row.len() == columns.len())
                .ok_or_else(|| Error::OsuRow {
                    line: line.to_owned(),
                    found: line.split_whitespace().count(),
                    expected: columns.len(),
                })?;
            rows.push(row);
        }

        Ok(Self {
            test: title
                .trim_start_matches(COMMENT_PREFIX)
                .trim()
                .to_owned(),
            version: version.to_owned(),
            columns: columns.iter().map(|column| (*column).to_owned()).collect(),
            rows,
        })
    }

    ///
    /// Returns the values of a column.
    ///
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let index = self.columns.iter().position(|column| column == name)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }
}

impl std::str::FromStr for Table {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::parse(string)
    }
}
