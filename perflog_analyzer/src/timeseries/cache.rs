//!
//! Time series cache file.
//!
//! One line per series: `name:x1,x2,...|y1,y2,...`, with relative y values.
//!

use std::collections::BTreeMap;
use std::path::Path;

use super::error::Error;
use super::Point;
use super::Series;

///
/// Time series cache.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cache {
    /// The cached series by name.
    pub series: BTreeMap<String, Vec<Point>>,
}

impl Cache {
    /// The name separator.
    const NAME_SEPARATOR: char = ':';
    /// The coordinate lists separator.
    const AXIS_SEPARATOR: char = '|';
    /// The value separator.
    const VALUE_SEPARATOR: char = ',';

    ///
    /// Reads the cache, or returns an empty one if the file does not exist.
    ///
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|error| Error::CacheReading {
            error,
            path: path.to_path_buf(),
        })?;
        let cache = Self::parse(text.as_str())?;
        tracing::debug!(path = %path.display(), series = cache.series.len(), "Loaded time series cache");
        Ok(cache)
    }

    ///
    /// Parses the cache text.
    ///
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut series = BTreeMap::new();
        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }
            // Names may contain colons, e.g. `csd3:compute`, coordinates never do.
            let (name, data) = line
                .rsplit_once(Self::NAME_SEPARATOR)
                .ok_or(Error::CacheSeparator { line: line_number })?;
            let (xs, ys) = data
                .split_once(Self::AXIS_SEPARATOR)
                .ok_or(Error::CacheSeparator { line: line_number })?;
            let xs = Self::parse_values(xs, line_number)?;
            let ys = Self::parse_values(ys, line_number)?;
            if xs.len() != ys.len() {
                return Err(Error::CacheLength {
                    line: line_number,
                    name: name.to_owned(),
                    x: xs.len(),
                    y: ys.len(),
                });
            }
            let points = xs
                .into_iter()
                .zip(ys)
                .map(|(x, y)| Point::new(x, y))
                .collect();
            series.insert(name.to_owned(), points);
        }
        Ok(Self { series })
    }

    ///
    /// Returns a cached series.
    ///
    pub fn get(&self, name: &str) -> Option<Series> {
        self.series
            .get(name)
            .map(|points| Series::new(name.to_owned(), points.clone()))
    }

    ///
    /// Inserts or replaces a series.
    ///
    pub fn insert(&mut self, series: Series) {
        self.series.insert(series.name, series.points);
    }

    ///
    /// Returns the cached series, computing and inserting it on a miss.
    ///
    pub fn get_or_insert_with<F, E>(&mut self, name: &str, compute: F) -> Result<Series, E>
    where
        F: FnOnce() -> Result<Series, E>,
    {
        if let Some(series) = self.get(name) {
            return Ok(series);
        }
        let series = compute()?;
        self.insert(series.clone());
        Ok(series)
    }

    ///
    /// Writes the cache file.
    ///
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        std::fs::write(path, self.to_string()).map_err(|error| Error::CacheWriting {
            error,
            path: path.to_path_buf(),
        })?;
        tracing::debug!(path = %path.display(), series = self.series.len(), "Saved time series cache");
        Ok(())
    }

    ///
    /// Parses a comma-separated list of numbers.
    ///
    fn parse_values(text: &str, line: usize) -> Result<Vec<f64>, Error> {
        if text.trim().is_empty() {
            return Ok(vec![]);
        }
        text.split(Self::VALUE_SEPARATOR)
            .map(|raw| {
                raw.trim().parse::<f64>().map_err(|_| Error::CacheValue {
                    line,
                    raw: raw.to_owned(),
                })
            })
            .collect()
    }
}

impl std::fmt::Display for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, points) in self.series.iter() {
            let xs = points
                .iter()
                .map(|point| point.x.to_string())
                .collect::<Vec<String>>()
                .join(",");
            let ys = points
                .iter()
                .map(|point| point.y.to_string())
                .collect::<Vec<String>>()
                .join(",");
            writeln!(
                f,
                "{name}{}{xs}{}{ys}",
                Self::NAME_SEPARATOR,
                Self::AXIS_SEPARATOR
            )?;
        }
        Ok(())
    }
}
