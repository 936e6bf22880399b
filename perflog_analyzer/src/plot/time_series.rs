//!
//! Relative performance over time.
//!

use crate::perflog::LogFile;
use crate::timeseries::block::block_average;
use crate::timeseries::cache::Cache;
use crate::timeseries::smoothing::smooth;
use crate::timeseries::Series;

use super::error::Error;
use super::Plot;

///
/// Smoothing parameters.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The number of averaging bins.
    pub bins: usize,
    /// The number of resampled points.
    pub resolution: usize,
    /// The number of points per envelope block.
    pub block_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bins: 20,
            resolution: 200,
            block_size: 10,
        }
    }
}

///
/// A smoothed line row.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LineRow {
    /// The series name.
    pub series: String,
    /// The timestamp in milliseconds.
    pub time: f64,
    /// The smoothed relative value.
    pub value: f64,
}

///
/// An envelope band row.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BandRow {
    /// The series name.
    pub series: String,
    /// The block timestamp in milliseconds.
    pub time: f64,
    /// The block minimum.
    pub min: f64,
    /// The block maximum.
    pub max: f64,
}

///
/// One smoothed line per perflog with a block min/max envelope.
///
#[derive(Debug, Clone)]
pub struct TimeSeriesPlot {
    /// The HTML element identifier.
    pub id: String,
    /// The plot title.
    pub title: String,
    /// The smoothed lines.
    pub lines: Vec<LineRow>,
    /// The envelope bands.
    pub bands: Vec<BandRow>,
}

impl TimeSeriesPlot {
    ///
    /// Builds the plot, reusing the cached series and caching the computed ones.
    ///
    pub fn new(
        id: String,
        title: String,
        files: &[LogFile],
        metric: &str,
        settings: Settings,
        cache: &mut Cache,
    ) -> Result<Self, Error> {
        if files.is_empty() {
            return Err(Error::NoData { id });
        }
        let mut lines = Vec::new();
        let mut bands = Vec::new();
        for file in files.iter() {
            let name = Self::series_name(file, metric);
            let series = cache.get_or_insert_with(name.as_str(), || {
                Series::from_log_file(name.clone(), file, metric)
            })?;

            lines.extend(
                smooth(series.points.as_slice(), settings.bins, settings.resolution)?
                    .into_iter()
                    .map(|point| LineRow {
                        series: name.clone(),
                        time: point.x * 1000.0,
                        value: point.y,
                    }),
            );
            bands.extend(
                block_average(series.points.as_slice(), settings.block_size)?
                    .into_iter()
                    .map(|block| BandRow {
                        series: name.clone(),
                        time: block.x * 1000.0,
                        min: block.min,
                        max: block.max,
                    }),
            );
        }
        Ok(Self {
            id,
            title,
            lines,
            bands,
        })
    }

    ///
    /// The cache name of a perflog series.
    ///
    pub fn series_name(file: &LogFile, metric: &str) -> String {
        let metadata = &file.metadata;
        format!(
            "{} {}/{} {metric}",
            metadata.case(),
            metadata.environment.as_deref().unwrap_or("unknown"),
            metadata.test.as_deref().unwrap_or("unknown"),
        )
    }
}

impl Plot for TimeSeriesPlot {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn chart(&self) -> serde_json::Value {
        let x = serde_json::json!({ "field": "time", "type": "temporal", "title": "Date" });
        let color = serde_json::json!({ "field": "series", "type": "nominal", "title": "Series" });
        serde_json::json!({
            "title": self.title,
            "layer": [
                {
                    "data": { "values": self.bands },
                    "mark": { "type": "area", "opacity": 0.3 },
                    "encoding": {
                        "x": x,
                        "y": { "field": "min", "type": "quantitative", "title": "Relative value" },
                        "y2": { "field": "max" },
                        "color": color,
                    },
                },
                {
                    "data": { "values": self.lines },
                    "mark": { "type": "line", "tooltip": true },
                    "encoding": {
                        "x": x,
                        "y": { "field": "value", "type": "quantitative", "title": "Relative value" },
                        "color": color,
                    },
                },
            ],
        })
    }
}
