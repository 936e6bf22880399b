//!
//! Strong scaling line plot.
//!

use crate::group::strategy::Strategy;
use crate::group::Group;
use crate::perflog::LogFile;

use super::error::Error;
use super::Plot;

///
/// A data row of the plot.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Row {
    /// The series label.
    pub series: String,
    /// The total core count.
    pub cores: u64,
    /// The metric value.
    pub value: f64,
    /// Either [`Row::MEASURED`] or [`Row::IDEAL`].
    pub kind: &'static str,
}

impl Row {
    /// The kind of measured rows.
    pub const MEASURED: &'static str = "measured";
    /// The kind of ideal linear scaling rows.
    pub const IDEAL: &'static str = "ideal";
}

///
/// One line per perflog group, each with its ideal linear scaling reference.
///
#[derive(Debug, Clone)]
pub struct StrongScalingPlot {
    /// The HTML element identifier.
    pub id: String,
    /// The plot title.
    pub title: String,
    /// The plotted metric.
    pub metric: String,
    /// The measured and ideal rows.
    pub rows: Vec<Row>,
}

impl StrongScalingPlot {
    /// The default metric: the GROMACS simulation rate in ns/day.
    pub const DEFAULT_METRIC: &'static str = "Rate";

    ///
    /// Builds the plot from perflogs grouped with `strategy`.
    ///
    pub fn new(
        id: String,
        title: String,
        files: Vec<LogFile>,
        metric: &str,
        strategy: Strategy,
    ) -> Result<Self, Error> {
        if files.is_empty() {
            return Err(Error::NoData { id });
        }
        let mut rows = Vec::new();
        for group in Group::from_files(files, strategy).iter() {
            let label = group.label();
            let points = group.series(metric)?;
            tracing::debug!(group = %group.key, points = points.len(), "Strong scaling series");

            rows.extend(points.iter().map(|(cores, value)| Row {
                series: label.clone(),
                cores: *cores,
                value: *value,
                kind: Row::MEASURED,
            }));
            if let Some((base_cores, base_value)) = points.first().copied() {
                rows.extend(points.iter().map(|(cores, _)| Row {
                    series: label.clone(),
                    cores: *cores,
                    value: Self::ideal(base_cores, base_value, *cores),
                    kind: Row::IDEAL,
                }));
            }
        }
        Ok(Self {
            id,
            title,
            metric: metric.to_owned(),
            rows,
        })
    }

    ///
    /// The value under perfect linear scaling from the first point.
    ///
    pub fn ideal(base_cores: u64, base_value: f64, cores: u64) -> f64 {
        if base_cores == 0 {
            return base_value;
        }
        base_value * cores as f64 / base_cores as f64
    }
}

impl Plot for StrongScalingPlot {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn chart(&self) -> serde_json::Value {
        let encoding = serde_json::json!({
            "x": { "field": "cores", "type": "quantitative", "title": "Number of cores" },
            "y": { "field": "value", "type": "quantitative", "title": self.metric },
            "color": { "field": "series", "type": "nominal", "title": "Series" },
        });
        serde_json::json!({
            "title": self.title,
            "data": { "values": self.rows },
            "encoding": encoding,
            "layer": [
                {
                    "transform": [{ "filter": { "field": "kind", "equal": Row::MEASURED } }],
                    "mark": { "type": "line", "point": true, "tooltip": true },
                },
                {
                    "transform": [{ "filter": { "field": "kind", "equal": Row::IDEAL } }],
                    "mark": { "type": "line", "strokeDash": [4, 4], "opacity": 0.6 },
                },
            ],
        })
    }
}
