//!
//! Bar plot of the latest values.
//!

use crate::perflog::LogFile;

use super::error::Error;
use super::Plot;

///
/// A bar of the plot.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Bar {
    /// The `system:partition` case.
    pub category: String,
    /// The last value of the metric.
    pub value: f64,
}

///
/// One bar per perflog with the last value of a metric.
///
#[derive(Debug, Clone)]
pub struct BarPlot {
    /// The HTML element identifier.
    pub id: String,
    /// The plot title.
    pub title: String,
    /// The plotted metric.
    pub metric: String,
    /// The metric units.
    pub units: Option<String>,
    /// The bars in input order.
    pub bars: Vec<Bar>,
}

impl BarPlot {
    ///
    /// Builds the plot from perflogs.
    ///
    pub fn new(id: String, title: String, files: &[LogFile], metric: &str) -> Result<Self, Error> {
        if files.is_empty() {
            return Err(Error::NoData { id });
        }
        let mut units = None;
        let bars = files
            .iter()
            .map(|file| {
                let record = file.last(metric).ok_or_else(|| Error::MetricMissing {
                    path: file.path.clone(),
                    metric: metric.to_owned(),
                })?;
                units.get_or_insert_with(|| record.units.clone());
                Ok(Bar {
                    category: file.metadata.case(),
                    value: record.value,
                })
            })
            .collect::<Result<Vec<Bar>, Error>>()?;
        Ok(Self {
            id,
            title,
            metric: metric.to_owned(),
            units,
            bars,
        })
    }

    ///
    /// The value axis title.
    ///
    fn axis_title(&self) -> String {
        match self.units.as_deref() {
            Some(units) => format!("{} ({units})", self.metric),
            None => self.metric.clone(),
        }
    }
}

impl Plot for BarPlot {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn chart(&self) -> serde_json::Value {
        serde_json::json!({
            "title": self.title,
            "data": { "values": self.bars },
            "mark": { "type": "bar", "tooltip": true },
            "encoding": {
                "x": { "field": "category", "type": "nominal", "title": "Category" },
                "y": { "field": "value", "type": "quantitative", "title": self.axis_title() },
                "tooltip": [
                    { "field": "category", "type": "nominal", "title": "Description" },
                    { "field": "value", "type": "quantitative", "title": "Value" },
                ],
            },
        })
    }
}
