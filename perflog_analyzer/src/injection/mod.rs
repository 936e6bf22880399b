//!
//! Plot injection into the documentation pages.
//!

use std::path::Path;

use colored::Colorize;

use crate::group::strategy::Strategy;
use crate::html::HtmlFile;
use crate::plot::bar::BarPlot;
use crate::plot::kind::PlotKind;
use crate::plot::strong_scaling::StrongScalingPlot;
use crate::plot::time_series::Settings;
use crate::plot::time_series::TimeSeriesPlot;
use crate::plot::Plot;
use crate::timeseries::cache::Cache;

///
/// A plot placed at a numbered anchor of a page.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PlotDefinition {
    /// The numbered anchor line replaced by the plot.
    pub index: usize,
    /// The plot kind.
    pub kind: PlotKind,
    /// The perflog glob pattern relative to the perflogs root.
    pub pattern: String,
    /// The plotted metric.
    pub metric: String,
    /// The plot title. Defaults to the metric.
    #[serde(default)]
    pub title: Option<String>,
    /// The grouping strategy of strong scaling plots.
    #[serde(default)]
    pub grouping: Strategy,
    /// The smoothing parameters of time series plots.
    #[serde(default)]
    pub smoothing: Settings,
}

impl PlotDefinition {
    ///
    /// The HTML element identifier.
    ///
    pub fn id(&self) -> String {
        format!("perflog-plot-{}", self.index)
    }

    ///
    /// Builds the plot from the perflogs matching the pattern.
    ///
    pub fn build(&self, perflogs_root: &Path, cache: &mut Cache) -> anyhow::Result<Box<dyn Plot>> {
        let files = crate::perflog::load_pattern(perflogs_root, self.pattern.as_str())?;
        tracing::debug!(
            index = self.index,
            kind = %self.kind,
            files = files.len(),
            "Loaded plot perflogs"
        );
        let title = self.title.clone().unwrap_or_else(|| self.metric.clone());
        Ok(match self.kind {
            PlotKind::Bar => Box::new(BarPlot::new(
                self.id(),
                title,
                files.as_slice(),
                self.metric.as_str(),
            )?),
            PlotKind::StrongScaling => Box::new(StrongScalingPlot::new(
                self.id(),
                title,
                files,
                self.metric.as_str(),
                self.grouping,
            )?),
            PlotKind::TimeSeries => Box::new(TimeSeriesPlot::new(
                self.id(),
                title,
                files.as_slice(),
                self.metric.as_str(),
                self.smoothing,
                cache,
            )?),
        })
    }
}

///
/// Injects every plot into the page rendered from `html`.
///
/// For each definition the script is added before the end of the body and the div
/// replaces the numbered anchor.
///
pub fn inject_all(
    definitions: &[PlotDefinition],
    html: &HtmlFile,
    perflogs_root: &Path,
    cache: &mut Cache,
) -> anyhow::Result<()> {
    for definition in definitions.iter() {
        let plot = definition.build(perflogs_root, cache).map_err(|error| {
            anyhow::anyhow!("Plot {} `{}` building: {error}", definition.index, definition.pattern)
        })?;
        let components = plot.components();
        html.add_before_end_body(components.script.as_str())?;
        html.replace(definition.index, components.div.as_str())?;
        println!(
            "    {} {} plot {} into `{}`",
            "Injected".bright_green().bold(),
            definition.kind,
            definition.index,
            html.output.to_string_lossy(),
        );
    }
    Ok(())
}
