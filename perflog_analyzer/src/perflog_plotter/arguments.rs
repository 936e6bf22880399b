//!
//! The perflog plotter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The perflog plotter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints debug events.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The plot definitions file.
    #[arg(long, default_value = "plots.json")]
    pub plots: PathBuf,

    /// The page template. The page is rendered at its path without the first component.
    #[arg(long, default_value = "_templates/index.html")]
    pub template: PathBuf,

    /// The root the page is rendered under.
    #[arg(long, default_value = ".")]
    pub output_root: PathBuf,

    /// The perflogs root the plot patterns are relative to.
    #[arg(long, default_value = "../perflogs")]
    pub perflogs: PathBuf,

    /// The time series cache file.
    #[arg(long, default_value = "timeseries.cache")]
    pub cache: PathBuf,
}
