//!
//! The perflog table arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The perflog table arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Prints debug events.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// The perflogs root.
    #[arg(long, default_value = "../../perflogs")]
    pub perflogs: PathBuf,

    /// Shell-style pattern restricting the test directories.
    #[arg(long)]
    pub test: Option<String>,

    /// The field indexing the rows, e.g. `num_total_cores`.
    #[arg(long)]
    pub index: String,

    /// The tabulated metric.
    #[arg(long)]
    pub metric: String,

    /// Table output format: `json`, `csv`, or `xlsx`.
    #[arg(long, default_value_t = perflog_analyzer::OutputFormat::Csv)]
    pub output_format: perflog_analyzer::OutputFormat,

    /// The output file.
    #[arg(short, long)]
    pub output_path: PathBuf,
}
