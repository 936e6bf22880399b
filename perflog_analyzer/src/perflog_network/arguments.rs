//!
//! The perflog network arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The perflog network arguments.
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

    /// The network configuration file. The built-in network is used if unset.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// The perflogs root with one directory per cluster.
    #[arg(long, default_value = "../perflogs")]
    pub perflogs: PathBuf,

    /// The D3 node-link JSON output file.
    #[arg(short, long, default_value = "assets/network.json")]
    pub output_path: PathBuf,
}
