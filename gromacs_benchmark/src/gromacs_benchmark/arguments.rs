//!
//! The GROMACS benchmark runner arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The GROMACS benchmark runner arguments.
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

    /// The GROMACS Spack spec.
    #[arg(long, default_value = gromacs_benchmark::definition::GROMACS_SPEC)]
    pub spec: String,

    /// The total core counts, one run each. Defaults to 8, 12, 16, 20, and 24.
    #[arg(short, long, value_delimiter = ',')]
    pub cores: Vec<u32>,

    /// The OpenMP threads per MPI task.
    #[arg(long, default_value_t = gromacs_benchmark::Resources::DEFAULT_OMP_THREADS)]
    pub omp_threads: u32,

    /// The CPUs per node, overriding the system information file.
    #[arg(long)]
    pub cpus_per_node: Option<u32>,

    /// The system information file mapping `system:partition` patterns to parameters.
    #[arg(long)]
    pub system_info: Option<PathBuf>,

    /// The `system:partition` name to look up in the system information file.
    #[arg(long, default_value = "local:default")]
    pub system: String,

    /// The directory of the per-run cache files.
    #[arg(long, default_value = ".")]
    pub cache_directory: PathBuf,

    /// The perflog to append the results to.
    #[arg(long)]
    pub perflog: Option<PathBuf>,

    /// Skips the Spack installation, expecting `gmx_mpi` in `${PATH}`.
    #[arg(long)]
    pub no_install: bool,
}
