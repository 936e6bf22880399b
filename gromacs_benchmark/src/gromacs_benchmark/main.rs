//!
//! The GROMACS benchmark runner binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use gromacs_benchmark::Spack;
use gromacs_benchmark::StrongScaling;
use gromacs_benchmark::Subprocess;
use gromacs_benchmark::Suite;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    perflog_analyzer::logging::init(arguments.verbose, arguments.quiet);

    println!(
        "    {} the GROMACS benchmark of `{}`",
        "Starting".bright_green().bold(),
        arguments.spec,
    );

    let cpus_per_node = match arguments.cpus_per_node {
        Some(cpus_per_node) => Some(cpus_per_node),
        None => match arguments.system_info.as_deref() {
            Some(path) => perflog_analyzer::SystemInfo::try_from(path)?
                .num_cpus(arguments.system.as_str()),
            None => None,
        },
    };

    let scaling = if arguments.cores.is_empty() {
        StrongScaling {
            omp_threads: arguments.omp_threads,
            ..StrongScaling::default()
        }
    } else {
        StrongScaling::new(arguments.cores.clone(), arguments.omp_threads)
    };

    let launcher = Subprocess;
    let spack = if arguments.no_install {
        None
    } else {
        match Spack::find() {
            Some(spack) => {
                let system = arguments
                    .system
                    .split(':')
                    .next()
                    .unwrap_or(arguments.system.as_str());
                let root = std::env::current_dir()
                    .map_err(|error| anyhow::anyhow!("Working directory reading: {error}"))?;
                let environment: PathBuf = spack
                    .identify_environment(&launcher, system, root.as_path())
                    .map_err(|error| anyhow::anyhow!("Spack environment: {error}"))?;
                Some(spack.with_environment(environment))
            }
            None => None,
        }
    };

    let mut suite = Suite::from_scaling(
        arguments.spec.as_str(),
        &scaling,
        cpus_per_node,
        arguments.cache_directory.clone(),
    )?;
    suite.run(spack.as_ref(), &launcher)?;

    if !arguments.quiet {
        suite.print_results();
    }

    if let Some(path) = arguments.perflog.as_deref() {
        let count = suite.write_perflog(path)?;
        if !arguments.quiet {
            println!(
                "       {} {count} records to `{}`",
                "Saved".bright_green().bold(),
                path.to_string_lossy(),
            );
        }
    }

    Ok(())
}
