//!
//! A single GROMACS benchmark run.
//!

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use colored::Colorize;

use crate::definition;
use crate::extract;
use crate::process::Launcher;
use crate::resources::Resources;
use crate::spack::error::Error as SpackError;
use crate::spack::Spack;

///
/// A GROMACS run on a requested number of cores.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GromacsBenchmark {
    /// The GROMACS Spack spec.
    pub spec: String,
    /// The resolved resources.
    pub resources: Resources,
    /// The GROMACS executable, either a name in `${PATH}` or an installed path.
    pub executable: String,
    /// The `mpirun` process identifier.
    pub pid: Option<u32>,
    /// The completion time of the run.
    pub completed_at: Option<DateTime<Utc>>,
    /// The standard output lines, if the benchmark has run.
    pub stdout: Option<Vec<String>>,
    /// The standard error lines, if the benchmark has run.
    pub stderr: Option<Vec<String>>,
}

impl GromacsBenchmark {
    /// The MPI launcher.
    pub const MPIRUN: &'static str = "mpirun";

    /// The cache file extension.
    pub const CACHE_EXTENSION: &'static str = "bin";

    /// The replacement of path separators in cache file names.
    pub const CACHE_SEPARATOR_REPLACEMENT: char = '_';

    ///
    /// A shortcut constructor.
    ///
    pub fn new(spec: &str, resources: Resources) -> Self {
        Self {
            spec: spec.to_owned(),
            resources,
            executable: definition::GROMACS_EXECUTABLE.to_owned(),
            pid: None,
            completed_at: None,
            stdout: None,
            stderr: None,
        }
    }

    ///
    /// Installs and loads the spec, then points the executable at the installation.
    ///
    /// Without Spack, the executable is expected in `${PATH}`.
    ///
    pub fn install(
        &mut self,
        spack: Option<&Spack>,
        launcher: &impl Launcher,
    ) -> Result<(), SpackError> {
        let Some(spack) = spack else {
            tracing::warn!(spec = %self.spec, "Spack is unavailable, expecting `{}` in ${{PATH}}", self.executable);
            return Ok(());
        };

        println!(
            "  {} `{}`",
            "Installing".bright_green().bold(),
            self.spec
        );
        spack.install(launcher, self.spec.as_str())?;
        spack.load(launcher, self.spec.as_str())?;
        let prefix = spack.locate(launcher, self.spec.as_str())?;
        self.executable = prefix
            .join("bin")
            .join(definition::GROMACS_EXECUTABLE)
            .to_string_lossy()
            .to_string();
        tracing::info!(executable = %self.executable, "GROMACS installed");
        Ok(())
    }

    ///
    /// The `mpirun` arguments.
    ///
    pub fn arguments(&self) -> Vec<String> {
        let mut definition = definition::gromacs();
        definition.executable = self.executable.clone();
        definition.mpirun_arguments(&self.resources)
    }

    ///
    /// Runs the benchmark to completion, capturing its output.
    ///
    /// A non-zero exit is logged, and the output is kept for inspection.
    ///
    pub fn run(&mut self, launcher: &impl Launcher) -> std::io::Result<()> {
        println!(
            "     {} {self} on {} MPI tasks with {} OpenMP threads",
            "Running".bright_green().bold(),
            self.resources.mpi_tasks,
            self.resources.omp_threads,
        );

        let output = launcher.launch(
            Self::MPIRUN,
            self.arguments().as_slice(),
            &self.resources.environment(),
        )?;
        if !output.success {
            tracing::warn!(benchmark = %self, code = ?output.code, "The benchmark exited with a failure");
        }

        self.pid = Some(output.pid);
        self.completed_at = Some(Utc::now());
        self.stdout = Some(output.stdout);
        self.stderr = Some(output.stderr);
        Ok(())
    }

    ///
    /// The performance in ns/day.
    ///
    pub fn performance(&self) -> Option<f64> {
        let Some(stderr) = self.stderr.as_ref() else {
            tracing::warn!(benchmark = %self, "Failed to extract the performance. No stderr");
            return None;
        };
        let performance = extract::gromacs::performance(stderr.as_slice());
        if performance.is_none() {
            tracing::warn!(benchmark = %self, "Failed to extract the performance from stderr");
        }
        performance
    }

    ///
    /// Whether the run printed its closing remark.
    ///
    pub fn passed_sanity(&self) -> bool {
        self.stderr
            .as_ref()
            .map(|stderr| extract::gromacs::passed_sanity(stderr.as_slice()))
            .unwrap_or_default()
    }

    ///
    /// The cache file of the run in `directory`.
    ///
    /// Path separators in the identity, e.g. of a `gromacs/<hash>` spec, are replaced with `_`.
    ///
    pub fn cache_path(&self, directory: &Path) -> PathBuf {
        let name: String = self
            .to_string()
            .chars()
            .map(|character| {
                if std::path::is_separator(character) {
                    Self::CACHE_SEPARATOR_REPLACEMENT
                } else {
                    character
                }
            })
            .collect();
        directory.join(format!("{name}.{}", Self::CACHE_EXTENSION))
    }

    ///
    /// Whether the run is cached in `directory`.
    ///
    pub fn cache_exists(&self, directory: &Path) -> bool {
        self.cache_path(directory).is_file()
    }

    ///
    /// Saves the run to its cache file in `directory`.
    ///
    pub fn save(&self, directory: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(directory).map_err(|error| {
            anyhow::anyhow!("Cache directory {directory:?} creating: {error}")
        })?;
        let path = self.cache_path(directory);
        let file = File::create(path.as_path())
            .map_err(|error| anyhow::anyhow!("Cache file {path:?} creating: {error}"))?;
        bincode::serialize_into(file, self)
            .map_err(|error| anyhow::anyhow!("Benchmark {path:?} serialization: {error}"))?;
        tracing::info!(path = %path.display(), "Saved the benchmark run");
        Ok(())
    }

    ///
    /// Replaces the run with its cached state from `directory`.
    ///
    pub fn load(&mut self, directory: &Path) -> anyhow::Result<()> {
        let path = self.cache_path(directory);
        let file = File::open(path.as_path())
            .map_err(|error| anyhow::anyhow!("Cache file {path:?} opening: {error}"))?;
        *self = bincode::deserialize_from(file)
            .map_err(|error| anyhow::anyhow!("Benchmark {path:?} deserialization: {error}"))?;
        println!(
            "      {} {self} from `{}`",
            "Loaded".bright_green().bold(),
            path.to_string_lossy()
        );
        Ok(())
    }
}

impl std::fmt::Display for GromacsBenchmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GROMACS_benchmark_{}_{}",
            self.spec, self.resources.total_cores
        )
    }
}

#[cfg(test)]
mod tests;
