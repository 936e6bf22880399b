//!
//! A strong scaling suite of GROMACS runs.
//!

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use chrono::Utc;
use colored::Colorize;

use perflog_analyzer::Record;
use perflog_analyzer::Value;

use crate::benchmark::GromacsBenchmark;
use crate::definition;
use crate::definition::reference::Reference;
use crate::definition::strong_scaling::StrongScaling;
use crate::process::Launcher;
use crate::resources::error::Error as ResourcesError;
use crate::resources::Resources;
use crate::spack::Spack;
use crate::statistics;

///
/// GROMACS runs of one spec over increasing core counts.
///
#[derive(Debug, Clone)]
pub struct Suite {
    /// The GROMACS Spack spec.
    pub spec: String,
    /// The runs, in core count order.
    pub benchmarks: Vec<GromacsBenchmark>,
    /// The directory of the per-run cache files.
    pub cache_directory: PathBuf,
}

impl Suite {
    /// The perflog field naming the producer.
    pub const PERFLOG_PRODUCER: &'static str = "gromacs-benchmark";

    ///
    /// Creates one run per requested core count.
    ///
    pub fn new(
        spec: &str,
        core_counts: &[u32],
        omp_threads: u32,
        cpus_per_node: Option<u32>,
        cache_directory: PathBuf,
    ) -> Result<Self, ResourcesError> {
        let scaling = StrongScaling::new(core_counts.to_vec(), omp_threads);
        Self::from_scaling(spec, &scaling, cpus_per_node, cache_directory)
    }

    ///
    /// Creates one run per core count of the strong scaling sweep.
    ///
    pub fn from_scaling(
        spec: &str,
        scaling: &StrongScaling,
        cpus_per_node: Option<u32>,
        cache_directory: PathBuf,
    ) -> Result<Self, ResourcesError> {
        let benchmarks = scaling
            .resources(cpus_per_node)?
            .into_iter()
            .map(|resources: Resources| GromacsBenchmark::new(spec, resources))
            .collect();
        Ok(Self {
            spec: spec.to_owned(),
            benchmarks,
            cache_directory,
        })
    }

    ///
    /// Installs the spec once, then runs every benchmark not found in the cache.
    ///
    pub fn run(&mut self, spack: Option<&Spack>, launcher: &impl Launcher) -> anyhow::Result<()> {
        let Some(first) = self.benchmarks.first_mut() else {
            tracing::warn!(spec = %self.spec, "Had no benchmarks to run");
            return Ok(());
        };
        first
            .install(spack, launcher)
            .map_err(|error| anyhow::anyhow!("GROMACS `{}` installation: {error}", self.spec))?;
        let executable = first.executable.clone();

        for benchmark in self.benchmarks.iter_mut() {
            if benchmark.cache_exists(self.cache_directory.as_path()) {
                benchmark.load(self.cache_directory.as_path())?;
                continue;
            }
            benchmark.executable = executable.clone();
            benchmark
                .run(launcher)
                .map_err(|error| anyhow::anyhow!("Benchmark `{benchmark}` launching: {error}"))?;
            benchmark.save(self.cache_directory.as_path())?;
        }
        Ok(())
    }

    ///
    /// The performance of every run by total core count.
    ///
    pub fn results(&self) -> Vec<(u32, Option<f64>)> {
        self.benchmarks
            .iter()
            .map(|benchmark| (benchmark.resources.total_cores, benchmark.performance()))
            .collect()
    }

    ///
    /// The root mean square deviation of the results from linear scaling.
    ///
    pub fn deviation_from_linear(&self) -> f64 {
        let (cores, performance): (Vec<f64>, Vec<Option<f64>>) = self
            .results()
            .into_iter()
            .map(|(cores, performance)| (f64::from(cores), performance))
            .unzip();
        statistics::deviation_from_linear(cores.as_slice(), performance.as_slice())
    }

    ///
    /// Prints the results table.
    ///
    pub fn print_results(&self) {
        println!("{self}");
    }

    ///
    /// Appends a perflog record for every run with a performance value.
    ///
    /// Returns the number of records written.
    ///
    pub fn write_perflog(&self, path: &Path) -> anyhow::Result<usize> {
        let records = self.records();
        if records.is_empty() {
            tracing::warn!(path = %path.display(), "No performance values to log");
            return Ok(0);
        }

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|error| anyhow::anyhow!("Perflog directory {parent:?} creating: {error}"))?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|error| anyhow::anyhow!("Perflog {path:?} opening: {error}"))?;
        for record in records.iter() {
            writeln!(file, "{record}")
                .map_err(|error| anyhow::anyhow!("Perflog {path:?} writing: {error}"))?;
        }
        tracing::info!(path = %path.display(), count = records.len(), "Appended perflog records");
        Ok(records.len())
    }

    ///
    /// The perflog records of the runs with a performance value.
    ///
    pub fn records(&self) -> Vec<Record> {
        let reference = Reference::new(1.0, None, None, definition::GROMACS_UNIT);
        self.benchmarks
            .iter()
            .filter_map(|benchmark| {
                let value = benchmark.performance()?;
                let timestamp = benchmark.completed_at.unwrap_or_else(Utc::now);
                let mut record = Record::new(
                    timestamp.fixed_offset(),
                    definition::GROMACS_METRIC,
                    value,
                    definition::GROMACS_UNIT,
                );
                record.info = vec![Self::PERFLOG_PRODUCER.to_owned(), benchmark.to_string()];
                record.job_id = benchmark.pid.map(|pid| pid.to_string());
                record.reference = Some(reference.to_string());
                record.context = benchmark
                    .resources
                    .context()
                    .into_iter()
                    .map(|(key, value)| (key.to_owned(), Value::Integer(i64::from(value))))
                    .collect::<BTreeMap<String, Value>>();
                Some(record)
            })
            .collect()
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "╔═══════════════════╡ GROMACS STRONG SCALING ╞══════════════════╗"
        )?;
        writeln!(f, "║ {:<8}  {:>52} ║", "CORES".bold(), "PERFORMANCE (ns/day)".bold())?;
        for (cores, performance) in self.results() {
            let performance = match performance {
                Some(performance) => format!("{performance:.3}").green(),
                None => "n/a".bright_red(),
            };
            writeln!(f, "║ {cores:<8}  {performance:>52} ║")?;
        }
        writeln!(
            f,
            "╠════════════════════════════════════════════════════════════════╣"
        )?;
        let deviation = self.deviation_from_linear();
        let deviation = if deviation == statistics::DEVIATION_UNAVAILABLE {
            "n/a".bright_red()
        } else {
            format!("{deviation:.3}").normal()
        };
        writeln!(f, "║ {:<24}  {deviation:>36} ║", "Deviation from linear")?;
        write!(
            f,
            "╚════════════════════════════════════════════════════════════════╝"
        )
    }
}
