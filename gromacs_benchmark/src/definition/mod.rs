//!
//! The benchmark definitions.
//!

pub mod error;
pub mod reference;
pub mod strong_scaling;

use std::collections::BTreeMap;

use regex::Regex;

use crate::resources::Resources;

use self::error::Error;
use self::reference::Reference;

///
/// The output stream a pattern is matched against.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    /// The standard output.
    Stdout,
    /// The standard error.
    Stderr,
}

impl Stream {
    ///
    /// Selects the stream text.
    ///
    pub fn select<'a>(&self, stdout: &'a str, stderr: &'a str) -> &'a str {
        match self {
            Self::Stdout => stdout,
            Self::Stderr => stderr,
        }
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::Stderr => write!(f, "stderr"),
        }
    }
}

///
/// A pattern whose presence marks a sane run.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sanity {
    /// The searched stream.
    pub stream: Stream,
    /// The regular expression.
    pub pattern: String,
}

///
/// A pattern extracting one performance variable.
///
/// The value is capture group 1 of the `occurrence`-th match.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Performance {
    /// The searched stream.
    pub stream: Stream,
    /// The regular expression with one capture group.
    pub pattern: String,
    /// The zero-based match index.
    pub occurrence: usize,
}

impl Performance {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(stream: Stream, pattern: &str, occurrence: usize) -> Self {
        Self {
            stream,
            pattern: pattern.to_owned(),
            occurrence,
        }
    }
}

///
/// A benchmark definition.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Definition {
    /// The benchmark name.
    pub name: String,
    /// The shell-style patterns of the systems the benchmark runs on.
    pub valid_systems: Vec<String>,
    /// The shell-style patterns of the programming environments the benchmark runs in.
    pub valid_environments: Vec<String>,
    /// The benchmark executable.
    pub executable: String,
    /// The executable options.
    pub options: Vec<String>,
    /// The Spack specs to install.
    pub specs: Vec<String>,
    /// The time limit, e.g. `30m`.
    pub time_limit: String,
    /// Whether the nodes must not be shared.
    pub exclusive: bool,
    /// The input files the run must not modify.
    pub readonly_files: Vec<String>,
    /// Extra environment variables.
    pub variables: BTreeMap<String, String>,
    /// The fixed resources, if the benchmark does not scale.
    pub resources: Option<Resources>,
    /// The sanity pattern.
    pub sanity: Sanity,
    /// The performance variables.
    pub performance: BTreeMap<String, Performance>,
    /// The references of the performance variables.
    pub references: BTreeMap<String, Reference>,
}

impl Definition {
    /// The wildcard accepting every system or environment.
    pub const ANY: &'static str = "*";

    ///
    /// Whether the benchmark may run on `system` in `environment`.
    ///
    pub fn is_valid_for(&self, system: &str, environment: &str) -> bool {
        let matches = |patterns: &[String], name: &str| {
            patterns.iter().any(|pattern| {
                glob::Pattern::new(pattern)
                    .map(|pattern| pattern.matches(name))
                    .unwrap_or(false)
            })
        };
        matches(self.valid_systems.as_slice(), system)
            && matches(self.valid_environments.as_slice(), environment)
    }

    ///
    /// The time limit in seconds.
    ///
    pub fn time_limit_seconds(&self) -> Result<u64, Error> {
        let error = || Error::TimeLimit {
            raw: self.time_limit.clone(),
        };
        let raw = self.time_limit.trim();
        let (split, _) = raw.char_indices().last().ok_or_else(error)?;
        let (amount, unit) = raw.split_at(split);
        let amount = amount.parse::<u64>().map_err(|_| error())?;
        let multiplier = match unit {
            "s" => 1,
            "m" => 60,
            "h" => 3600,
            "d" => 86400,
            _ => return Err(error()),
        };
        Ok(amount * multiplier)
    }

    ///
    /// The `mpirun` arguments launching the executable with `resources`.
    ///
    pub fn mpirun_arguments(&self, resources: &Resources) -> Vec<String> {
        let mut arguments = vec![
            "-np".to_owned(),
            resources.mpi_tasks.to_string(),
            self.executable.clone(),
        ];
        arguments.extend(self.options.iter().cloned());
        arguments
    }

    ///
    /// The environment variables of a run with `resources`.
    ///
    pub fn environment(&self, resources: &Resources) -> BTreeMap<String, String> {
        let mut environment = resources.environment();
        environment.extend(
            self.variables
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        environment
    }

    ///
    /// Whether the sanity pattern is found in the output.
    ///
    pub fn passed_sanity(&self, stdout: &str, stderr: &str) -> Result<bool, Error> {
        let pattern = compile(self.sanity.pattern.as_str())?;
        Ok(pattern.is_match(self.sanity.stream.select(stdout, stderr)))
    }

    ///
    /// Extracts every performance variable from the output.
    ///
    pub fn extract(&self, stdout: &str, stderr: &str) -> Result<BTreeMap<String, f64>, Error> {
        let mut values = BTreeMap::new();
        for (variable, performance) in self.performance.iter() {
            let pattern = compile(performance.pattern.as_str())?;
            let text = performance.stream.select(stdout, stderr);
            let raw = pattern
                .captures_iter(text)
                .nth(performance.occurrence)
                .and_then(|captures| captures.get(1))
                .map(|value| value.as_str())
                .ok_or_else(|| Error::PerformanceMissing {
                    variable: variable.to_owned(),
                    stream: performance.stream.to_string(),
                })?;
            let value = raw.parse::<f64>().map_err(|_| Error::NonNumeric {
                variable: variable.to_owned(),
                raw: raw.to_owned(),
            })?;
            values.insert(variable.to_owned(), value);
        }
        Ok(values)
    }

    ///
    /// Checks the extracted values against the references.
    ///
    /// Variables without a reference always pass.
    ///
    pub fn check(&self, values: &BTreeMap<String, f64>) -> BTreeMap<String, bool> {
        values
            .iter()
            .map(|(variable, value)| {
                let passed = self
                    .references
                    .get(variable)
                    .map_or(true, |reference| reference.check(*value));
                (variable.to_owned(), passed)
            })
            .collect()
    }
}

///
/// The GROMACS strong scaling benchmark on the HECBioSim system.
///
pub fn gromacs() -> Definition {
    Definition {
        name: "GROMACS".to_owned(),
        valid_systems: vec![Definition::ANY.to_owned()],
        valid_environments: vec![Definition::ANY.to_owned()],
        executable: GROMACS_EXECUTABLE.to_owned(),
        options: GROMACS_OPTIONS.iter().map(|option| (*option).to_owned()).collect(),
        specs: vec![GROMACS_SPEC.to_owned()],
        time_limit: "30m".to_owned(),
        exclusive: true,
        readonly_files: vec!["benchmark.tpr".to_owned()],
        variables: BTreeMap::new(),
        resources: None,
        sanity: Sanity {
            stream: Stream::Stderr,
            pattern: crate::extract::gromacs::SANITY_MARKER.to_owned(),
        },
        performance: BTreeMap::from([(
            GROMACS_METRIC.to_owned(),
            Performance::new(Stream::Stderr, r"Performance:\s+(\S+)", 0),
        )]),
        references: BTreeMap::from([(
            GROMACS_METRIC.to_owned(),
            Reference::new(1.0, None, None, GROMACS_UNIT),
        )]),
    }
}

///
/// The HPGMG-FV finite volume multigrid benchmark.
///
pub fn hpgmg() -> Definition {
    let tasks = 4;
    let threads = 4;
    Definition {
        name: "HPGMG".to_owned(),
        valid_systems: vec![Definition::ANY.to_owned()],
        valid_environments: vec![Definition::ANY.to_owned()],
        executable: "hpgmg-fv".to_owned(),
        options: vec!["7".to_owned(), "8".to_owned()],
        specs: vec!["hpgmg@0.4".to_owned()],
        time_limit: "30m".to_owned(),
        exclusive: false,
        readonly_files: vec![],
        variables: BTreeMap::from([("OMP_PLACES".to_owned(), "cores".to_owned())]),
        resources: Some(Resources {
            total_cores: tasks * threads,
            omp_threads: threads,
            mpi_tasks: tasks,
            nodes: 1,
            tasks_per_node: tasks,
        }),
        sanity: Sanity {
            stream: Stream::Stdout,
            pattern: crate::extract::hpgmg::SANITY_MARKER.to_owned(),
        },
        performance: (0..3)
            .map(|level| {
                (
                    format!("l_{level}"),
                    Performance::new(Stream::Stdout, r"DOF/s=(\S+)\s+.*", level),
                )
            })
            .collect(),
        references: (0..3)
            .map(|level| {
                (
                    format!("l_{level}"),
                    Reference::new(1e8, Some(-0.9), Some(0.6), "DOF/s"),
                )
            })
            .collect(),
    }
}

/// The GROMACS MPI executable.
pub const GROMACS_EXECUTABLE: &str = "gmx_mpi";

/// The GROMACS `mdrun` options reading `benchmark.tpr`.
pub const GROMACS_OPTIONS: [&str; 3] = ["mdrun", "-deffnm", "benchmark"];

/// The default GROMACS Spack spec.
pub const GROMACS_SPEC: &str = "gromacs@2019%gcc@9.3.0^openmpi@4.1.1";

/// The GROMACS performance metric.
pub const GROMACS_METRIC: &str = "Rate";

/// The GROMACS performance units.
pub const GROMACS_UNIT: &str = "ns/day";

///
/// Compiles a pattern.
///
fn compile(pattern: &str) -> Result<Regex, Error> {
    Regex::new(pattern).map_err(|error| Error::Pattern {
        pattern: pattern.to_owned(),
        error,
    })
}

#[cfg(test)]
mod tests;
