//!
//! Configuration files.
//!
//! Configuration files are JSON with `#` comment lines, called cjson.
//!

pub mod system_info;

use std::path::Path;

pub use self::system_info::SystemInfo;

use crate::injection::PlotDefinition;

/// The environment variable selecting the Spack environment of benchmark builds.
pub const SPACK_ENVIRONMENT_VARIABLE: &str = "BENCHMARK_SPACK_ENV";

///
/// Reads a JSON file ignoring lines whose first non-blank character is `#`.
///
pub fn read_cjson<T>(path: &Path) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let text = std::fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("Configuration file {path:?} reading: {error}"))?;
    parse_cjson(text.as_str())
        .map_err(|error| anyhow::anyhow!("Configuration file {path:?} parsing: {error}"))
}

///
/// Parses cjson text.
///
pub fn parse_cjson<T>(text: &str) -> Result<T, serde_json::Error>
where
    T: serde::de::DeserializeOwned,
{
    let json = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<&str>>()
        .join("\n");
    serde_json::from_str(json.as_str())
}

///
/// The plot definitions file: a cjson list of definitions.
///
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(transparent)]
pub struct PlotsConfig {
    /// The plot definitions.
    pub definitions: Vec<PlotDefinition>,
}

impl TryFrom<&Path> for PlotsConfig {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        read_cjson(path)
    }
}
