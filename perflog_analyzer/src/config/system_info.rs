//!
//! System information file.
//!

use std::path::Path;

///
/// System information file.
///
/// Maps shell-style `system:partition` patterns to parameter objects, e.g.
/// `{ "csd3:*": { "num_cpus": 56 } }`.
///
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(transparent)]
pub struct SystemInfo {
    /// The entries in file order.
    pub entries: serde_json::Map<String, serde_json::Value>,
}

impl SystemInfo {
    /// The per-node CPU count parameter.
    pub const PARAMETER_NUM_CPUS: &'static str = "num_cpus";

    ///
    /// Merges the parameters of every entry matching `sys_part` in file order.
    ///
    pub fn get(&self, sys_part: &str) -> serde_json::Map<String, serde_json::Value> {
        let mut result = serde_json::Map::new();
        for (pattern, parameters) in self.entries.iter() {
            if !Self::matches(pattern.as_str(), sys_part) {
                continue;
            }
            if let Some(parameters) = parameters.as_object() {
                result.extend(parameters.clone());
            }
        }
        result
    }

    ///
    /// Returns `{pattern: value}` for every entry defining `name`.
    ///
    pub fn param(&self, name: &str) -> serde_json::Map<String, serde_json::Value> {
        self.entries
            .iter()
            .filter_map(|(pattern, parameters)| {
                parameters
                    .get(name)
                    .map(|value| (pattern.to_owned(), value.to_owned()))
            })
            .collect()
    }

    ///
    /// The number of CPUs per node of `sys_part`.
    ///
    pub fn num_cpus(&self, sys_part: &str) -> Option<u32> {
        self.get(sys_part)
            .get(Self::PARAMETER_NUM_CPUS)
            .and_then(serde_json::Value::as_u64)
            .and_then(|value| u32::try_from(value).ok())
    }

    ///
    /// Matches a shell-style pattern. Invalid patterns match nothing.
    ///
    fn matches(pattern: &str, sys_part: &str) -> bool {
        match glob::Pattern::new(pattern) {
            Ok(pattern) => pattern.matches(sys_part),
            Err(error) => {
                tracing::warn!(%pattern, %error, "Invalid system information pattern");
                false
            }
        }
    }
}

impl TryFrom<&Path> for SystemInfo {
    type Error = anyhow::Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        super::read_cjson(path)
    }
}
