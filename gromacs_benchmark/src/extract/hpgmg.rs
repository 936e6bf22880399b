//!
//! HPGMG-FV output.
//!

use std::sync::OnceLock;

use regex::Regex;

/// The marker printed in the output banner.
pub const SANITY_MARKER: &str = "HPGMG-FV Benchmark";

///
/// The `DOF/s` pattern.
///
fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"DOF/s=(\S+)\s+.*").expect("Always valid"))
}

///
/// Returns the `DOF/s` values of the solver levels in output order.
///
/// The first value is level `l_0`, the finest grid.
///
pub fn dofs(stdout: &str) -> Vec<f64> {
    pattern()
        .captures_iter(stdout)
        .filter_map(|captures| captures.get(1))
        .filter_map(|value| value.as_str().parse::<f64>().ok())
        .collect()
}
