//!
//! GROMACS `mdrun` output.
//!

/// The marker of the performance summary line.
pub const PERFORMANCE_MARKER: &str = "Performance:";

/// The marker printed at the end of every successful run.
pub const SANITY_MARKER: &str = "GROMACS reminds you";

///
/// Returns the ns/day rate from the first `Performance:` line with exactly three fields.
///
/// The line reads `Performance:  <ns/day>  <hour/ns>`.
///
pub fn performance<S: AsRef<str>>(stderr: &[S]) -> Option<f64> {
    stderr
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| line.contains(PERFORMANCE_MARKER))
        .map(|line| line.split_whitespace().collect::<Vec<&str>>())
        .find(|fields| fields.len() == 3)
        .and_then(|fields| fields[1].parse::<f64>().ok())
}

///
/// Whether the run reached its closing remark.
///
pub fn passed_sanity<S: AsRef<str>>(stderr: &[S]) -> bool {
    stderr
        .iter()
        .any(|line| line.as_ref().contains(SANITY_MARKER))
}
