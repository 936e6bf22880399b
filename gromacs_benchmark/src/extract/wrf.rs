//!
//! WRF `rsl.error` output.
//!

use std::sync::OnceLock;

use regex::Regex;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Timing for main: time \S+ on domain\s+\d+:\s+([\d.]+) elapsed seconds")
            .expect("Always valid")
    })
}

///
/// Returns the elapsed seconds of every main-loop step.
///
pub fn step_times(text: &str) -> Vec<f64> {
    text.lines()
        .filter_map(|line| pattern().captures(line))
        .filter_map(|captures| captures.get(1))
        .filter_map(|value| value.as_str().parse::<f64>().ok())
        .collect()
}
