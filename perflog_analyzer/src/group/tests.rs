//!
//! Tests for log file grouping.
//!

use std::path::Path;

use crate::perflog::LogFile;

use super::error::Error;
use super::strategy::Strategy;
use super::Group;

fn log_file(path: &str, text: &str) -> LogFile {
    LogFile::parse(Path::new(path), text).expect("Valid log")
}

fn rate(cores: Option<u64>, value: f64) -> String {
    let context = cores
        .map(|cores| format!("num_total_cores={cores}"))
        .unwrap_or_default();
    format!("2021-07-01T10:00:00+00:00|reframe|info|Rate={value}|ns/day|ref|{context}\n")
}

fn keys(groups: &[Group]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|group| {
            group
                .files
                .iter()
                .map(|file| file.path.to_string_lossy().into_owned())
                .collect()
        })
        .collect()
}

#[test]
fn path_key_groups_parameter_variants() {
    let files = vec![
        log_file("a/run1/x.log", rate(Some(4), 1.0).as_str()),
        log_file("b/run1/x.log", rate(Some(4), 1.0).as_str()),
        log_file("a/run2/x.log", rate(Some(8), 2.0).as_str()),
    ];
    let groups = Group::from_files(files, Strategy::PathKey);

    assert_eq!(
        keys(&groups),
        vec![
            vec!["a/run1/x.log".to_owned(), "a/run2/x.log".to_owned()],
            vec!["b/run1/x.log".to_owned()],
        ]
    );
    assert_eq!(groups[0].key, "a/run");
    assert_eq!(groups[1].key, "b/run");
}

#[test]
fn path_key_keeps_compiler_versions_apart() {
    assert_eq!(
        Strategy::path_key("csd3/compute/gcc9/StrongScaling_16"),
        "csd3/compute/gcc9/StrongScaling"
    );
    assert_ne!(
        Strategy::path_key("csd3/compute/gcc9/StrongScaling_16"),
        Strategy::path_key("csd3/compute/gcc10/StrongScaling_16")
    );
}

#[test]
fn distance_counts_mismatches_and_length() {
    assert_eq!(Strategy::distance("a/run1", "a/run1"), 0);
    assert_eq!(Strategy::distance("a/run1", "a/run2"), 1);
    assert_eq!(Strategy::distance("a/run1", "a/run10"), 1);
    assert_eq!(Strategy::distance("abc", "xyz"), 3);
}

#[test]
fn distance_grouping_is_greedy() {
    let text = rate(Some(4), 1.0);
    let files = vec![
        log_file("alaska/gcc/Test_4/x.log", text.as_str()),
        log_file("alaska/gcc/Test_8/x.log", text.as_str()),
        log_file("csd3/impi/Test_4/x.log", text.as_str()),
        log_file("alaska/gcc/Test_16/x.log", text.as_str()),
    ];
    let groups = Group::from_files(files, Strategy::CharacterDistance { threshold: 3 });

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, "alaska/gcc/Test_4");
    assert_eq!(groups[0].files.len(), 3);
    assert_eq!(groups[1].files.len(), 1);
}

#[test]
fn distance_threshold_is_exclusive() {
    let text = rate(Some(4), 1.0);
    let files = vec![
        log_file("a/run1/x.log", text.as_str()),
        log_file("a/run2/x.log", text.as_str()),
    ];
    let groups = Group::from_files(files, Strategy::CharacterDistance { threshold: 1 });

    assert_eq!(groups.len(), 2);
}

#[test]
fn series_is_sorted_by_cores() {
    let files = vec![
        log_file("csd3/compute/gnu/Scaling_16/x.log", rate(Some(16), 30.0).as_str()),
        log_file("csd3/compute/gnu/Scaling_8/x.log", rate(None, 20.0).as_str()),
    ];
    let groups = Group::from_files(files, Strategy::PathKey);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label(), "csd3:compute gnu");
    assert_eq!(
        groups[0].series("Rate").expect("Valid series"),
        vec![(8, 20.0), (16, 30.0)]
    );
}

#[test]
fn series_requires_metric_in_every_member() {
    let files = vec![
        log_file("csd3/compute/gnu/Scaling_8/x.log", rate(Some(8), 20.0).as_str()),
        log_file(
            "csd3/compute/gnu/Scaling_16/x.log",
            "2021-07-01T10:00:00+00:00|reframe|info|Time=1|s|ref|num_total_cores=16\n",
        ),
    ];
    let groups = Group::from_files(files, Strategy::PathKey);
    let error = groups[0].series("Rate").expect_err("Metric missing");

    assert!(matches!(error, Error::MetricMissing { ref metric, .. } if metric == "Rate"));
}

#[test]
fn series_requires_core_count() {
    let files = vec![log_file("csd3/compute/gnu/Scaling/x.log", rate(None, 1.0).as_str())];
    let groups = Group::from_files(files, Strategy::PathKey);
    let error = groups[0].series("Rate").expect_err("No core count");

    assert!(matches!(error, Error::CoreCountMissing { .. }));
}

#[test]
fn strategy_from_str() {
    assert_eq!("path-key".parse::<Strategy>().expect("Valid"), Strategy::PathKey);
    assert_eq!(
        "distance:2".parse::<Strategy>().expect("Valid"),
        Strategy::CharacterDistance { threshold: 2 }
    );
    assert!("nearest".parse::<Strategy>().is_err());
}
