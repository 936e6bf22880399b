//!
//! The benchmark definition tests.
//!

use std::collections::BTreeMap;

use crate::resources::Resources;

use super::error::Error;
use super::reference::Reference;
use super::strong_scaling::StrongScaling;
use super::Performance;
use super::Stream;

#[test]
fn reference_unbounded() {
    let reference = Reference::new(1.0, None, None, "ns/day");
    assert!(reference.check(0.0));
    assert!(reference.check(1e9));
}

#[test]
fn reference_bounds_are_fractional() {
    let reference = Reference::new(1e8, Some(-0.9), Some(0.6), "DOF/s");
    assert!(reference.check(1e7 + 1.0));
    assert!(reference.check(1.6e8 - 1.0));
    assert!(!reference.check(0.9e7));
    assert!(!reference.check(1.7e8));
}

#[test]
fn reference_single_bound() {
    let reference = Reference::new(10.0, Some(-0.5), None, "s");
    assert!(!reference.check(4.0));
    assert!(reference.check(5.0));
    assert!(reference.check(1000.0));
}

#[test]
fn reference_display() {
    assert_eq!(
        Reference::new(1.0, None, Some(0.5), "ns/day").to_string(),
        "1 (l=null, u=0.5)"
    );
}

#[test]
fn strong_scaling_default_core_counts() {
    let scaling = StrongScaling::default();
    assert_eq!(scaling.core_counts, vec![8, 12, 16, 20, 24]);
    assert_eq!(scaling.omp_threads, 4);
}

#[test]
fn strong_scaling_resources() {
    let resources = StrongScaling::default()
        .resources(Some(4))
        .expect("Resolved");

    let tasks: Vec<u32> = resources.iter().map(|resources| resources.mpi_tasks).collect();
    let nodes: Vec<u32> = resources.iter().map(|resources| resources.nodes).collect();
    assert_eq!(tasks, vec![2, 3, 4, 5, 6]);
    assert_eq!(nodes, vec![1, 1, 1, 2, 2]);
}

#[test]
fn gromacs_definition() {
    let definition = super::gromacs();
    let resources = Resources::resolve(16, 4, None).expect("Resolved");

    assert_eq!(definition.specs, vec!["gromacs@2019%gcc@9.3.0^openmpi@4.1.1"]);
    assert!(definition.exclusive);
    assert_eq!(definition.readonly_files, vec!["benchmark.tpr"]);
    assert_eq!(definition.time_limit_seconds().expect("Valid"), 1800);
    assert_eq!(
        definition.mpirun_arguments(&resources),
        vec!["-np", "4", "gmx_mpi", "mdrun", "-deffnm", "benchmark"]
    );
    assert_eq!(
        definition.environment(&resources),
        BTreeMap::from([("OMP_NUM_THREADS".to_owned(), "4".to_owned())])
    );
}

#[test]
fn gromacs_extraction_and_sanity() {
    let definition = super::gromacs();
    let stderr = "\
                 (ns/day)    (hour/ns)
Performance:       23.287        1.031

GROMACS reminds you: \"Uh-oh\" (Tinky Winky)
";

    assert!(definition.passed_sanity("", stderr).expect("Valid"));
    assert!(!definition.passed_sanity(stderr, "").expect("Valid"));

    let values = definition.extract("", stderr).expect("Extracted");
    assert_eq!(values, BTreeMap::from([("Rate".to_owned(), 23.287)]));
    assert_eq!(
        definition.check(&values),
        BTreeMap::from([("Rate".to_owned(), true)])
    );
}

#[test]
fn gromacs_extraction_missing() {
    match super::gromacs().extract("", "Fatal error") {
        Err(Error::PerformanceMissing { variable, stream }) => {
            assert_eq!(variable, "Rate");
            assert_eq!(stream, "stderr");
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn hpgmg_definition() {
    let definition = super::hpgmg();
    let stdout = "\
HPGMG-FV Benchmark
  h=3.9e-03  DOF=1.6e+07  time=0.1  DOF/s=1.598e+08  MPI=4  OMP=4
  h=7.8e-03  DOF=2.0e+06  time=0.02  DOF/s=8.220e+07  MPI=4  OMP=4
  h=1.5e-02  DOF=2.6e+05  time=0.01  DOF/s=5.000e+06  MPI=4  OMP=4
";

    assert!(definition.passed_sanity(stdout, "").expect("Valid"));
    let values = definition.extract(stdout, "").expect("Extracted");
    assert_eq!(values.get("l_0"), Some(&1.598e8));
    assert_eq!(values.get("l_1"), Some(&8.22e7));
    assert_eq!(values.get("l_2"), Some(&5e6));

    let checks = definition.check(&values);
    assert_eq!(checks.get("l_0"), Some(&true));
    assert_eq!(checks.get("l_2"), Some(&false));

    let resources = definition.resources.expect("Fixed resources");
    assert_eq!(resources.num_slots(), 16);
    let environment = definition.environment(&resources);
    assert_eq!(environment.get("OMP_PLACES").map(String::as_str), Some("cores"));
    assert_eq!(environment.get("OMP_NUM_THREADS").map(String::as_str), Some("4"));
}

#[test]
fn non_numeric_performance() {
    let mut definition = super::gromacs();
    definition.performance.insert(
        "Rate".to_owned(),
        Performance::new(Stream::Stdout, r"rate: (\w+)", 0),
    );
    assert!(matches!(
        definition.extract("rate: fast", ""),
        Err(Error::NonNumeric { .. })
    ));
}

#[test]
fn invalid_pattern() {
    let mut definition = super::gromacs();
    definition.sanity.pattern = "(".to_owned();
    assert!(matches!(
        definition.passed_sanity("", ""),
        Err(Error::Pattern { .. })
    ));
}

#[test]
fn validity_by_system_and_environment() {
    let mut definition = super::gromacs();
    assert!(definition.is_valid_for("archer2", "gnu"));

    definition.valid_systems = vec!["csd3:*".to_owned()];
    definition.valid_environments = vec!["gnu".to_owned(), "intel".to_owned()];
    assert!(definition.is_valid_for("csd3:cclake", "intel"));
    assert!(!definition.is_valid_for("archer2:compute", "intel"));
    assert!(!definition.is_valid_for("csd3:cclake", "cray"));
}

#[test]
fn time_limits() {
    let mut definition = super::gromacs();
    for (raw, seconds) in [("90s", 90), ("2h", 7200), ("1d", 86400)] {
        definition.time_limit = raw.to_owned();
        assert_eq!(definition.time_limit_seconds().expect("Valid"), seconds);
    }
    for raw in ["", "m", "30", "30x", "-1m"] {
        definition.time_limit = raw.to_owned();
        assert!(definition.time_limit_seconds().is_err(), "{raw} accepted");
    }
}
