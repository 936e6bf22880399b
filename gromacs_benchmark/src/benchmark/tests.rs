//!
//! The GROMACS benchmark run tests.
//!

use std::path::PathBuf;

use crate::resources::Resources;
use crate::spack::Spack;
use crate::testing::failure;
use crate::testing::success;
use crate::testing::FakeLauncher;

use super::GromacsBenchmark;

const SPEC: &str = "gromacs@2019%gcc@9.3.0^openmpi@4.1.1";

fn benchmark(total_cores: u32) -> GromacsBenchmark {
    GromacsBenchmark::new(
        SPEC,
        Resources::resolve(total_cores, 4, Some(128)).expect("Resolved"),
    )
}

fn gromacs_stderr() -> Vec<&'static str> {
    vec![
        "                 (ns/day)    (hour/ns)",
        "Performance:       11.504        2.086",
        "GROMACS reminds you: \"It's Not Your Fault\" (Robin Williams)",
    ]
}

#[test]
fn identity() {
    assert_eq!(
        benchmark(16).to_string(),
        "GROMACS_benchmark_gromacs@2019%gcc@9.3.0^openmpi@4.1.1_16"
    );
}

#[test]
fn run_launches_mpirun_with_threads() {
    let launcher = FakeLauncher::with_outputs(vec![Ok(success(vec![], gromacs_stderr()))]);
    let mut benchmark = benchmark(16);

    benchmark.run(&launcher).expect("Ran");

    let calls = launcher.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].command_line(),
        "mpirun -np 4 gmx_mpi mdrun -deffnm benchmark"
    );
    assert_eq!(
        calls[0].environment.get("OMP_NUM_THREADS").map(String::as_str),
        Some("4")
    );
    assert_eq!(benchmark.pid, Some(4242));
    assert!(benchmark.completed_at.is_some());
    assert_eq!(benchmark.performance(), Some(11.504));
    assert!(benchmark.passed_sanity());
}

#[test]
fn failed_run_keeps_output() {
    let launcher = FakeLauncher::with_outputs(vec![Ok(failure(vec!["Fatal error: no input"]))]);
    let mut benchmark = benchmark(8);

    benchmark.run(&launcher).expect("Ran");

    assert_eq!(
        benchmark.stderr,
        Some(vec!["Fatal error: no input".to_owned()])
    );
    assert_eq!(benchmark.performance(), None);
    assert!(!benchmark.passed_sanity());
}

#[test]
fn spawn_failure_propagates() {
    let launcher = FakeLauncher::with_outputs(vec![Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "mpirun",
    ))]);
    let mut benchmark = benchmark(8);

    assert!(benchmark.run(&launcher).is_err());
    assert_eq!(benchmark.stderr, None);
}

#[test]
fn performance_before_run() {
    let benchmark = benchmark(8);
    assert_eq!(benchmark.performance(), None);
    assert!(!benchmark.passed_sanity());
}

#[test]
fn install_without_spack_keeps_executable() {
    let launcher = FakeLauncher::default();
    let mut benchmark = benchmark(8);

    benchmark.install(None, &launcher).expect("Skipped");

    assert_eq!(benchmark.executable, "gmx_mpi");
    assert!(launcher.calls.borrow().is_empty());
}

#[test]
fn install_with_spack_locates_executable() {
    let launcher = FakeLauncher::with_outputs(vec![
        Ok(success(vec![], vec![])),
        Ok(success(vec![], vec![])),
        Ok(success(vec!["/opt/spack/gromacs-2019"], vec![])),
    ]);
    let spack = Spack::new(PathBuf::from("spack"));
    let mut benchmark = benchmark(8);

    benchmark.install(Some(&spack), &launcher).expect("Installed");

    assert_eq!(
        launcher.command_lines(),
        vec![
            format!("spack install {SPEC}"),
            format!("spack load {SPEC}"),
            format!("spack location -i {SPEC}"),
        ]
    );
    let expected = PathBuf::from("/opt/spack/gromacs-2019")
        .join("bin")
        .join("gmx_mpi");
    assert_eq!(PathBuf::from(benchmark.executable.as_str()), expected);
    assert_eq!(benchmark.arguments()[2], benchmark.executable);
}

#[test]
fn install_failure_propagates() {
    let launcher = FakeLauncher::with_outputs(vec![Ok(failure(vec!["==> Error"]))]);
    let spack = Spack::new(PathBuf::from("spack"));
    let mut benchmark = benchmark(8);

    assert!(benchmark.install(Some(&spack), &launcher).is_err());
    assert_eq!(launcher.calls.borrow().len(), 1);
}

#[test]
fn cache_round_trip() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let cache = directory.path().join("cache");
    let launcher = FakeLauncher::with_outputs(vec![Ok(success(vec!["log"], gromacs_stderr()))]);
    let mut original = benchmark(12);
    original.run(&launcher).expect("Ran");

    assert!(!original.cache_exists(cache.as_path()));
    original.save(cache.as_path()).expect("Saved");
    assert!(original.cache_exists(cache.as_path()));
    assert!(original
        .cache_path(cache.as_path())
        .to_string_lossy()
        .ends_with("GROMACS_benchmark_gromacs@2019%gcc@9.3.0^openmpi@4.1.1_12.bin"));

    let mut restored = benchmark(12);
    restored.load(cache.as_path()).expect("Loaded");
    assert_eq!(restored, original);
    assert_eq!(restored.performance(), Some(11.504));
}

#[test]
fn load_of_missing_cache_fails() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let mut benchmark = benchmark(12);
    assert!(benchmark.load(directory.path()).is_err());
}

#[test]
fn cache_path_replaces_separators() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let launcher = FakeLauncher::with_outputs(vec![Ok(success(vec![], gromacs_stderr()))]);
    let mut original = GromacsBenchmark::new(
        "gromacs/abcdef",
        Resources::resolve(8, 4, None).expect("Resolved"),
    );
    original.run(&launcher).expect("Ran");

    let path = original.cache_path(directory.path());
    assert_eq!(path.parent(), Some(directory.path()));
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("GROMACS_benchmark_gromacs_abcdef_8.bin")
    );

    original.save(directory.path()).expect("Saved");
    assert!(original.cache_exists(directory.path()));

    let mut restored = GromacsBenchmark::new(
        "gromacs/abcdef",
        Resources::resolve(8, 4, None).expect("Resolved"),
    );
    restored.load(directory.path()).expect("Loaded");
    assert_eq!(restored.performance(), Some(11.504));
}
