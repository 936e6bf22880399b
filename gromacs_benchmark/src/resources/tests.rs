//!
//! Tests for the resource resolution.
//!

use super::error::Error;
use super::Resources;

#[test]
fn resolves_tasks_and_nodes() {
    let resources = Resources::resolve(16, 4, Some(2)).expect("Valid");

    assert_eq!(
        resources,
        Resources {
            total_cores: 16,
            omp_threads: 4,
            mpi_tasks: 4,
            nodes: 2,
            tasks_per_node: 2,
        }
    );
    assert_eq!(resources.num_slots(), 16);
    assert_eq!(resources.environment()["OMP_NUM_THREADS"], "4");
}

#[test]
fn clamps_threads_to_cores() {
    let resources = Resources::resolve(2, 4, None).expect("Valid");

    assert_eq!(resources.omp_threads, 2);
    assert_eq!(resources.mpi_tasks, 1);
    assert_eq!(resources.nodes, 1);
    assert_eq!(resources.tasks_per_node, 1);
    assert_eq!(resources.cpus_per_task(), 2);
}

#[test]
fn unknown_cpus_per_node_defaults_to_one_node() {
    assert_eq!(Resources::resolve(40, 4, None).expect("Valid").nodes, 1);
    assert_eq!(Resources::resolve(40, 4, Some(0)).expect("Valid").nodes, 1);
}

#[test]
fn invariants_hold_over_a_grid() {
    for total_cores in 1..=64 {
        for omp_threads in 1..=8 {
            for cpus_per_node in [None, Some(1), Some(3), Some(16)] {
                let resources =
                    Resources::resolve(total_cores, omp_threads, cpus_per_node).expect("Valid");

                assert!(resources.mpi_tasks >= 1);
                assert!(resources.omp_threads <= total_cores);
                assert!(resources.nodes >= 1);
                assert!(resources.tasks_per_node * resources.nodes >= resources.mpi_tasks);
                assert_eq!(
                    resources.mpi_tasks,
                    (total_cores / omp_threads.min(total_cores)).max(1)
                );
                if let Some(cpus_per_node) = cpus_per_node {
                    assert_eq!(resources.nodes, resources.mpi_tasks.div_ceil(cpus_per_node));
                }
            }
        }
    }
}

#[test]
fn rejects_zero_counts() {
    assert_eq!(Resources::resolve(0, 4, None), Err(Error::ZeroCores));
    assert_eq!(Resources::resolve(4, 0, None), Err(Error::ZeroThreads));
}

#[test]
fn context_fields() {
    let resources = Resources::resolve(8, 4, Some(56)).expect("Valid");

    assert_eq!(
        resources.context(),
        [
            ("num_total_cores", 8),
            ("num_omp_threads", 4),
            ("num_mpi_tasks", 2),
            ("num_mpi_tasks_per_node", 2),
            ("num_nodes", 1),
        ]
    );
}
