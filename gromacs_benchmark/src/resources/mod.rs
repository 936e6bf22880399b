//!
//! MPI task, OpenMP thread, and node counts of a benchmark run.
//!

pub mod error;

use std::collections::BTreeMap;

use self::error::Error;

///
/// The resolved resources of a run requesting a total number of cores.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resources {
    /// The requested number of cores.
    pub total_cores: u32,
    /// The OpenMP threads per MPI task, never above `total_cores`.
    pub omp_threads: u32,
    /// The number of MPI tasks, at least 1.
    pub mpi_tasks: u32,
    /// The number of nodes.
    pub nodes: u32,
    /// The number of MPI tasks per node.
    pub tasks_per_node: u32,
}

impl Resources {
    /// The default number of OpenMP threads per MPI task.
    pub const DEFAULT_OMP_THREADS: u32 = 4;

    /// The OpenMP thread count environment variable.
    pub const OMP_NUM_THREADS: &'static str = "OMP_NUM_THREADS";

    ///
    /// Resolves the resources of a run.
    ///
    /// If the per-node CPU count is unknown, the run is placed on a single node.
    ///
    pub fn resolve(
        total_cores: u32,
        omp_threads: u32,
        cpus_per_node: Option<u32>,
    ) -> Result<Self, Error> {
        if total_cores == 0 {
            return Err(Error::ZeroCores);
        }
        if omp_threads == 0 {
            return Err(Error::ZeroThreads);
        }

        let omp_threads = if total_cores < omp_threads {
            tracing::warn!(
                total_cores,
                omp_threads,
                "Had fewer total number of cores than the number of OpenMP threads, using {total_cores} OpenMP threads"
            );
            total_cores
        } else {
            omp_threads
        };
        let mpi_tasks = (total_cores / omp_threads).max(1);

        let nodes = match cpus_per_node {
            Some(cpus_per_node) if cpus_per_node > 0 => mpi_tasks.div_ceil(cpus_per_node),
            _ => {
                tracing::warn!("Failed to determine the number of nodes required, defaulting to 1");
                1
            }
        };
        let tasks_per_node = mpi_tasks.div_ceil(nodes);

        Ok(Self {
            total_cores,
            omp_threads,
            mpi_tasks,
            nodes,
            tasks_per_node,
        })
    }

    ///
    /// The CPUs per MPI task.
    ///
    pub fn cpus_per_task(&self) -> u32 {
        self.omp_threads
    }

    ///
    /// The MPI slots the scheduler must provide.
    ///
    pub fn num_slots(&self) -> u32 {
        self.mpi_tasks * self.cpus_per_task()
    }

    ///
    /// The environment variables of the run.
    ///
    pub fn environment(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(
            Self::OMP_NUM_THREADS.to_owned(),
            self.cpus_per_task().to_string(),
        )])
    }

    ///
    /// The perflog context fields describing the run.
    ///
    pub fn context(&self) -> [(&'static str, u32); 5] {
        [
            ("num_total_cores", self.total_cores),
            ("num_omp_threads", self.omp_threads),
            ("num_mpi_tasks", self.mpi_tasks),
            ("num_mpi_tasks_per_node", self.tasks_per_node),
            ("num_nodes", self.nodes),
        ]
    }
}

#[cfg(test)]
mod tests;
