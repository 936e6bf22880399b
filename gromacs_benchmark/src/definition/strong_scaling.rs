//!
//! The strong scaling parameter space.
//!

use crate::resources::error::Error;
use crate::resources::Resources;

///
/// A fixed problem swept over increasing total core counts.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StrongScaling {
    /// The total core counts, one run each.
    pub core_counts: Vec<u32>,
    /// The OpenMP threads per MPI task.
    pub omp_threads: u32,
}

impl StrongScaling {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(core_counts: Vec<u32>, omp_threads: u32) -> Self {
        Self {
            core_counts,
            omp_threads,
        }
    }

    ///
    /// Resolves the resources of every run.
    ///
    pub fn resources(&self, cpus_per_node: Option<u32>) -> Result<Vec<Resources>, Error> {
        self.core_counts
            .iter()
            .map(|cores| Resources::resolve(*cores, self.omp_threads, cpus_per_node))
            .collect()
    }
}

impl Default for StrongScaling {
    fn default() -> Self {
        Self::new(
            (2..=6).map(|index| 4 * index).collect(),
            Resources::DEFAULT_OMP_THREADS,
        )
    }
}
