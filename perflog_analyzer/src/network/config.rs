//!
//! Network configuration.
//!

use super::name::Name;

///
/// The categories of the network and their members.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// The clusters, each with a perflog directory.
    pub clusters: Vec<Name>,
    /// The applications recognized in test directory names.
    pub apps: Vec<Name>,
    /// The compilers recognized in environment directory names.
    pub compilers: Vec<Name>,
    /// The MPI implementations recognized in environment directory names.
    pub mpi: Vec<Name>,
}

impl Config {
    ///
    /// Returns the categories with their members in output order.
    ///
    pub fn categories(&self) -> [(&'static str, &[Name]); 4] {
        [
            ("clusters", self.clusters.as_slice()),
            ("apps", self.apps.as_slice()),
            ("compilers", self.compilers.as_slice()),
            ("mpi", self.mpi.as_slice()),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clusters: vec![Name::new("alaska"), Name::new("csd3")],
            apps: vec![Name::new("gromacs"), Name::new("imb")],
            compilers: vec![Name::new("gcc9")],
            mpi: vec![
                Name::new("impi"),
                Name::with_aliases("ompi", &["openmpi", "omp"]),
            ],
        }
    }
}
