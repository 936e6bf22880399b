//!
//! The standalone GROMACS benchmark runner library.
//!

pub mod benchmark;
pub mod definition;
pub mod extract;
pub mod process;
pub mod resources;
pub mod spack;
pub mod statistics;
pub mod suite;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::benchmark::GromacsBenchmark;
pub use crate::definition::reference::Reference;
pub use crate::definition::strong_scaling::StrongScaling;
pub use crate::definition::Definition;
pub use crate::process::Launcher;
pub use crate::process::Output as ProcessOutput;
pub use crate::process::Subprocess;
pub use crate::resources::error::Error as ResourcesError;
pub use crate::resources::Resources;
pub use crate::spack::error::Error as SpackError;
pub use crate::spack::Spack;
pub use crate::suite::Suite;
