//!
//! Performance extraction from application outputs.
//!

pub mod error;
pub mod gromacs;
pub mod hpgmg;
pub mod osu;
pub mod time;
pub mod wrf;

pub use self::error::Error;

#[cfg(test)]
mod tests;
