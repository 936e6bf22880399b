//!
//! The performance log analyzer library.
//!

pub mod config;
pub mod group;
pub mod html;
pub mod injection;
pub mod logging;
pub mod network;
pub mod output;
pub mod perflog;
pub mod plot;
pub mod table;
pub mod timeseries;

pub use crate::config::read_cjson;
pub use crate::config::PlotsConfig;
pub use crate::config::SystemInfo;
pub use crate::config::SPACK_ENVIRONMENT_VARIABLE;
pub use crate::group::error::Error as GroupError;
pub use crate::group::strategy::Strategy as GroupStrategy;
pub use crate::group::Group;
pub use crate::html::error::Error as HtmlError;
pub use crate::html::HtmlFile;
pub use crate::injection::inject_all;
pub use crate::injection::PlotDefinition;
pub use crate::network::config::Config as NetworkConfig;
pub use crate::network::error::Error as NetworkError;
pub use crate::network::Network;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::perflog::error::Error as PerflogError;
pub use crate::perflog::metadata::Metadata;
pub use crate::perflog::record::value::Value;
pub use crate::perflog::record::Record;
pub use crate::perflog::Entry;
pub use crate::perflog::LogFile;
pub use crate::plot::kind::PlotKind;
pub use crate::plot::Components as PlotComponents;
pub use crate::plot::Plot;
pub use crate::table::Table;
pub use crate::timeseries::cache::Cache as TimeSeriesCache;
pub use crate::timeseries::error::Error as TimeSeriesError;
pub use crate::timeseries::Series;
