//!
//! The perflog network binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    perflog_analyzer::logging::init(arguments.verbose, arguments.quiet);

    let config = match arguments.config {
        Some(path) => perflog_analyzer::read_cjson(path.as_path())?,
        None => perflog_analyzer::NetworkConfig::default(),
    };
    let mut network = perflog_analyzer::Network::new(config);
    network.build(arguments.perflogs.as_path())?;
    network.save_json(arguments.output_path.as_path())?;

    if !arguments.quiet {
        println!(
            "       {} the network to `{}`",
            "Saved".bright_green().bold(),
            arguments.output_path.to_string_lossy(),
        );
    }
    Ok(())
}
