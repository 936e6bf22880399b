//!
//! The perflog plotter binary.
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

    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let config = perflog_analyzer::PlotsConfig::try_from(arguments.plots.as_path())?;
    let html = perflog_analyzer::HtmlFile::new(
        arguments.template.as_path(),
        arguments.output_root.as_path(),
    )?;
    let mut cache = perflog_analyzer::TimeSeriesCache::load_or_default(arguments.cache.as_path())?;

    perflog_analyzer::inject_all(
        config.definitions.as_slice(),
        &html,
        arguments.perflogs.as_path(),
        &mut cache,
    )?;
    cache.save(arguments.cache.as_path())?;

    if !arguments.quiet {
        println!(
            "    {} {} plots into `{}`",
            "Finished".bright_green().bold(),
            config.definitions.len(),
            html.output.to_string_lossy(),
        );
    }
    Ok(())
}
