//!
//! The perflog table binary.
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

    let table = perflog_analyzer::Table::tabulate(
        arguments.perflogs.as_path(),
        arguments.test.as_deref(),
        arguments.index.as_str(),
        arguments.metric.as_str(),
    )?;
    if table.rows.is_empty() {
        tracing::warn!(metric = %arguments.metric, "No perflog records to tabulate");
    }
    let rows = table.rows.len();

    let output: perflog_analyzer::Output = (table, arguments.output_format).try_into()?;
    output.write_to_file(arguments.output_path.clone())?;

    if !arguments.quiet {
        println!(
            "       {} {rows} rows to `{}`",
            "Saved".bright_green().bold(),
            arguments.output_path.to_string_lossy(),
        );
    }
    Ok(())
}
