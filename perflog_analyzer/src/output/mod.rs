//!
//! Last-performance table output.
//!

pub mod csv;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::PathBuf;

use crate::table::Table;

use self::csv::Csv;
use self::format::Format;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// Serialized table ready to be written.
///
pub enum Output {
    /// A text file.
    SingleFile(String),
    /// An Excel workbook.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the table to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Table file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Table file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(Table, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((table, format): (Table, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Json => Json::from(table).into(),
            Format::Csv => Csv::from(table).into(),
            Format::Xlsx => Xlsx::try_from(table)?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
