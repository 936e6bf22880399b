//!
//! XLSX output format for the last-performance table.
//!

pub mod worksheet;

use crate::table::Table;

use self::worksheet::Worksheet;

///
/// XLSX output format for the last-performance table.
///
pub struct Xlsx {
    /// The single worksheet named after the metric.
    pub worksheet: Worksheet,
}

impl Xlsx {
    /// The worksheet name length limit.
    const WORKSHEET_NAME_LIMIT: usize = 31;

    ///
    /// Returns the final workbook.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.worksheet.into_inner());
        workbook
    }

    ///
    /// Makes a valid worksheet name out of a metric name.
    ///
    fn worksheet_name(metric: &str) -> String {
        let name: String = metric
            .chars()
            .map(|character| match character {
                '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
                character => character,
            })
            .take(Self::WORKSHEET_NAME_LIMIT)
            .collect();
        if name.is_empty() {
            "Table".to_owned()
        } else {
            name
        }
    }
}

impl TryFrom<Table> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(table: Table) -> Result<Self, Self::Error> {
        let mut worksheet = Worksheet::new(
            Self::worksheet_name(table.metric.as_str()).as_str(),
            table.index.as_str(),
            table.columns.as_slice(),
        )?;
        for row in table.rows.iter() {
            worksheet.write_row(row.index.to_string().as_str(), row.cells.as_slice())?;
        }
        Ok(Self { worksheet })
    }
}
