//!
//! Serializing the table to CSV.
//!

use std::fmt::Write;

use crate::table::Table;

///
/// Serializes the table to CSV: the index column followed by one column per case.
/// Missing cells are left empty.
///
#[derive(Debug, Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl From<Table> for Csv {
    fn from(table: Table) -> Csv {
        let mut content =
            String::with_capacity((table.rows.len() + 1) * (table.columns.len() + 1) * 16);

        let header = std::iter::once(table.index.as_str())
            .chain(table.columns.iter().map(String::as_str))
            .map(|field| format!(r#""{field}""#))
            .collect::<Vec<String>>()
            .join(", ");
        writeln!(&mut content, "{header}").expect("Always valid");

        for row in table.rows.iter() {
            let cells = row
                .cells
                .iter()
                .map(|cell| cell.map(|value| value.to_string()).unwrap_or_default())
                .collect::<Vec<String>>();
            writeln!(
                &mut content,
                r#""{}", {}"#,
                row.index,
                cells.join(", ")
            )
            .expect("Always valid");
        }

        Self { content }
    }
}
