//!
//! Serializing the table to JSON.
//!

use crate::table::Table;

///
/// The table serialized to JSON.
///
#[derive(Debug)]
pub struct Json {
    /// The JSON string.
    pub content: String,
}

impl From<Table> for Json {
    fn from(table: Table) -> Self {
        Self {
            content: serde_json::to_string_pretty(&table).expect("Always valid"),
        }
    }
}
