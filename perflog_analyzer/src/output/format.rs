//!
//! Output table format.
//!

///
/// Output table format.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Format {
    #[default]
    /// JSON format mirroring the table model.
    Json,
    /// CSV format.
    Csv,
    /// Excel spreadsheet format.
    Xlsx,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown table format `{string}`. Supported formats: {}",
                [Self::Json, Self::Csv, Self::Xlsx]
                    .iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
