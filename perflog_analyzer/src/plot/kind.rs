//!
//! Plot kind.
//!

///
/// Plot kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum PlotKind {
    /// One bar per perflog.
    Bar,
    /// Strong scaling lines, one per perflog group.
    StrongScaling,
    /// Smoothed relative performance over time.
    TimeSeries,
}

impl std::str::FromStr for PlotKind {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "line" | "strong-scaling" => Ok(Self::StrongScaling),
            "time-series" => Ok(Self::TimeSeries),
            string => anyhow::bail!(
                "Unsupported plot type `{string}`. Supported types: {}",
                [Self::Bar, Self::StrongScaling, Self::TimeSeries]
                    .iter()
                    .map(|kind| kind.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl TryFrom<String> for PlotKind {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for PlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bar => write!(f, "bar"),
            Self::StrongScaling => write!(f, "line"),
            Self::TimeSeries => write!(f, "time-series"),
        }
    }
}
