//!
//! Log file grouping strategy.
//!

///
/// Log file grouping strategy.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Strategy {
    /// Groups by directory path with numeric parameter suffixes removed.
    /// The result does not depend on the input order.
    #[default]
    PathKey,
    /// Greedy single-link clustering: a file joins the first group whose representative
    /// directory differs by fewer than `threshold` characters.
    CharacterDistance {
        /// The exclusive distance bound.
        threshold: usize,
    },
}

impl Strategy {
    ///
    /// The number of differing aligned characters plus the length difference.
    ///
    pub fn distance(first: &str, second: &str) -> usize {
        let first: Vec<char> = first.chars().collect();
        let second: Vec<char> = second.chars().collect();
        let mismatches = first
            .iter()
            .zip(second.iter())
            .filter(|(a, b)| a != b)
            .count();
        mismatches + first.len().abs_diff(second.len())
    }

    ///
    /// Builds the order-independent grouping key of a directory path.
    ///
    /// The trailing numeric parameter suffix of the test directory, i.e. the last
    /// component, is removed, so `csd3/compute/gcc9/StrongScaling_16` becomes
    /// `csd3/compute/gcc9/StrongScaling`.
    ///
    pub fn path_key(directory: &str) -> String {
        match directory.rsplit_once('/') {
            Some((parent, test)) => format!("{parent}/{}", Self::strip_parameter(test)),
            None => Self::strip_parameter(directory).to_owned(),
        }
    }

    ///
    /// Removes a trailing numeric parameter and its separator.
    ///
    fn strip_parameter(name: &str) -> &str {
        name.trim_end_matches(|character: char| character.is_ascii_digit())
            .trim_end_matches(['_', '-'])
    }
}

impl std::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.to_lowercase();
        if string == "path-key" {
            return Ok(Self::PathKey);
        }
        if let Some(threshold) = string.strip_prefix("distance:") {
            let threshold = threshold.parse::<usize>().map_err(|error| {
                anyhow::anyhow!("Invalid grouping distance threshold `{threshold}`: {error}")
            })?;
            return Ok(Self::CharacterDistance { threshold });
        }
        anyhow::bail!(
            "Unknown grouping strategy `{string}`. Supported strategies: path-key, distance:<threshold>"
        )
    }
}

impl TryFrom<String> for Strategy {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PathKey => write!(f, "path-key"),
            Self::CharacterDistance { threshold } => write!(f, "distance:{threshold}"),
        }
    }
}
