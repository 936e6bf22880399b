//!
//! A contextual value attached to a perflog record.
//!

///
/// A contextual value attached to a perflog record.
///
/// Tag values are converted to an integer, then to a float, and are kept as text otherwise.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An integer value, e.g. a core count.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// Anything else.
    Text(String),
}

impl Value {
    ///
    /// Returns the value as a non-negative integer, if it is one.
    ///
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => u64::try_from(*value).ok(),
            Self::Float(value) if value.fract() == 0.0 && *value >= 0.0 => Some(*value as u64),
            Self::Float(_) => None,
            Self::Text(_) => None,
        }
    }

    ///
    /// Returns the value as a float, if it is numeric.
    ///
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        if let Ok(value) = string.parse::<i64>() {
            return Self::Integer(value);
        }
        if let Ok(value) = string.parse::<f64>() {
            return Self::Float(value);
        }
        Self::Text(string.to_owned())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}
