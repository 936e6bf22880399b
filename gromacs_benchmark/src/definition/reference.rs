//!
//! A performance reference value.
//!

///
/// A performance reference with optional fractional bounds.
///
/// The bounds are relative to the value, e.g. `lower = -0.1` accepts values down to 90% of it.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reference {
    /// The reference value.
    pub value: f64,
    /// The lower fractional bound, unbounded if absent.
    pub lower: Option<f64>,
    /// The upper fractional bound, unbounded if absent.
    pub upper: Option<f64>,
    /// The units.
    pub unit: String,
}

impl Reference {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(value: f64, lower: Option<f64>, upper: Option<f64>, unit: &str) -> Self {
        Self {
            value,
            lower,
            upper,
            unit: unit.to_owned(),
        }
    }

    ///
    /// Whether `value` lies within the bounds.
    ///
    pub fn check(&self, value: f64) -> bool {
        let above = self
            .lower
            .map_or(true, |lower| value >= self.value * (1.0 + lower));
        let below = self
            .upper
            .map_or(true, |upper| value <= self.value * (1.0 + upper));
        above && below
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bound = |bound: Option<f64>| bound.map_or_else(|| "null".to_owned(), |bound| bound.to_string());
        write!(
            f,
            "{} (l={}, u={})",
            self.value,
            bound(self.lower),
            bound(self.upper)
        )
    }
}
