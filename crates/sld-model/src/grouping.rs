use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::literal::Literal;

/// One numeric class: values in `min..=max`, subject to the open/closed
/// edge rules applied when the bin becomes a rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBin {
    pub min: f64,
    pub max: f64,
}

impl RangeBin {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A bin holding a single distinct value.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }
}

/// Output of a classification engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Grouping {
    /// Ascending numeric bins.
    Ranged { bins: Vec<RangeBin> },
    /// Ordered categorical value-sets.
    Explicit { bins: Vec<Vec<Literal>> },
}

impl Grouping {
    pub fn len(&self) -> usize {
        match self {
            Grouping::Ranged { bins } => bins.len(),
            Grouping::Explicit { bins } => bins.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Grouping::Ranged { .. } => "ranged",
            Grouping::Explicit { .. } => "explicit",
        }
    }
}

/// Classification functions understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassificationMethod {
    Quantile,
    EqualInterval,
    UniqueInterval,
    Jenks,
    EqualArea,
}

impl ClassificationMethod {
    pub const ALL: [ClassificationMethod; 5] = [
        ClassificationMethod::Quantile,
        ClassificationMethod::EqualInterval,
        ClassificationMethod::UniqueInterval,
        ClassificationMethod::Jenks,
        ClassificationMethod::EqualArea,
    ];

    /// Engine function name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationMethod::Quantile => "Quantile",
            ClassificationMethod::EqualInterval => "EqualInterval",
            ClassificationMethod::UniqueInterval => "UniqueInterval",
            ClassificationMethod::Jenks => "Jenks",
            ClassificationMethod::EqualArea => "EqualArea",
        }
    }
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassificationMethod {
    type Err = String;

    /// Case-insensitive; ignores `-`, `_` and spaces (`equal-interval`, `EQUAL_AREA`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "quantile" => Ok(ClassificationMethod::Quantile),
            "equalinterval" => Ok(ClassificationMethod::EqualInterval),
            "uniqueinterval" | "unique" => Ok(ClassificationMethod::UniqueInterval),
            "jenks" | "naturalbreaks" => Ok(ClassificationMethod::Jenks),
            "equalarea" => Ok(ClassificationMethod::EqualArea),
            _ => Err(format!("Unknown classification method: {}", s)),
        }
    }
}
