use thiserror::Error;

use sld_model::{ClassificationMethod, FilterError, StyleError, SymbolizerKind};

/// Failure while turning a grouping into rules. No partial rule list is
/// ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleBuildError {
    #[error("invalid filter: {0}")]
    Filter(#[from] FilterError),
    #[error("bin {index} is inverted: min {min} > max {max}")]
    InvertedBin { index: usize, min: f64, max: f64 },
    #[error("value set {index} is empty")]
    EmptyValueSet { index: usize },
}

/// Failure reported by a classification engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("classification method {0} is not supported")]
    UnsupportedMethod(String),
    #[error("attribute '{attribute}' cannot be classified: {reason}")]
    UnsupportedAttribute { attribute: String, reason: String },
    #[error("dataset has no records")]
    EmptyDataset,
    #[error("{0}")]
    Failed(String),
}

/// Failure of a classification entry point.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("failed to build {method} classification")]
    Engine {
        method: ClassificationMethod,
        #[source]
        source: EngineError,
    },
    #[error("failed to build {method} rules")]
    Rules {
        method: ClassificationMethod,
        #[source]
        source: RuleBuildError,
    },
    #[error("too many intervals: {count} (limit {limit})")]
    TooManyIntervals { count: usize, limit: usize },
}

impl ClassificationError {
    pub fn method(&self) -> ClassificationMethod {
        match self {
            ClassificationError::Engine { method, .. }
            | ClassificationError::Rules { method, .. } => *method,
            ClassificationError::TooManyIntervals { .. } => ClassificationMethod::UniqueInterval,
        }
    }
}

/// Failure reported by a color ramp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RampError {
    #[error("color ramp needs at least one anchor color")]
    NoAnchors,
    #[error("color ramp cannot produce {requested} classes (max {max})")]
    TooManyClasses { requested: usize, max: usize },
}

/// Failure of a styling call. Rules styled before the failure keep their
/// symbolizers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StylingError {
    #[error("failed to build {kind} symbolizer")]
    Style {
        kind: SymbolizerKind,
        #[source]
        source: StyleError,
    },
    #[error("failed to prepare color ramp for {kind} symbolizer")]
    Ramp {
        kind: SymbolizerKind,
        #[source]
        source: RampError,
    },
}
