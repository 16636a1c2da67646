use thiserror::Error;

/// Errors raised while constructing filter expressions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("literal must be a finite number, got {0}")]
    NonFiniteLiteral(f64),
    #[error("logical {0} needs at least one operand")]
    EmptyJunction(&'static str),
}

/// Errors raised while constructing style descriptors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("stroke width must be a finite non-negative number, got {0}")]
    InvalidStrokeWidth(f64),
    #[error("marker size must be a positive number, got {0}")]
    InvalidMarkerSize(f64),
}

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #RRGGBB")]
pub struct ParseColorError(pub String);
