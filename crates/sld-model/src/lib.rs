//! Data model for classified style rules.

pub mod error;
pub mod filter;
pub mod grouping;
pub mod literal;
pub mod options;
pub mod rule;
pub mod style;

pub use error::{FilterError, ParseColorError, StyleError};
pub use filter::{ComparisonOperator, Expression, Filter};
pub use grouping::{ClassificationMethod, Grouping, RangeBin};
pub use literal::{AttributeType, Literal};
pub use options::StyleOptions;
pub use rule::Rule;
pub use style::{Color, Fill, Graphic, Mark, MarkShape, Stroke, Symbolizer, SymbolizerKind};
