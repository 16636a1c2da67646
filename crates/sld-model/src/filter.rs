//! Structured predicate tree over record attributes.
//!
//! Filters are built directly from typed parts and are never re-parsed from
//! text, so attribute values may contain quotes, commas or keywords without
//! changing the meaning of the predicate. The [`fmt::Display`] output is a
//! CQL-like rendering intended for logs and previews; evaluation is left to
//! whatever renderer consumes the rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FilterError;
use crate::literal::Literal;

/// Value-producing side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expression {
    /// Reads the named attribute of the record.
    Property(String),
    Literal(Literal),
    /// Parses the textual form of the inner expression as a double.
    ParseDouble(Box<Expression>),
}

impl Expression {
    pub fn property(name: impl Into<String>) -> Self {
        Expression::Property(name.into())
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Expression::Literal(value.into())
    }

    /// Numeric literal expression; fails for NaN and infinities.
    pub fn number(value: f64) -> Result<Self, FilterError> {
        Literal::number(value).map(Expression::Literal)
    }

    pub fn parse_double(inner: Expression) -> Self {
        Expression::ParseDouble(Box::new(inner))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Property(name) => write_identifier(f, name),
            Expression::Literal(Literal::Text(value)) => {
                write!(f, "'{}'", value.replace('\'', "''"))
            }
            Expression::Literal(Literal::Boolean(value)) => {
                f.write_str(if *value { "TRUE" } else { "FALSE" })
            }
            Expression::Literal(value) => write!(f, "{value}"),
            Expression::ParseDouble(inner) => write!(f, "parseDouble({inner})"),
        }
    }
}

fn write_identifier(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        f.write_str(name)
    } else {
        write!(f, "\"{}\"", name.replace('"', "\"\""))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    Equal,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl ComparisonOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => "<=",
        }
    }
}

/// Boolean predicate over a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Matches every record.
    Include,
    Compare {
        op: ComparisonOperator,
        left: Expression,
        right: Expression,
    },
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn compare(op: ComparisonOperator, left: Expression, right: Expression) -> Self {
        Filter::Compare { op, left, right }
    }

    pub fn equals(left: Expression, right: Expression) -> Self {
        Self::compare(ComparisonOperator::Equal, left, right)
    }

    pub fn greater(left: Expression, right: Expression) -> Self {
        Self::compare(ComparisonOperator::Greater, left, right)
    }

    pub fn greater_or_equal(left: Expression, right: Expression) -> Self {
        Self::compare(ComparisonOperator::GreaterOrEqual, left, right)
    }

    pub fn less(left: Expression, right: Expression) -> Self {
        Self::compare(ComparisonOperator::Less, left, right)
    }

    pub fn less_or_equal(left: Expression, right: Expression) -> Self {
        Self::compare(ComparisonOperator::LessOrEqual, left, right)
    }

    /// Conjunction of `filters`. A single operand collapses to itself.
    pub fn all(filters: Vec<Filter>) -> Result<Self, FilterError> {
        junction(filters, "AND", Filter::And)
    }

    /// Disjunction of `filters`. A single operand collapses to itself.
    pub fn any(filters: Vec<Filter>) -> Result<Self, FilterError> {
        junction(filters, "OR", Filter::Or)
    }

    fn is_junction(&self) -> bool {
        matches!(self, Filter::And(_) | Filter::Or(_))
    }
}

fn junction(
    mut filters: Vec<Filter>,
    name: &'static str,
    build: fn(Vec<Filter>) -> Filter,
) -> Result<Filter, FilterError> {
    match filters.len() {
        0 => Err(FilterError::EmptyJunction(name)),
        1 => Ok(filters.remove(0)),
        _ => Ok(build(filters)),
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Include => f.write_str("INCLUDE"),
            Filter::Compare { op, left, right } => {
                write!(f, "{left} {} {right}", op.symbol())
            }
            Filter::And(operands) => write_junction(f, operands, " AND "),
            Filter::Or(operands) => write_junction(f, operands, " OR "),
        }
    }
}

fn write_junction(f: &mut fmt::Formatter<'_>, operands: &[Filter], separator: &str) -> fmt::Result {
    for (index, operand) in operands.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        if operand.is_junction() {
            write!(f, "({operand})")?;
        } else {
            write!(f, "{operand}")?;
        }
    }
    Ok(())
}
