use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

/// A constant value compared against a record attribute.
///
/// Deserializes untagged so that grouping catalogs can carry plain JSON
/// scalars (`true`, `3`, `2.5`, `"forest"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Literal {
    /// Build a numeric literal, rejecting NaN and infinities.
    pub fn number(value: f64) -> Result<Self, FilterError> {
        if value.is_finite() {
            Ok(Literal::Float(value))
        } else {
            Err(FilterError::NonFiniteLiteral(value))
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Literal::Text(value.into())
    }
}

/// Renders the bare value: `10.0` prints as `10`, text is unquoted.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Boolean(value) => write!(f, "{value}"),
            Literal::Integer(value) => write!(f, "{value}"),
            Literal::Float(value) => write!(f, "{value}"),
            Literal::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Text(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

/// Declared storage type of a record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    Byte,
    Short,
    Integer,
    Long,
    BigInteger,
    Float,
    Double,
    Decimal,
    Text,
    Boolean,
    Date,
    Timestamp,
    Geometry,
}

impl AttributeType {
    /// True for integral kinds, wide integers included.
    pub fn is_integral(&self) -> bool {
        matches!(
            self,
            AttributeType::Byte
                | AttributeType::Short
                | AttributeType::Integer
                | AttributeType::Long
                | AttributeType::BigInteger
        )
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integral()
            || matches!(
                self,
                AttributeType::Float | AttributeType::Double | AttributeType::Decimal
            )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Byte => "byte",
            AttributeType::Short => "short",
            AttributeType::Integer => "integer",
            AttributeType::Long => "long",
            AttributeType::BigInteger => "big_integer",
            AttributeType::Float => "float",
            AttributeType::Double => "double",
            AttributeType::Decimal => "decimal",
            AttributeType::Text => "text",
            AttributeType::Boolean => "boolean",
            AttributeType::Date => "date",
            AttributeType::Timestamp => "timestamp",
            AttributeType::Geometry => "geometry",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = String;

    /// Case-insensitive, accepts the usual aliases (`int`, `string`, `bigint`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "byte" | "tinyint" => Ok(AttributeType::Byte),
            "short" | "smallint" => Ok(AttributeType::Short),
            "integer" | "int" => Ok(AttributeType::Integer),
            "long" | "int64" => Ok(AttributeType::Long),
            "big_integer" | "biginteger" | "bigint" => Ok(AttributeType::BigInteger),
            "float" | "real" => Ok(AttributeType::Float),
            "double" | "number" => Ok(AttributeType::Double),
            "decimal" | "numeric" | "big_decimal" => Ok(AttributeType::Decimal),
            "text" | "string" | "varchar" => Ok(AttributeType::Text),
            "boolean" | "bool" => Ok(AttributeType::Boolean),
            "date" => Ok(AttributeType::Date),
            "timestamp" | "datetime" => Ok(AttributeType::Timestamp),
            "geometry" | "geom" => Ok(AttributeType::Geometry),
            _ => Err(format!("Unknown attribute type: {}", s)),
        }
    }
}
