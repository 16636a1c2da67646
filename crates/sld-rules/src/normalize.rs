//! Attribute access with optional numeric coercion.
//!
//! Some stores keep integral attributes as text. Comparing those as text
//! orders `"10"` before `"9"`, so ranged comparisons wrap the access in a
//! `parseDouble` call when the caller asks for normalization.

use sld_model::{AttributeType, Expression};

/// Wraps `property` in `parseDouble` when `normalize` is set and the
/// attribute is integral; returns it unchanged otherwise.
pub fn normalize_property(
    property: Expression,
    attribute_type: AttributeType,
    normalize: bool,
) -> Expression {
    if normalize && attribute_type.is_integral() {
        Expression::parse_double(property)
    } else {
        property
    }
}

/// Expression every comparison of a ranged rule set reads `attribute` through.
pub fn attribute_expression(
    attribute: &str,
    attribute_type: AttributeType,
    normalize: bool,
) -> Expression {
    normalize_property(Expression::property(attribute), attribute_type, normalize)
}
