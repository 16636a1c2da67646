//! Rules for explicit (categorical) groupings.

use tracing::debug;

use sld_model::{Expression, Filter, Literal, Rule};

use crate::error::RuleBuildError;

/// One rule per value-set: `attr = v1 OR attr = v2 ...`, titled `v1 OR v2`.
///
/// The filter is assembled as a tree, so values containing quotes or the
/// word `OR` are compared verbatim.
pub fn explicit_rules(bins: &[Vec<Literal>], attribute: &str) -> Result<Vec<Rule>, RuleBuildError> {
    let attr = Expression::property(attribute);
    let mut rules = Vec::with_capacity(bins.len());
    for (index, values) in bins.iter().enumerate() {
        if values.is_empty() {
            return Err(RuleBuildError::EmptyValueSet { index });
        }
        let mut terms = Vec::with_capacity(values.len());
        let mut labels = Vec::with_capacity(values.len());
        for value in values {
            if let Literal::Float(number) = value {
                Literal::number(*number)?;
            }
            terms.push(Filter::equals(attr.clone(), Expression::Literal(value.clone())));
            labels.push(value.to_string());
        }
        rules.push(Rule::new(labels.join(" OR "), Filter::any(terms)?));
    }
    debug!(attribute, rules = rules.len(), "built explicit rules");
    Ok(rules)
}
