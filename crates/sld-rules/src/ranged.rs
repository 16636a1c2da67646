//! Rules for ranged (numeric) groupings.
//!
//! Every bin is closed on its upper edge. In open mode the first bin has no
//! lower bound and the last bin has no upper bound; in closed mode only the
//! first bin includes its lower edge, and bins repeating the previous upper
//! edge are collapsed.

use tracing::debug;

use sld_model::{AttributeType, Expression, Filter, RangeBin, Rule};

use crate::error::RuleBuildError;
use crate::normalize::attribute_expression;

/// Open-mode rules: `<= max(0)`, then `> min AND <= max` (or `= value` for a
/// degenerate middle bin), then `> min(N-1)`.
///
/// The last bin is always unbounded above, even when degenerate. A single
/// bin yields one rule matching every record.
pub fn open_ranged_rules(
    bins: &[RangeBin],
    attribute: &str,
    attribute_type: AttributeType,
    normalize: bool,
) -> Result<Vec<Rule>, RuleBuildError> {
    validate_bins(bins)?;
    let attr = attribute_expression(attribute, attribute_type, normalize);
    let (first, last) = match bins {
        [] => return Ok(Vec::new()),
        [only] => return Ok(vec![single_bin_rule(only)]),
        [first, .., last] => (first, last),
    };

    let mut rules = Vec::with_capacity(bins.len());
    rules.push(Rule::new(
        format!("<= {}", first.max),
        Filter::less_or_equal(attr.clone(), number(first.max)?),
    ));
    for bin in &bins[1..bins.len() - 1] {
        if bin.is_degenerate() {
            rules.push(equality_rule(&attr, bin.min)?);
        } else {
            rules.push(Rule::new(
                format!("> {} AND <= {}", bin.min, bin.max),
                Filter::all(vec![
                    Filter::greater(attr.clone(), number(bin.min)?),
                    Filter::less_or_equal(attr.clone(), number(bin.max)?),
                ])?,
            ));
        }
    }
    rules.push(Rule::new(
        format!("> {}", last.min),
        Filter::greater(attr, number(last.min)?),
    ));
    debug!(attribute, bins = bins.len(), rules = rules.len(), "built open ranged rules");
    Ok(rules)
}

/// Closed-mode rules: `>= min(0) AND <= max(0)`, then `> min AND <= max`.
///
/// A bin whose upper edge equals the previous bin's upper edge is skipped.
/// A degenerate bin becomes an equality test.
pub fn closed_ranged_rules(
    bins: &[RangeBin],
    attribute: &str,
    attribute_type: AttributeType,
    normalize: bool,
) -> Result<Vec<Rule>, RuleBuildError> {
    validate_bins(bins)?;
    let attr = attribute_expression(attribute, attribute_type, normalize);
    let mut rules = Vec::with_capacity(bins.len());
    for (index, bin) in bins.iter().enumerate() {
        if index > 0 && bin.max == bins[index - 1].max {
            debug!(attribute, index, max = bin.max, "skipping bin with duplicate upper edge");
            continue;
        }
        if bin.is_degenerate() {
            rules.push(equality_rule(&attr, bin.min)?);
            continue;
        }
        let (lower, lower_symbol) = if index == 0 {
            (Filter::greater_or_equal(attr.clone(), number(bin.min)?), ">=")
        } else {
            (Filter::greater(attr.clone(), number(bin.min)?), ">")
        };
        rules.push(Rule::new(
            format!("{lower_symbol} {} AND <= {}", bin.min, bin.max),
            Filter::all(vec![
                lower,
                Filter::less_or_equal(attr.clone(), number(bin.max)?),
            ])?,
        ));
    }
    debug!(attribute, bins = bins.len(), rules = rules.len(), "built closed ranged rules");
    Ok(rules)
}

fn validate_bins(bins: &[RangeBin]) -> Result<(), RuleBuildError> {
    for (index, bin) in bins.iter().enumerate() {
        number(bin.min)?;
        number(bin.max)?;
        if bin.min > bin.max {
            return Err(RuleBuildError::InvertedBin {
                index,
                min: bin.min,
                max: bin.max,
            });
        }
    }
    Ok(())
}

fn number(value: f64) -> Result<Expression, RuleBuildError> {
    Ok(Expression::number(value)?)
}

fn equality_rule(attr: &Expression, value: f64) -> Result<Rule, RuleBuildError> {
    Ok(Rule::new(
        value.to_string(),
        Filter::equals(attr.clone(), number(value)?),
    ))
}

fn single_bin_rule(bin: &RangeBin) -> Rule {
    let title = if bin.is_degenerate() {
        bin.min.to_string()
    } else {
        format!("{} - {}", bin.min, bin.max)
    };
    Rule::new(title, Filter::Include)
}
