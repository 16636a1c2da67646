//! Partition properties of ranged rule sets.
//!
//! Filters are checked with a small numeric evaluator that only understands
//! the shapes ranged rules produce.

use proptest::prelude::*;

use sld_model::{AttributeType, ComparisonOperator, Expression, Filter, Literal, RangeBin, Rule};
use sld_rules::{closed_ranged_rules, open_ranged_rules};

fn literal_value(expression: &Expression) -> f64 {
    match expression {
        Expression::Literal(Literal::Float(value)) => *value,
        Expression::Literal(Literal::Integer(value)) => *value as f64,
        other => panic!("expected numeric literal, got {other:?}"),
    }
}

fn matches(filter: &Filter, value: f64) -> bool {
    match filter {
        Filter::Include => true,
        Filter::Compare { op, left, right } => {
            assert!(
                matches!(left, Expression::Property(_) | Expression::ParseDouble(_)),
                "left side must read the attribute"
            );
            let bound = literal_value(right);
            match op {
                ComparisonOperator::Equal => value == bound,
                ComparisonOperator::Greater => value > bound,
                ComparisonOperator::GreaterOrEqual => value >= bound,
                ComparisonOperator::Less => value < bound,
                ComparisonOperator::LessOrEqual => value <= bound,
            }
        }
        Filter::And(operands) => operands.iter().all(|operand| matches(operand, value)),
        Filter::Or(operands) => operands.iter().any(|operand| matches(operand, value)),
    }
}

fn matching_rules(rules: &[Rule], value: f64) -> usize {
    rules.iter().filter(|rule| matches(&rule.filter, value)).count()
}

/// Contiguous bins starting at `start`, one per width.
fn contiguous_bins(start: f64, widths: &[f64]) -> Vec<RangeBin> {
    let mut bins = Vec::with_capacity(widths.len());
    let mut min = start;
    for width in widths {
        let max = min + width;
        bins.push(RangeBin::new(min, max));
        min = max;
    }
    bins
}

/// Every edge plus the midpoint of every non-degenerate bin.
fn probes(bins: &[RangeBin]) -> Vec<f64> {
    let mut points = Vec::new();
    for bin in bins {
        points.push(bin.min);
        points.push(bin.max);
        if !bin.is_degenerate() {
            points.push(bin.min + (bin.max - bin.min) / 2.0);
        }
    }
    points
}

fn width() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.5f64..250.0]
}

proptest! {
    #[test]
    fn closed_rules_partition_the_covered_range(
        start in -1000.0f64..1000.0,
        widths in proptest::collection::vec(width(), 2..10),
    ) {
        let bins = contiguous_bins(start, &widths);
        let rules = closed_ranged_rules(&bins, "value", AttributeType::Double, false).unwrap();
        for point in probes(&bins) {
            prop_assert_eq!(matching_rules(&rules, point), 1, "value {}", point);
        }
        let first = bins[0].min;
        let last = bins[bins.len() - 1].max;
        prop_assert_eq!(matching_rules(&rules, first - 1.0), 0);
        prop_assert_eq!(matching_rules(&rules, last + 1.0), 0);
    }

    #[test]
    fn closed_rule_count_drops_duplicate_upper_edges(
        start in -1000.0f64..1000.0,
        widths in proptest::collection::vec(width(), 1..10),
    ) {
        let bins = contiguous_bins(start, &widths);
        let duplicates = bins.windows(2).filter(|pair| pair[0].max == pair[1].max).count();
        let rules = closed_ranged_rules(&bins, "value", AttributeType::Double, false).unwrap();
        prop_assert_eq!(rules.len(), bins.len() - duplicates);
    }

    #[test]
    fn open_rules_leave_outer_edges_unbounded(
        start in -1000.0f64..1000.0,
        widths in proptest::collection::vec(0.5f64..250.0, 2..10),
    ) {
        let bins = contiguous_bins(start, &widths);
        let rules = open_ranged_rules(&bins, "value", AttributeType::Long, true).unwrap();
        prop_assert_eq!(rules.len(), bins.len());

        let first = &rules[0].filter;
        let first_max = bins[0].max;
        prop_assert!(matches(first, first_max));
        prop_assert!(matches(first, first_max - 1.0e9));
        prop_assert!(!matches(first, first_max + 0.25));

        let last = &rules[rules.len() - 1].filter;
        let last_min = bins[bins.len() - 1].min;
        prop_assert!(!matches(last, last_min));
        prop_assert!(matches(last, last_min + 0.25));
        prop_assert!(matches(last, last_min + 1.0e9));

        for point in probes(&bins) {
            prop_assert_eq!(matching_rules(&rules, point), 1, "value {}", point);
        }
    }

    #[test]
    fn degenerate_middle_bins_become_equality(
        start in -1000.0f64..1000.0,
        value_offset in 1.0f64..100.0,
        open in any::<bool>(),
    ) {
        let value = start + value_offset;
        let bins = vec![
            RangeBin::new(start, start + value_offset / 2.0),
            RangeBin::new(value, value),
            RangeBin::new(value, value + 10.0),
            RangeBin::new(value + 10.0, value + 20.0),
        ];
        let rules = if open {
            open_ranged_rules(&bins, "value", AttributeType::Double, false).unwrap()
        } else {
            closed_ranged_rules(&bins, "value", AttributeType::Double, false).unwrap()
        };
        prop_assert_eq!(
            &rules[1].filter,
            &Filter::equals(Expression::property("value"), Expression::number(value).unwrap())
        );
    }
}
