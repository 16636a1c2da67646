//! Integration tests for the classification entry points.

use std::cell::Cell;

use sld_model::{
    AttributeType, ClassificationMethod, Expression, Filter, Grouping, Literal, RangeBin,
};
use sld_rules::{
    ClassificationEngine, ClassificationError, ClassificationRequest, EngineError,
    RuleBuildError, RulesBuilder,
};

/// Returns a fixed grouping and records what it was asked for.
struct FixedEngine {
    grouping: Result<Grouping, EngineError>,
    requested_classes: Cell<Option<usize>>,
    requested_method: Cell<Option<ClassificationMethod>>,
}

impl FixedEngine {
    fn new(grouping: Result<Grouping, EngineError>) -> Self {
        Self {
            grouping,
            requested_classes: Cell::new(None),
            requested_method: Cell::new(None),
        }
    }
}

impl ClassificationEngine for FixedEngine {
    type Features = [f64];

    fn classify(
        &self,
        _features: &[f64],
        _attribute: &str,
        classes: usize,
        method: ClassificationMethod,
    ) -> Result<Grouping, EngineError> {
        self.requested_classes.set(Some(classes));
        self.requested_method.set(Some(method));
        self.grouping.clone()
    }
}

fn ranged(edges: &[(f64, f64)]) -> Grouping {
    Grouping::Ranged {
        bins: edges
            .iter()
            .map(|&(min, max)| RangeBin::new(min, max))
            .collect(),
    }
}

fn titles(rules: &[sld_model::Rule]) -> Vec<String> {
    rules.iter().map(|rule| rule.title.clone()).collect()
}

const VALUES: [f64; 6] = [1.0, 4.0, 4.0, 9.0, 12.0, 20.0];

#[test]
fn ranged_grouping_honours_open_flag() {
    let builder = RulesBuilder::new(FixedEngine::new(Ok(ranged(&[
        (1.0, 4.0),
        (4.0, 12.0),
        (12.0, 20.0),
    ]))));
    let request = ClassificationRequest::new("pop", AttributeType::Double, 3);

    let closed = builder.quantile(&VALUES, &request).unwrap();
    assert_eq!(
        titles(&closed),
        [">= 1 AND <= 4", "> 4 AND <= 12", "> 12 AND <= 20"]
    );

    let open = builder
        .quantile(&VALUES, &request.clone().with_open(true))
        .unwrap();
    assert_eq!(titles(&open), ["<= 4", "> 4 AND <= 12", "> 12"]);
    assert_eq!(
        builder.engine().requested_method.get(),
        Some(ClassificationMethod::Quantile)
    );
    assert_eq!(builder.engine().requested_classes.get(), Some(3));
}

#[test]
fn each_entry_point_names_its_method() {
    let builder = RulesBuilder::new(FixedEngine::new(Ok(ranged(&[(0.0, 1.0), (1.0, 2.0)]))));
    let request = ClassificationRequest::new("pop", AttributeType::Double, 2);
    for method in [
        ClassificationMethod::Quantile,
        ClassificationMethod::EqualInterval,
        ClassificationMethod::Jenks,
        ClassificationMethod::EqualArea,
    ] {
        let rules = match method {
            ClassificationMethod::Quantile => builder.quantile(&VALUES, &request),
            ClassificationMethod::EqualInterval => builder.equal_interval(&VALUES, &request),
            ClassificationMethod::Jenks => builder.jenks(&VALUES, &request),
            ClassificationMethod::EqualArea => builder.equal_area(&VALUES, &request),
            ClassificationMethod::UniqueInterval => unreachable!(),
        }
        .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(builder.engine().requested_method.get(), Some(method));
    }
}

#[test]
fn explicit_grouping_ignores_open_and_normalize() {
    let builder = RulesBuilder::new(FixedEngine::new(Ok(Grouping::Explicit {
        bins: vec![
            vec![Literal::text("A"), Literal::text("B")],
            vec![Literal::text("C")],
        ],
    })));
    let request = ClassificationRequest::new("zone", AttributeType::Integer, 2)
        .with_open(true)
        .with_normalize(true);
    let rules = builder.jenks(&VALUES, &request).unwrap();
    assert_eq!(titles(&rules), ["A OR B", "C"]);
    assert_eq!(
        rules[1].filter,
        Filter::equals(Expression::property("zone"), Expression::literal("C"))
    );
}

#[test]
fn closed_scenario_with_duplicate_degenerate_bin() {
    let builder = RulesBuilder::new(FixedEngine::new(Ok(ranged(&[
        (0.0, 10.0),
        (10.0, 10.0),
        (10.0, 20.0),
    ]))));
    let request = ClassificationRequest::new("pop", AttributeType::Double, 3);
    let rules = builder.equal_interval(&VALUES, &request).unwrap();
    let rendered: Vec<String> = rules
        .iter()
        .map(|rule| format!("{} | {}", rule.title, rule.filter))
        .collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    >= 0 AND <= 10 | pop >= 0 AND pop <= 10
    > 10 AND <= 20 | pop > 10 AND pop <= 20
    ");
}

#[test]
fn engine_failure_carries_method_and_cause() {
    let builder = RulesBuilder::new(FixedEngine::new(Err(EngineError::EmptyDataset)));
    let request = ClassificationRequest::new("pop", AttributeType::Double, 3);
    let err = builder.equal_area(&[], &request).unwrap_err();
    assert_eq!(err.method(), ClassificationMethod::EqualArea);
    assert!(matches!(
        err,
        ClassificationError::Engine {
            source: EngineError::EmptyDataset,
            ..
        }
    ));
    assert_eq!(err.to_string(), "failed to build EqualArea classification");
}

#[test]
fn rule_failure_is_all_or_nothing() {
    let builder = RulesBuilder::new(FixedEngine::new(Ok(ranged(&[
        (0.0, 10.0),
        (10.0, 20.0),
        (30.0, 25.0),
    ]))));
    let request = ClassificationRequest::new("pop", AttributeType::Double, 3);
    let err = builder.quantile(&VALUES, &request).unwrap_err();
    assert!(matches!(
        err,
        ClassificationError::Rules {
            method: ClassificationMethod::Quantile,
            source: RuleBuildError::InvertedBin { index: 2, .. }
        }
    ));
}

#[test]
fn empty_grouping_is_not_an_error() {
    let builder = RulesBuilder::new(FixedEngine::new(Ok(Grouping::Ranged { bins: vec![] })));
    let request = ClassificationRequest::new("pop", AttributeType::Double, 3);
    assert!(builder.quantile(&VALUES, &request).unwrap().is_empty());
}

fn unique_values_engine() -> FixedEngine {
    FixedEngine::new(Ok(ranged(&[
        (1.0, 1.0),
        (4.0, 4.0),
        (9.0, 9.0),
        (12.0, 12.0),
        (20.0, 20.0),
    ])))
}

#[test]
fn unique_interval_requests_one_class_per_record() {
    let builder = RulesBuilder::new(unique_values_engine());
    let request = ClassificationRequest::new("pop", AttributeType::Double, 2).with_open(true);
    let rules = builder.unique_interval(&VALUES, &request, None).unwrap();
    assert_eq!(builder.engine().requested_classes.get(), Some(VALUES.len()));
    assert_eq!(titles(&rules), ["1", "4", "9", "12", "20"]);
}

#[test]
fn unique_interval_limit_is_enforced() {
    let builder = RulesBuilder::new(unique_values_engine());
    let request = ClassificationRequest::new("pop", AttributeType::Double, 0);
    let err = builder
        .unique_interval(&VALUES, &request, Some(3))
        .unwrap_err();
    assert!(matches!(
        err,
        ClassificationError::TooManyIntervals { count: 5, limit: 3 }
    ));

    assert_eq!(
        builder
            .unique_interval(&VALUES, &request, Some(5))
            .unwrap()
            .len(),
        5
    );
    assert_eq!(
        builder
            .unique_interval(&VALUES, &request, Some(0))
            .unwrap()
            .len(),
        5
    );
}
