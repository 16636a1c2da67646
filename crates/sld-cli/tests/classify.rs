//! Integration tests for catalog-driven classification.

use std::fs;

use sld_cli::classify::{RampChoice, load_catalog, parse_catalog, preview_ramp, style, synthesize};
use sld_cli::render::rules_json;
use sld_model::{AttributeType, ClassificationMethod, Color, StyleOptions, SymbolizerKind};
use sld_rules::{ClassificationError, ClassificationRequest, RampPreset};

const CATALOG: &str = r#"{
    "attribute": "pop",
    "records": 6,
    "groupings": {
        "Quantile": {
            "kind": "ranged",
            "bins": [{"min": 0, "max": 100}, {"min": 100, "max": 250}, {"min": 250, "max": 900}]
        },
        "UniqueInterval": {
            "kind": "ranged",
            "bins": [{"min": 1, "max": 1}, {"min": 2, "max": 2}, {"min": 3, "max": 3}, {"min": 4, "max": 4}, {"min": 5, "max": 5}]
        },
        "Jenks": {
            "kind": "explicit",
            "bins": [["north", "east"], ["south"]]
        }
    }
}"#;

fn request() -> ClassificationRequest {
    ClassificationRequest::new("pop", AttributeType::Long, 3)
}

#[test]
fn quantile_rules_from_catalog() {
    let catalog = parse_catalog(CATALOG).expect("parse catalog");
    let rules = synthesize(
        &catalog,
        ClassificationMethod::Quantile,
        &request().with_open(true).with_normalize(true),
        None,
    )
    .expect("synthesize");
    insta::assert_snapshot!(rules_json(&rules).unwrap(), @r#"
    [
      {
        "title": "<= 100",
        "filter": "parseDouble(pop) <= 100"
      },
      {
        "title": "> 100 AND <= 250",
        "filter": "parseDouble(pop) > 100 AND parseDouble(pop) <= 250"
      },
      {
        "title": "> 250",
        "filter": "parseDouble(pop) > 250"
      }
    ]
    "#);
}

#[test]
fn explicit_rules_are_styled_as_points() {
    let catalog = parse_catalog(CATALOG).expect("parse catalog");
    let mut rules = synthesize(&catalog, ClassificationMethod::Jenks, &request(), None)
        .expect("synthesize");
    let ramp = RampChoice {
        preset: RampPreset::Custom,
        anchors: vec![Color::BLACK, Color::WHITE],
        reverse: true,
    };
    let styled = style(
        &mut rules,
        SymbolizerKind::Point,
        StyleOptions::default().with_point_size(9.0),
        &ramp,
    )
    .expect("style");
    assert_eq!(styled, 2);
    assert_eq!(rules[0].title, "north OR east");
    assert_eq!(
        rules[0].symbolizer.as_ref().unwrap().class_color(),
        Color::WHITE
    );
    assert_eq!(
        rules[1].symbolizer.as_ref().unwrap().class_color(),
        Color::BLACK
    );
}

#[test]
fn unique_interval_limit_surfaces_count() {
    let catalog = parse_catalog(CATALOG).expect("parse catalog");
    let err = synthesize(
        &catalog,
        ClassificationMethod::UniqueInterval,
        &request(),
        Some(3),
    )
    .unwrap_err();
    let cause = err
        .downcast_ref::<ClassificationError>()
        .expect("classification error");
    assert!(matches!(
        cause,
        ClassificationError::TooManyIntervals { count: 5, limit: 3 }
    ));
}

#[test]
fn missing_method_is_reported() {
    let catalog = parse_catalog(CATALOG).expect("parse catalog");
    let err = synthesize(&catalog, ClassificationMethod::EqualArea, &request(), None)
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("EqualArea"), "{message}");
    assert!(message.contains("not supported"), "{message}");
}

#[test]
fn load_catalog_from_file() {
    let path = std::env::temp_dir().join(format!("sld-cli-catalog-{}.json", std::process::id()));
    fs::write(&path, CATALOG).expect("write catalog");
    let catalog = load_catalog(&path);
    fs::remove_file(&path).ok();
    let catalog = catalog.expect("load catalog");
    assert_eq!(catalog.records, 6);
    assert_eq!(catalog.groupings.len(), 3);
}

#[test]
fn malformed_catalog_is_an_error() {
    assert!(parse_catalog(r#"{"records": "many"}"#).is_err());
}

#[test]
fn ramp_preview_matches_requested_size() {
    let ramp = RampChoice {
        preset: RampPreset::Gray,
        anchors: Vec::new(),
        reverse: false,
    };
    let colors = preview_ramp(&ramp, 4).expect("preview");
    assert_eq!(colors.len(), 4);
    assert_eq!(colors[0], Color::rgb(0xF0, 0xF0, 0xF0));
}
