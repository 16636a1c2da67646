//! Catalog loading, rule synthesis and styling for the command front end.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use sld_model::{ClassificationMethod, Color, Rule, StyleOptions, SymbolizerKind};
use sld_rules::{
    CatalogEngine, ClassificationRequest, ColorRamp, GroupingCatalog, RampPreset, RulesBuilder,
    StyleAssigner,
};

pub fn load_catalog(path: &Path) -> Result<GroupingCatalog> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read catalog {}", path.display()))?;
    let catalog =
        parse_catalog(&text).with_context(|| format!("parse catalog {}", path.display()))?;
    debug!(
        path = %path.display(),
        records = catalog.records,
        methods = catalog.groupings.len(),
        "loaded grouping catalog"
    );
    Ok(catalog)
}

pub fn parse_catalog(text: &str) -> Result<GroupingCatalog> {
    Ok(serde_json::from_str(text)?)
}

/// Build filter-only rules for `method` from the catalog.
pub fn synthesize(
    catalog: &GroupingCatalog,
    method: ClassificationMethod,
    request: &ClassificationRequest,
    max_intervals: Option<usize>,
) -> Result<Vec<Rule>> {
    let builder = RulesBuilder::new(CatalogEngine);
    let rules = match method {
        ClassificationMethod::Quantile => builder.quantile(catalog, request),
        ClassificationMethod::EqualInterval => builder.equal_interval(catalog, request),
        ClassificationMethod::UniqueInterval => {
            builder.unique_interval(catalog, request, max_intervals)
        }
        ClassificationMethod::Jenks => builder.jenks(catalog, request),
        ClassificationMethod::EqualArea => builder.equal_area(catalog, request),
    }
    .with_context(|| format!("classify '{}'", request.attribute))?;
    info!(%method, rules = rules.len(), "synthesized rules");
    Ok(rules)
}

/// Ramp selection shared by styling and ramp previews.
#[derive(Debug, Clone, PartialEq)]
pub struct RampChoice {
    pub preset: RampPreset,
    pub anchors: Vec<Color>,
    pub reverse: bool,
}

/// Color `rules` in place; returns how many rules were styled.
pub fn style(
    rules: &mut [Rule],
    kind: SymbolizerKind,
    options: StyleOptions,
    ramp: &RampChoice,
) -> Result<usize> {
    let mut gradient = ramp
        .preset
        .build(&ramp.anchors)
        .with_context(|| format!("build {} ramp", ramp.preset))?;
    let styled = StyleAssigner::new(options)
        .apply(rules, &mut gradient, ramp.reverse, kind)
        .context("apply styles")?;
    Ok(styled)
}

/// Colors `ramp` yields for `classes` classes.
pub fn preview_ramp(ramp: &RampChoice, classes: usize) -> Result<Vec<Color>> {
    let mut gradient = ramp
        .preset
        .build(&ramp.anchors)
        .with_context(|| format!("build {} ramp", ramp.preset))?;
    gradient.resize(classes)?;
    if ramp.reverse {
        gradient.reverse();
    }
    Ok(gradient.colors().to_vec())
}
