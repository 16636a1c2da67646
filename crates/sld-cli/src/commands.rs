use anyhow::Result;
use tracing::info_span;

use sld_cli::classify::{RampChoice, load_catalog, preview_ramp, style, synthesize};
use sld_cli::render::{ramp_table, rules_json, rules_table};
use sld_model::StyleOptions;
use sld_rules::ClassificationRequest;

use crate::cli::{ClassifyArgs, OutputArg, RampArgs, RampSelection};

pub fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let span = info_span!("classify", catalog = %args.catalog.display());
    let _guard = span.enter();

    let catalog = load_catalog(&args.catalog)?;
    let request = ClassificationRequest::new(&args.attribute, args.attribute_type, args.classes)
        .with_open(args.open)
        .with_normalize(args.normalize);
    let mut rules = synthesize(&catalog, args.method, &request, args.max_intervals)?;

    if let Some(kind) = args.symbolizer {
        style(&mut rules, kind, style_options(args), &ramp_choice(&args.ramp))?;
    }

    match args.output {
        OutputArg::Table => println!("{}", rules_table(&rules)),
        OutputArg::Json => println!("{}", rules_json(&rules)?),
    }
    Ok(())
}

pub fn run_ramp(args: &RampArgs) -> Result<()> {
    let colors = preview_ramp(&ramp_choice(&args.ramp), args.classes)?;
    println!("{}", ramp_table(&colors));
    Ok(())
}

fn style_options(args: &ClassifyArgs) -> StyleOptions {
    let mut options = StyleOptions::default().with_include_stroke_for_points(args.point_stroke);
    if let Some(weight) = args.stroke_weight {
        options = options.with_stroke_weight(weight);
    }
    if let Some(color) = args.stroke_color {
        options = options.with_stroke_color(color);
    }
    if let Some(size) = args.point_size {
        options = options.with_point_size(size);
    }
    options
}

fn ramp_choice(selection: &RampSelection) -> RampChoice {
    RampChoice {
        preset: selection.preset,
        anchors: selection.colors.clone(),
        reverse: selection.reverse,
    }
}
