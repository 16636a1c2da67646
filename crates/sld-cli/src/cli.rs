//! CLI argument definitions for `sld-classify`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color as ColorFlag;

use sld_model::{AttributeType, ClassificationMethod, Color, SymbolizerKind};
use sld_rules::RampPreset;

#[derive(Parser)]
#[command(
    name = "sld-classify",
    version,
    about = "Build classified, ramp-colored style rules from attribute groupings",
    long_about = "Turn classification groupings into mutually exclusive style rules.\n\n\
                  Groupings are read from a JSON catalog keyed by classification method\n\
                  (Quantile, EqualInterval, UniqueInterval, Jenks, EqualArea)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: ColorFlag,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build rules for one attribute from a grouping catalog.
    Classify(ClassifyArgs),

    /// Preview the colors a ramp produces.
    Ramp(RampArgs),
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// JSON grouping catalog.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Attribute to classify.
    #[arg(long = "attribute", short = 'a')]
    pub attribute: String,

    /// Declared attribute type (integer, long, double, text, ...).
    #[arg(long = "type", default_value = "double")]
    pub attribute_type: AttributeType,

    /// Classification method.
    #[arg(long = "method", short = 'm', default_value = "Quantile")]
    pub method: ClassificationMethod,

    /// Requested number of classes.
    #[arg(long = "classes", short = 'n', default_value_t = 5)]
    pub classes: usize,

    /// Leave the lowest and highest classes unbounded.
    #[arg(long = "open")]
    pub open: bool,

    /// Compare integral attributes numerically even when stored as text.
    #[arg(long = "normalize")]
    pub normalize: bool,

    /// Fail unique-interval classification above this many classes (0 = no limit).
    #[arg(long = "max-intervals", value_name = "N")]
    pub max_intervals: Option<usize>,

    /// Attach symbolizers of this kind.
    #[arg(long = "symbolizer", value_name = "KIND")]
    pub symbolizer: Option<SymbolizerKind>,

    #[command(flatten)]
    pub ramp: RampSelection,

    /// Outline width; negative disables outlines.
    #[arg(long = "stroke-weight", allow_negative_numbers = true)]
    pub stroke_weight: Option<f64>,

    /// Outline color as #RRGGBB.
    #[arg(long = "stroke-color", value_name = "HEX")]
    pub stroke_color: Option<Color>,

    /// Point marker size in pixels.
    #[arg(long = "point-size")]
    pub point_size: Option<f64>,

    /// Draw outlines around point markers.
    #[arg(long = "point-stroke")]
    pub point_stroke: bool,

    /// Output format.
    #[arg(long = "output", short = 'o', value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct RampArgs {
    #[command(flatten)]
    pub ramp: RampSelection,

    /// Number of colors to generate.
    #[arg(long = "classes", short = 'n', default_value_t = 5)]
    pub classes: usize,
}

#[derive(clap::Args)]
pub struct RampSelection {
    /// Color ramp (red, blue, gray, jet, custom).
    #[arg(long = "ramp", default_value = "red")]
    pub preset: RampPreset,

    /// Anchor colors for the custom ramp, comma separated.
    #[arg(long = "colors", value_name = "HEX,...", value_delimiter = ',')]
    pub colors: Vec<Color>,

    /// Assign ramp colors in reverse order.
    #[arg(long = "reverse")]
    pub reverse: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
