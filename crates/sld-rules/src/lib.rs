//! Classification rule synthesis and ramp-based symbology.
//!
//! [`RulesBuilder`] asks a [`ClassificationEngine`] for a grouping and turns
//! it into mutually exclusive [`Rule`](sld_model::Rule)s; [`StyleAssigner`]
//! then colors those rules from a [`ColorRamp`].

pub mod builder;
pub mod engine;
pub mod error;
pub mod explicit;
pub mod normalize;
pub mod ramp;
pub mod ranged;
pub mod symbology;

pub use builder::{ClassificationRequest, RulesBuilder};
pub use engine::{CatalogEngine, ClassificationEngine, FeatureCollection, GroupingCatalog};
pub use error::{ClassificationError, EngineError, RampError, RuleBuildError, StylingError};
pub use explicit::explicit_rules;
pub use normalize::{attribute_expression, normalize_property};
pub use ramp::{ColorRamp, GradientRamp, RampPreset};
pub use ranged::{closed_ranged_rules, open_ranged_rules};
pub use symbology::{LINE_STROKE_WIDTH, StyleAssigner};
