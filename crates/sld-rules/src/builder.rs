//! Classification entry points: run the engine, then build rules from the
//! grouping it returns.

use tracing::{debug, info, info_span};

use sld_model::{AttributeType, ClassificationMethod, Grouping, Rule};

use crate::engine::{ClassificationEngine, FeatureCollection};
use crate::error::ClassificationError;
use crate::explicit::explicit_rules;
use crate::ranged::{closed_ranged_rules, open_ranged_rules};

/// Per-call classification parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRequest {
    pub attribute: String,
    pub attribute_type: AttributeType,
    pub classes: usize,
    /// Leave the outer edges of ranged groupings unbounded.
    pub open: bool,
    /// Compare integral attributes numerically even when stored as text.
    pub normalize: bool,
}

impl ClassificationRequest {
    pub fn new(
        attribute: impl Into<String>,
        attribute_type: AttributeType,
        classes: usize,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            attribute_type,
            classes,
            open: false,
            normalize: false,
        }
    }

    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

/// Builds filter-only rules (no symbolizers) from an engine's groupings.
#[derive(Debug, Clone, Default)]
pub struct RulesBuilder<E> {
    engine: E,
}

impl<E: ClassificationEngine> RulesBuilder<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn quantile(
        &self,
        features: &E::Features,
        request: &ClassificationRequest,
    ) -> Result<Vec<Rule>, ClassificationError> {
        self.classify(features, ClassificationMethod::Quantile, request)
    }

    pub fn equal_interval(
        &self,
        features: &E::Features,
        request: &ClassificationRequest,
    ) -> Result<Vec<Rule>, ClassificationError> {
        self.classify(features, ClassificationMethod::EqualInterval, request)
    }

    pub fn jenks(
        &self,
        features: &E::Features,
        request: &ClassificationRequest,
    ) -> Result<Vec<Rule>, ClassificationError> {
        self.classify(features, ClassificationMethod::Jenks, request)
    }

    pub fn equal_area(
        &self,
        features: &E::Features,
        request: &ClassificationRequest,
    ) -> Result<Vec<Rule>, ClassificationError> {
        self.classify(features, ClassificationMethod::EqualArea, request)
    }

    /// One class per distinct value.
    ///
    /// Asks the engine for as many classes as there are records and always
    /// builds closed ranges; `request.classes` and `request.open` are
    /// ignored. Fails with [`ClassificationError::TooManyIntervals`] when
    /// `max_intervals` is a positive limit the rule count exceeds.
    pub fn unique_interval(
        &self,
        features: &E::Features,
        request: &ClassificationRequest,
        max_intervals: Option<usize>,
    ) -> Result<Vec<Rule>, ClassificationError> {
        let request = ClassificationRequest {
            classes: features.len(),
            open: false,
            ..request.clone()
        };
        let rules = self.classify(features, ClassificationMethod::UniqueInterval, &request)?;
        if let Some(limit) = max_intervals.filter(|&limit| limit > 0)
            && rules.len() > limit
        {
            info!(count = rules.len(), limit, "unique interval classification exceeds limit");
            return Err(ClassificationError::TooManyIntervals {
                count: rules.len(),
                limit,
            });
        }
        Ok(rules)
    }

    /// Run `method` and build rules from its grouping.
    ///
    /// Ranged groupings honour `open` and `normalize`; explicit groupings
    /// ignore both.
    pub fn classify(
        &self,
        features: &E::Features,
        method: ClassificationMethod,
        request: &ClassificationRequest,
    ) -> Result<Vec<Rule>, ClassificationError> {
        let span = info_span!(
            "classify",
            method = %method,
            attribute = %request.attribute,
            classes = request.classes
        );
        let _guard = span.enter();

        let grouping = self
            .engine
            .classify(features, &request.attribute, request.classes, method)
            .map_err(|source| {
                info!(error = %source, "classification engine failed");
                ClassificationError::Engine { method, source }
            })?;
        debug!(kind = grouping.kind(), groups = grouping.len(), "engine returned grouping");

        let rules = match &grouping {
            Grouping::Ranged { bins } if request.open => open_ranged_rules(
                bins,
                &request.attribute,
                request.attribute_type,
                request.normalize,
            ),
            Grouping::Ranged { bins } => closed_ranged_rules(
                bins,
                &request.attribute,
                request.attribute_type,
                request.normalize,
            ),
            Grouping::Explicit { bins } => explicit_rules(bins, &request.attribute),
        }
        .map_err(|source| {
            info!(error = %source, "failed to build rules");
            ClassificationError::Rules { method, source }
        })?;
        debug!(rules = rules.len(), "classification complete");
        Ok(rules)
    }
}
