//! Seams to the classification engine and the dataset it reads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sld_model::{ClassificationMethod, Grouping};

use crate::error::EngineError;

/// A dataset of records that can be classified.
pub trait FeatureCollection {
    /// Number of records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> FeatureCollection for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> FeatureCollection for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Computes groupings (quantile, Jenks, ...) from raw attribute values.
pub trait ClassificationEngine {
    type Features: FeatureCollection + ?Sized;

    /// Classify `attribute` of `features` into (at most) `classes` groups.
    fn classify(
        &self,
        features: &Self::Features,
        attribute: &str,
        classes: usize,
        method: ClassificationMethod,
    ) -> Result<Grouping, EngineError>;
}

/// Groupings computed ahead of time, keyed by method.
///
/// ```json
/// { "attribute": "pop", "records": 120, "groupings": { "Quantile": { "kind": "ranged", "bins": [] } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupingCatalog {
    /// Attribute the groupings were computed for; any attribute when absent.
    #[serde(default)]
    pub attribute: Option<String>,
    pub records: usize,
    #[serde(default)]
    pub groupings: BTreeMap<ClassificationMethod, Grouping>,
}

impl FeatureCollection for GroupingCatalog {
    fn len(&self) -> usize {
        self.records
    }
}

/// Engine that answers from a [`GroupingCatalog`] instead of computing.
///
/// The requested class count is not applied; the stored grouping is
/// returned as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogEngine;

impl ClassificationEngine for CatalogEngine {
    type Features = GroupingCatalog;

    fn classify(
        &self,
        features: &GroupingCatalog,
        attribute: &str,
        _classes: usize,
        method: ClassificationMethod,
    ) -> Result<Grouping, EngineError> {
        if features.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        if let Some(expected) = &features.attribute
            && expected != attribute
        {
            return Err(EngineError::UnsupportedAttribute {
                attribute: attribute.to_string(),
                reason: format!("catalog was computed for '{expected}'"),
            });
        }
        features
            .groupings
            .get(&method)
            .cloned()
            .ok_or_else(|| EngineError::UnsupportedMethod(method.to_string()))
    }
}
