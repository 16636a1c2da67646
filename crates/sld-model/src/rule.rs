use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::style::Symbolizer;

/// A selection rule: records matching `filter` are drawn with `symbolizer`.
///
/// `title` is a display label only and is not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub title: String,
    pub filter: Filter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbolizer: Option<Symbolizer>,
}

impl Rule {
    /// Unstyled rule.
    pub fn new(title: impl Into<String>, filter: Filter) -> Self {
        Self {
            title: title.into(),
            filter,
            symbolizer: None,
        }
    }

    pub fn is_styled(&self) -> bool {
        self.symbolizer.is_some()
    }
}
