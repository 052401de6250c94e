use serde::{Deserialize, Serialize};
use specta::Type;

/// Select-box value the UI uses to mean "no constraint"
pub const ALL_SENTINEL: &str = "all";

/// One filter predicate: either unconstrained or an exact value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FilterValue {
    #[default]
    All,
    Only(String),
}

impl FilterValue {
    /// Parse a raw select value; empty or `all` (any case) means no constraint
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            FilterValue::All
        } else {
            FilterValue::Only(trimmed.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FilterValue::Only(_))
    }

    /// True when `candidate` satisfies this predicate
    pub fn accepts(&self, candidate: Option<&str>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(expected) => candidate == Some(expected.as_str()),
        }
    }
}

/// Structured predicates applied next to the free-text query.
///
/// Every active predicate must hold (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Exact-match predicates keyed by category field name
    pub fields: Vec<(String, FilterValue)>,
    /// Membership predicate over the entity's tags
    pub tag: FilterValue,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the predicate for `field`, replacing an earlier one
    pub fn with_field(mut self, field: impl Into<String>, value: FilterValue) -> Self {
        let field = field.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((field, value)),
        }
        self
    }

    pub fn with_tag(mut self, tag: FilterValue) -> Self {
        self.tag = tag;
        self
    }

    /// Predicates that actually constrain the result
    pub fn active_fields(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.fields
            .iter()
            .filter(|(_, value)| value.is_active())
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.active_fields().next().is_none() && !self.tag.is_active()
    }
}

/// Distinct filter options offered by the filter controls, each sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFacets {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}
