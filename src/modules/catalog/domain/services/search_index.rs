use std::collections::BTreeSet;

use crate::modules::catalog::domain::{
    entities::CatalogEntity,
    value_objects::{CatalogFacets, SearchFilters},
};
use crate::shared::utils::LogContext;

/// Free-text query after trimming and case folding.
///
/// Diacritics are left alone: `cafe` does not find `Café`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

/// Substring search and exact-match filtering over entity collections.
///
/// Results are a stable filter of the input: relative order is preserved
/// and the input is never reordered or mutated.
pub struct SearchIndex;

impl SearchIndex {
    pub fn search<'a, E: CatalogEntity>(
        entities: &'a [E],
        query: &str,
        filters: &SearchFilters,
    ) -> Vec<&'a E> {
        let query = NormalizedQuery::new(query);
        LogContext::search_operation(query.as_str(), entities.len(), None);

        let results: Vec<&E> = entities
            .iter()
            .filter(|entity| Self::matches_query(*entity, &query))
            .filter(|entity| Self::matches_filters(*entity, filters))
            .collect();

        LogContext::search_operation(query.as_str(), entities.len(), Some(results.len()));
        results
    }

    /// Empty query matches everything; otherwise any field containing the
    /// query is enough
    pub fn matches_query<E: CatalogEntity>(entity: &E, query: &NormalizedQuery) -> bool {
        if query.is_empty() {
            return true;
        }

        query.found_in(entity.display_name())
            || entity
                .searchable_fields()
                .into_iter()
                .any(|field| query.found_in(field))
            || entity
                .multi_valued_fields()
                .into_iter()
                .any(|values| query.found_in(&values.join(" ")))
    }

    /// Every active predicate must hold
    pub fn matches_filters<E: CatalogEntity>(entity: &E, filters: &SearchFilters) -> bool {
        let fields_ok = filters
            .active_fields()
            .all(|(field, value)| value.accepts(entity.category_value(field)));

        let tag_ok = !filters.tag.is_active()
            || entity
                .tags()
                .iter()
                .any(|t| filters.tag.accepts(Some(t.as_str())));

        fields_ok && tag_ok
    }

    /// Distinct, sorted values of `category_field` and of the tags
    pub fn facets<E: CatalogEntity>(entities: &[E], category_field: &str) -> CatalogFacets {
        let categories: BTreeSet<&str> = entities
            .iter()
            .filter_map(|entity| entity.category_value(category_field))
            .collect();
        let tags: BTreeSet<&str> = entities
            .iter()
            .flat_map(|entity| entity.tags().iter().map(String::as_str))
            .collect();

        CatalogFacets {
            categories: categories.into_iter().map(str::to_string).collect(),
            tags: tags.into_iter().map(str::to_string).collect(),
        }
    }
}
