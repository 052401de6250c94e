use std::cmp::Ordering;

use crate::modules::catalog::domain::{entities::CatalogEntity, value_objects::ProjectCode};

/// Total ordering of entities by their structured code.
///
/// Order: primary segment, then suffix, then `id` byte-wise. Since ids are
/// unique within a collection, two distinct entities never compare equal.
/// Entities without a code sort as `(0, 0)`.
pub struct CodeSorter;

impl CodeSorter {
    pub fn parse(code: &str) -> ProjectCode {
        ProjectCode::parse(code)
    }

    pub fn key_of<E: CatalogEntity>(entity: &E) -> ProjectCode {
        entity
            .structured_code()
            .map(ProjectCode::parse)
            .unwrap_or_default()
    }

    pub fn compare<E: CatalogEntity>(a: &E, b: &E) -> Ordering {
        Self::key_of(a)
            .cmp(&Self::key_of(b))
            .then_with(|| a.id().cmp(b.id()))
    }

    /// Sorted copy of `entities`; the input is left untouched
    pub fn sort<'a, E: CatalogEntity>(entities: &'a [E]) -> Vec<&'a E> {
        let mut keyed: Vec<(ProjectCode, &E)> = entities
            .iter()
            .map(|entity| (Self::key_of(entity), entity))
            .collect();

        keyed.sort_by(|(key_a, a), (key_b, b)| key_a.cmp(key_b).then_with(|| a.id().cmp(b.id())));
        keyed.into_iter().map(|(_, entity)| entity).collect()
    }
}
