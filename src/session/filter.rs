//! Filtering logic for list sessions.
//!
//! Pure functions over the loaded collection: no network, no side effects.
//! Matching is case-insensitive substring over the entity's searchable
//! fields, nothing fuzzier.

use crate::catalog::CatalogEntity;

/// Filter a collection by a free-text query.
///
/// An empty query returns the collection unchanged, in order. Otherwise
/// the result is the ordered sub-sequence of entities where the folded
/// query occurs in at least one searchable field. Entities whose field is
/// absent are skipped on that field, not treated as an error.
pub fn filter_collection<E: CatalogEntity>(collection: &[E], query: &str) -> Vec<E> {
    if query.is_empty() {
        return collection.to_vec();
    }

    let needle = query.to_lowercase();

    collection
        .iter()
        .filter(|entity| entity_matches(*entity, &needle))
        .cloned()
        .collect()
}

/// Check one entity against an already-folded query.
fn entity_matches<E: CatalogEntity>(entity: &E, needle: &str) -> bool {
    entity
        .search_fields()
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}
