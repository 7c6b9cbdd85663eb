//! Sort option resolution.
//!
//! Turns a sort catalog into the ordered dropdown entries of the generated
//! configuration and resolves the default sort selection against it.

use crate::error::{Error, Result};
use crate::types::{DefaultSort, DefaultSortKey, DefaultSortSelection, SortCatalog, SortEntry};

/// Resolve a sort catalog into display entries.
///
/// Entries are ordered ascending by their `order` field; ties keep the
/// catalog declaration order (stable sort). Every catalog entry appears in
/// the output, and entries without an explicit direction default to
/// ascending.
#[must_use]
pub fn resolve_sort_options(catalog: &SortCatalog) -> Vec<SortEntry> {
    let mut entries: Vec<_> = catalog.iter().collect();
    entries.sort_by_key(|(_, option)| option.order);

    entries
        .into_iter()
        .map(|(key, option)| SortEntry {
            text: option.title.clone(),
            sort_by: key.to_string(),
            sort_order: option.default_order,
        })
        .collect()
}

/// Resolve a default-sort selection against a catalog.
///
/// The resolved direction of each half is the catalog entry's default
/// order. Fails with [`Error::MissingSortKey`] when either selected key is
/// absent from the catalog.
pub fn resolve_default_sort(
    selection: &DefaultSortSelection,
    catalog: &SortCatalog,
) -> Result<DefaultSort> {
    Ok(DefaultSort {
        on_query: resolve_key(&selection.on_query, catalog)?,
        on_empty_query: resolve_key(&selection.on_empty_query, catalog)?,
    })
}

fn resolve_key(key: &str, catalog: &SortCatalog) -> Result<DefaultSortKey> {
    let option = catalog.get(key).ok_or_else(|| Error::MissingSortKey {
        key: key.to_string(),
    })?;
    Ok(DefaultSortKey {
        sort_by: key.to_string(),
        sort_order: option.default_order,
    })
}
