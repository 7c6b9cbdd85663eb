//! Legacy output format — compatibility shim.
//!
//! Older page templates embed a simpler configuration shape than the
//! canonical [`GeneratedSearchConfig`](crate::GeneratedSearchConfig):
//! sort options as `{title, value}` pairs where a descending default is
//! expressed by a `-` prefix on the value, and a flat
//! `{api, mimetype, sort_options, aggs}` object. Both are derived from
//! the same resolvers as the canonical format and are kept as a separate
//! entry point rather than reconciled field-by-field with it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::API_PREFIX;
use crate::error::Result;
use crate::facets::resolve_facets;
use crate::types::{AggEntry, EndpointDescriptor, FacetCatalog, SortCatalog, SortDirection};

/// One legacy sort option: `value` is the sort key, `-`-prefixed when the
/// default direction is descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySortOption {
    /// Display label.
    pub title: String,
    /// Sort key, with embedded direction.
    pub value: String,
}

/// The legacy flat configuration object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySearchConfig {
    /// Full URL of the search endpoint, API prefix included.
    pub api: String,
    /// MIME type requested from the endpoint.
    pub mimetype: String,
    /// Sort options, ordered by priority.
    pub sort_options: Vec<LegacySortOption>,
    /// Facet display entries, in catalog order.
    pub aggs: Vec<AggEntry>,
}

/// Resolve a sort catalog into legacy `{title, value}` options, ordered
/// ascending by priority with ties in declaration order.
#[must_use]
pub fn sorted_options(catalog: &SortCatalog) -> Vec<LegacySortOption> {
    let mut entries: Vec<_> = catalog.iter().collect();
    entries.sort_by_key(|(_, option)| option.order);

    entries
        .into_iter()
        .map(|(key, option)| LegacySortOption {
            title: option.title.clone(),
            value: match option.default_order {
                SortDirection::Desc => format!("-{key}"),
                SortDirection::Asc => key.to_string(),
            },
        })
        .collect()
}

/// The `{"options": [...]}` wrapper the legacy page template embeds.
#[must_use]
pub fn format_sortoptions(catalog: &SortCatalog) -> Value {
    json!({ "options": sorted_options(catalog) })
}

/// Assemble the legacy flat configuration for one endpoint.
pub fn format_config(
    endpoint: &EndpointDescriptor,
    sort_catalog: &SortCatalog,
    facet_catalog: &FacetCatalog,
) -> Result<LegacySearchConfig> {
    Ok(LegacySearchConfig {
        api: format!("{API_PREFIX}{}", endpoint.list_route),
        mimetype: endpoint.default_media_type.clone(),
        sort_options: sorted_options(sort_catalog),
        aggs: resolve_facets(facet_catalog)?,
    })
}
