//! Facet/aggregation resolution.
//!
//! Facets keep their catalog declaration order (unlike sort options, which
//! are re-sorted by priority). A facet without an explicit title falls
//! back to its catalog key with the first character uppercased and the
//! remainder unchanged.

use crate::error::{Error, Result};
use crate::types::{AggEntry, ChildAggSpec, FacetCatalog};

/// Aggregation name given to child aggregations that do not set their own.
const CHILD_AGG_NAME: &str = "inner";

/// Resolve a facet catalog into display entries, in catalog order.
///
/// Fails with [`Error::MalformedFacetSpec`] when an entry carries no
/// `terms` aggregation to derive the bucketed field from.
pub fn resolve_facets(catalog: &FacetCatalog) -> Result<Vec<AggEntry>> {
    catalog
        .iter()
        .map(|(key, option)| {
            let terms = option
                .terms
                .as_ref()
                .ok_or_else(|| Error::MalformedFacetSpec {
                    key: key.to_string(),
                    reason: "missing `terms` aggregation".to_string(),
                })?;
            let title = option
                .title
                .clone()
                .unwrap_or_else(|| capitalize_first(key));
            let child_agg = option
                .child_agg
                .as_ref()
                .map(|child| Box::new(resolve_child(child, &title)));

            Ok(AggEntry {
                title,
                agg_name: key.to_string(),
                field: Some(terms.field.clone()),
                child_agg,
            })
        })
        .collect()
}

/// Resolve a child-aggregation spec, inheriting defaults from its parent.
///
/// The child's `aggName` defaults to `"inner"` and its title to the
/// parent's resolved title; deeper children inherit from the level above
/// them.
fn resolve_child(spec: &ChildAggSpec, parent_title: &str) -> AggEntry {
    let title = spec
        .title
        .clone()
        .unwrap_or_else(|| parent_title.to_string());
    let child_agg = spec
        .child_agg
        .as_ref()
        .map(|child| Box::new(resolve_child(child, &title)));

    AggEntry {
        agg_name: spec
            .agg_name
            .clone()
            .unwrap_or_else(|| CHILD_AGG_NAME.to_string()),
        field: spec.field.clone(),
        title,
        child_agg,
    }
}

/// Uppercase the first character of `key`, leaving the rest unchanged.
fn capitalize_first(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
