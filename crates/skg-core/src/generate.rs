//! Configuration assembly.
//!
//! The orchestrator: looks up the endpoint descriptor, derives the
//! sort/facet catalogs via the endpoint's search index, runs the field
//! resolvers and assembles the complete configuration object. Pure and
//! synchronous; identical inputs always produce identical output.

use serde_json::{Map, Value};
use tracing::debug;

use crate::api::resolve_search_api;
use crate::config::AppSearchConfig;
use crate::error::{Error, Result};
use crate::facets::resolve_facets;
use crate::pagination::resolve_pagination;
use crate::sort::{resolve_default_sort, resolve_sort_options};
use crate::types::{
    GeneratedSearchConfig, InitialQueryState, Layout, LayoutOptions, OrderedMap, PaginationSpec,
    SortCatalog,
};

/// Caller-supplied knobs for one generation run.
///
/// An explicit struct with typed fields and documented defaults; there is
/// no dictionary of loosely-typed options anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Identifier of the search application instance. Default `"search"`.
    pub app_id: String,
    /// Extra query parameters applied to every request.
    pub hidden_params: Vec<(String, String)>,
    /// Offer the list layout. Default `true`; also selects the initial
    /// layout when enabled.
    pub list_view: bool,
    /// Offer the grid layout. Default `false`.
    pub grid_view: bool,
    /// Page size choices and default. Defaults to `[10, 20, 50]` with 10
    /// pre-selected.
    pub pagination: PaginationSpec,
    /// Initial page number. Default 1.
    pub default_page: u32,
    /// Extra request headers merged over the computed `Accept` header.
    pub extra_headers: OrderedMap<String>,
    /// Top-level keys that replace the corresponding generated value
    /// wholesale, applied last. An escape hatch for per-page
    /// customization; unrelated keys are never touched.
    pub overrides: Map<String, Value>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            app_id: "search".to_string(),
            hidden_params: Vec::new(),
            list_view: true,
            grid_view: false,
            pagination: PaginationSpec::default(),
            default_page: 1,
            extra_headers: OrderedMap::new(),
            overrides: Map::new(),
        }
    }
}

/// Generate the typed configuration for one endpoint, without overrides.
///
/// Fails with [`Error::UnknownEndpoint`] for an undeclared endpoint id and
/// propagates any resolver error unchanged. No partial result is ever
/// produced.
pub fn generate_config(
    app: &AppSearchConfig,
    endpoint_id: &str,
    options: &GenerateOptions,
) -> Result<GeneratedSearchConfig> {
    let endpoint = app.endpoint(endpoint_id)?;
    let search_index = endpoint.search_index.as_str();
    debug!(
        endpoint = endpoint_id,
        search_index, "generating search app configuration"
    );

    let empty_catalog = SortCatalog::new();
    let sort_catalog = app.sort_catalog(search_index).unwrap_or(&empty_catalog);
    let selection = app.default_sort_selection(search_index)?;
    let default_sort = resolve_default_sort(selection, sort_catalog)?;

    let aggs = app
        .facet_catalog(search_index)
        .map(resolve_facets)
        .transpose()?
        .unwrap_or_default();

    let layout = if options.list_view {
        Layout::List
    } else {
        Layout::Grid
    };

    Ok(GeneratedSearchConfig {
        app_id: options.app_id.clone(),
        initial_query_state: InitialQueryState {
            hidden_params: options.hidden_params.clone(),
            layout,
            size: options.pagination.default_choice,
            sort_by: default_sort.on_query.sort_by.clone(),
            sort_order: default_sort.on_query.sort_order,
            page: options.default_page,
        },
        search_api: resolve_search_api(endpoint, &options.extra_headers),
        sort_options: resolve_sort_options(sort_catalog),
        aggs,
        layout_options: LayoutOptions {
            list_view: options.list_view,
            grid_view: options.grid_view,
        },
        pagination_options: resolve_pagination(&options.pagination)?,
        default_sorting_on_empty_query_string: default_sort.on_empty_query,
    })
}

/// Generate the wire-ready configuration for one endpoint.
///
/// Same as [`generate_config`], then serialized to JSON with
/// `options.overrides` shallow-merged at the top level: an override
/// replaces the generated value for its key wholesale and keys without an
/// override are left untouched.
pub fn generate(
    app: &AppSearchConfig,
    endpoint_id: &str,
    options: &GenerateOptions,
) -> Result<Value> {
    let config = generate_config(app, endpoint_id, options)?;
    let mut value = serde_json::to_value(&config)
        .map_err(|e| Error::Config(format!("failed to serialize generated config: {e}")))?;

    if !options.overrides.is_empty() {
        if let Value::Object(object) = &mut value {
            for (key, replacement) in &options.overrides {
                object.insert(key.clone(), replacement.clone());
            }
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn app() -> AppSearchConfig {
        toml::from_str(
            r#"
[endpoints.recid]
list_route = "/records/"
default_media_type = "application/json"
search_index = "records"

[sort_options.records.bestmatch]
title = "Best match"
order = 1

[sort_options.records.mostrecent]
title = "Most recent"
order = 2
default_order = "desc"

[default_sort.records]
query = "bestmatch"
noquery = "mostrecent"

[facets.records.type]
terms = { field = "type" }
"#,
        )
        .expect("valid fixture")
    }

    #[test]
    fn unknown_endpoint_fails() {
        let err = generate(&app(), "nope", &GenerateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownEndpoint {
                id: "nope".to_string()
            }
        );
    }

    #[test]
    fn initial_query_state_reflects_default_sort_and_options() {
        let options = GenerateOptions {
            hidden_params: vec![("community".to_string(), "biosyslit".to_string())],
            ..GenerateOptions::default()
        };
        let config = generate_config(&app(), "recid", &options).expect("valid configuration");

        assert_eq!(config.initial_query_state.sort_by, "bestmatch");
        assert_eq!(config.initial_query_state.size, 10);
        assert_eq!(config.initial_query_state.page, 1);
        assert_eq!(config.initial_query_state.layout, Layout::List);
        assert_eq!(
            config.initial_query_state.hidden_params,
            vec![("community".to_string(), "biosyslit".to_string())]
        );
        assert_eq!(
            config.default_sorting_on_empty_query_string.sort_by,
            "mostrecent"
        );
    }

    #[test]
    fn grid_only_options_start_in_grid_layout() {
        let options = GenerateOptions {
            list_view: false,
            grid_view: true,
            ..GenerateOptions::default()
        };
        let config = generate_config(&app(), "recid", &options).expect("valid configuration");
        assert_eq!(config.initial_query_state.layout, Layout::Grid);
        assert!(!config.layout_options.list_view);
        assert!(config.layout_options.grid_view);
    }

    #[test]
    fn invalid_page_size_propagates() {
        let options = GenerateOptions {
            pagination: PaginationSpec {
                choices: vec![10, 20],
                default_choice: 25,
            },
            ..GenerateOptions::default()
        };
        let err = generate(&app(), "recid", &options).unwrap_err();
        assert!(matches!(err, Error::InvalidDefaultPageSize { size: 25, .. }));
    }

    #[test]
    fn overrides_replace_top_level_keys_wholesale() {
        let mut overrides = Map::new();
        overrides.insert("appId".to_string(), json!("custom-search"));
        overrides.insert(
            "layoutOptions".to_string(),
            json!({"listView": false, "gridView": false}),
        );
        let options = GenerateOptions {
            overrides,
            ..GenerateOptions::default()
        };

        let with_overrides = generate(&app(), "recid", &options).expect("valid configuration");
        let without = generate(&app(), "recid", &GenerateOptions::default())
            .expect("valid configuration");

        assert_eq!(with_overrides["appId"], "custom-search");
        assert_eq!(with_overrides["layoutOptions"]["listView"], false);
        // Unrelated keys are untouched.
        assert_eq!(with_overrides["sortOptions"], without["sortOptions"]);
        assert_eq!(with_overrides["searchApi"], without["searchApi"]);
    }

    #[test]
    fn generation_is_idempotent() {
        let options = GenerateOptions::default();
        let first = generate(&app(), "recid", &options).expect("valid configuration");
        let second = generate(&app(), "recid", &options).expect("valid configuration");
        assert_eq!(first, second);
    }

    #[test]
    fn dangling_selection_without_catalog_is_a_missing_key() {
        let app: AppSearchConfig = toml::from_str(
            r#"
[endpoints.bare]
list_route = "/bare/"
default_media_type = "application/json"
search_index = "bare"

[default_sort.bare]
query = "bestmatch"
noquery = "bestmatch"
"#,
        )
        .expect("valid fixture");

        // The selection dangles because no sort catalog exists for the index.
        let err = generate(&app, "bare", &GenerateOptions::default()).unwrap_err();
        assert_eq!(
            err,
            Error::MissingSortKey {
                key: "bestmatch".to_string()
            }
        );
    }
}
