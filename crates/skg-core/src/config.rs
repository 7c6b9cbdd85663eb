//! Application-wide search configuration.
//!
//! The hosting application declares, once at startup, which search REST
//! endpoints exist and which sort/facet catalogs apply to each search
//! index. This module holds that declaration as a plain value type:
//! generation reads it, never mutates it, and never reaches for ambient
//! global state.
//!
//! ## File format
//!
//! The configuration is a TOML (or JSON) document with four maps:
//!
//! ```toml
//! [endpoints.recid]
//! list_route = "/records/"
//! default_media_type = "application/json"
//! search_index = "records"
//!
//! [sort_options.records.bestmatch]
//! title = "Best match"
//! order = 1
//!
//! [sort_options.records.mostrecent]
//! title = "Most recent"
//! order = 2
//! default_order = "desc"
//!
//! [default_sort.records]
//! query = "bestmatch"
//! noquery = "mostrecent"
//!
//! [facets.records.type]
//! terms = { field = "type" }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::generate::{generate, GenerateOptions};
use crate::types::{
    DefaultSortSelection, EndpointDescriptor, FacetCatalog, OrderedMap, SortCatalog,
};

/// The read-only configuration maps generation draws from.
///
/// `sort_options`, `default_sort` and `facets` are keyed by search index
/// name; `endpoints` by endpoint id. An index absent from a catalog map
/// simply has no entries of that kind — that is valid configuration, not
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSearchConfig {
    /// Endpoint descriptors by endpoint id.
    pub endpoints: OrderedMap<EndpointDescriptor>,
    /// Sort catalogs by search index name.
    pub sort_options: OrderedMap<SortCatalog>,
    /// Default-sort selections by search index name.
    pub default_sort: OrderedMap<DefaultSortSelection>,
    /// Facet catalogs by search index name.
    pub facets: OrderedMap<FacetCatalog>,
}

impl AppSearchConfig {
    /// Load the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Look up an endpoint descriptor by id.
    ///
    /// Fails with [`Error::UnknownEndpoint`] when the id is not declared.
    pub fn endpoint(&self, id: &str) -> Result<&EndpointDescriptor> {
        self.endpoints
            .get(id)
            .ok_or_else(|| Error::UnknownEndpoint { id: id.to_string() })
    }

    /// Sort catalog of a search index, if one is declared.
    #[must_use]
    pub fn sort_catalog(&self, search_index: &str) -> Option<&SortCatalog> {
        self.sort_options.get(search_index)
    }

    /// Default-sort selection of a search index.
    ///
    /// Every endpoint with sort options needs one; its absence is a
    /// configuration error.
    pub fn default_sort_selection(&self, search_index: &str) -> Result<&DefaultSortSelection> {
        self.default_sort.get(search_index).ok_or_else(|| {
            Error::Config(format!(
                "no default sort configured for search index '{search_index}'"
            ))
        })
    }

    /// Facet catalog of a search index, if one is declared.
    #[must_use]
    pub fn facet_catalog(&self, search_index: &str) -> Option<&FacetCatalog> {
        self.facets.get(search_index)
    }

    /// Run every declared endpoint through the generator with default
    /// options and collect the failures.
    ///
    /// Intended for application startup: an empty result means every
    /// endpoint can produce a complete configuration; anything else names
    /// the endpoints that cannot, with the error for each.
    #[must_use]
    pub fn validate(&self) -> Vec<(String, Error)> {
        let options = GenerateOptions::default();
        let failures: Vec<(String, Error)> = self
            .endpoints
            .keys()
            .filter_map(|id| {
                generate(self, id, &options)
                    .err()
                    .map(|error| (id.to_string(), error))
            })
            .collect();
        debug!(
            endpoints = self.endpoints.len(),
            failures = failures.len(),
            "validated search endpoint configuration"
        );
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"
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
"#;

    #[test]
    fn parses_toml_fixture() {
        let config: AppSearchConfig = toml::from_str(FIXTURE).expect("valid fixture");
        assert_eq!(config.endpoints.len(), 1);
        assert_eq!(
            config.endpoint("recid").expect("declared").search_index,
            "records"
        );
        let catalog = config.sort_catalog("records").expect("declared");
        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, vec!["bestmatch", "mostrecent"]);
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let config: AppSearchConfig = toml::from_str(FIXTURE).expect("valid fixture");
        let err = config.endpoint("missing").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownEndpoint {
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn missing_default_sort_is_an_error() {
        let config: AppSearchConfig = toml::from_str(FIXTURE).expect("valid fixture");
        assert!(config.default_sort_selection("records").is_ok());
        assert!(matches!(
            config.default_sort_selection("other"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(FIXTURE.as_bytes()).expect("write fixture");

        let config = AppSearchConfig::load(file.path()).expect("loadable");
        assert!(config.facet_catalog("records").is_some());
    }

    #[test]
    fn load_surfaces_parse_failures() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"endpoints = 3").expect("write fixture");

        let err = AppSearchConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validate_reports_dangling_sort_key() {
        let broken = FIXTURE.replace("noquery = \"mostrecent\"", "noquery = \"oldest\"");
        let config: AppSearchConfig = toml::from_str(&broken).expect("valid toml");

        let failures = config.validate();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, "recid");
        assert_eq!(
            failures[0].1,
            Error::MissingSortKey {
                key: "oldest".to_string()
            }
        );
    }

    #[test]
    fn validate_passes_clean_configuration() {
        let config: AppSearchConfig = toml::from_str(FIXTURE).expect("valid fixture");
        assert!(config.validate().is_empty());
    }
}
