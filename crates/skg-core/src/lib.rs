//! # skg-core
//!
//! Generates the configuration object a browser-side search widget is
//! initialized with, from the declarative search-endpoint metadata a
//! hosting application declares at startup: sort fields, facet
//! definitions, pagination choices and default ordering.
//!
//! ## Architecture
//!
//! Generation is a pure, synchronous transform composed of independent
//! field resolvers combined by one orchestrator:
//!
//! - [`sort`]: orders the sort catalog by priority and resolves the
//!   default sort selection against it
//! - [`facets`]: derives facet display entries in catalog order, with
//!   title fallbacks and child-aggregation inheritance
//! - [`pagination`]: validates and formats the page size choices
//! - [`api`]: builds the endpoint URL and request headers
//! - [`generate`]: looks up the endpoint, runs the resolvers and
//!   assembles the result, applying caller overrides last
//! - [`legacy`]: the older flat output format, kept as a separate
//!   compatibility entry point
//!
//! Configuration maps are passed in explicitly ([`AppSearchConfig`]);
//! nothing reads process-wide state, so the generator can be called
//! concurrently from request handlers without synchronization.
//!
//! ## Quick start
//!
//! ```rust
//! use skg_core::{generate, AppSearchConfig, GenerateOptions};
//!
//! let app: AppSearchConfig = toml::from_str(r#"
//! [endpoints.recid]
//! list_route = "/records/"
//! default_media_type = "application/json"
//! search_index = "records"
//!
//! [sort_options.records.bestmatch]
//! title = "Best match"
//! order = 1
//!
//! [default_sort.records]
//! query = "bestmatch"
//! noquery = "bestmatch"
//! "#)?;
//!
//! let config = generate(&app, "recid", &GenerateOptions::default())?;
//! assert_eq!(config["searchApi"]["axios"]["url"], "/api/records/");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error handling
//!
//! Every failure is a configuration error ([`Error`]): it indicates a
//! misconfigured application, never a transient condition. Errors surface
//! synchronously with no partial result and are never silently corrected;
//! [`AppSearchConfig::validate`] runs the whole endpoint catalog through
//! the generator so misconfiguration is caught at startup rather than at
//! request time.

/// Endpoint URL and request header resolution
pub mod api;
/// Application-wide configuration maps and startup validation
pub mod config;
/// Error types and result alias
pub mod error;
/// Facet/aggregation display entry resolution
pub mod facets;
/// Orchestration: options, assembly and overrides
pub mod generate;
/// Legacy flat output format (compatibility shim)
pub mod legacy;
/// Pagination choice validation and formatting
pub mod pagination;
/// Sort option ordering and default sort resolution
pub mod sort;
/// Core data types and the generated output schema
pub mod types;

pub use api::{resolve_search_api, API_PREFIX};
pub use config::AppSearchConfig;
pub use error::{Error, Result};
pub use facets::resolve_facets;
pub use generate::{generate, generate_config, GenerateOptions};
pub use legacy::{format_config, format_sortoptions, sorted_options, LegacySearchConfig};
pub use pagination::resolve_pagination;
pub use sort::{resolve_default_sort, resolve_sort_options};
pub use types::*;
