//! Core data types: input catalogs and the generated output schema.
//!
//! The input side mirrors the configuration maps a hosting application
//! declares for its search REST endpoints (sort options, facets, default
//! sort selections, endpoint descriptors). The output side is the exact
//! wire schema consumed by the browser-side search component; field names
//! on output types are fixed with serde renames and must not drift.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A map that preserves document insertion order.
///
/// Catalog iteration order is meaningful here: facets are displayed in the
/// order they were declared, and sort-order ties are broken by declaration
/// order. Serde serializes and deserializes this as a plain JSON/TOML map,
/// keeping the order of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> OrderedMap<T> {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    /// Insert a value, returning the previous value for the key if any.
    ///
    /// Re-inserting an existing key replaces the value in place, keeping
    /// the key's original position.
    pub fn insert(&mut self, key: String, value: T) -> Option<T> {
        for (entry_key, entry_value) in &mut self.entries {
            if *entry_key == key {
                return Some(std::mem::replace(entry_value, value));
            }
        }
        self.entries.push((key, value));
        None
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(String, T)> for OrderedMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for OrderedMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<T> {
            type Value = OrderedMap<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Direction a sort key is applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (the default when a catalog entry does not specify one).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The wire form, `"asc"` or `"desc"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, orderable way to sort search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    /// Human-readable label shown in the sort dropdown.
    pub title: String,
    /// Display priority, lower first. Entries with equal `order` keep their
    /// catalog declaration order.
    #[serde(default)]
    pub order: i64,
    /// Direction applied when this option is selected.
    #[serde(default)]
    pub default_order: SortDirection,
}

/// Sort options of one search index, keyed by sort key.
pub type SortCatalog = OrderedMap<SortOption>;

/// The `terms`-style aggregation a facet is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsAgg {
    /// Document field the aggregation buckets on.
    pub field: String,
}

/// A child-aggregation spec nested under a facet entry.
///
/// Fields left unset inherit from the parent facet at resolve time:
/// `agg_name` defaults to `"inner"` and `title` to the parent's resolved
/// title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildAggSpec {
    /// Explicit aggregation name for the child.
    #[serde(default, rename = "aggName", skip_serializing_if = "Option::is_none")]
    pub agg_name: Option<String>,
    /// Explicit display title for the child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document field the child buckets on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// A further nested child aggregation.
    #[serde(default, rename = "childAgg", skip_serializing_if = "Option::is_none")]
    pub child_agg: Option<Box<ChildAggSpec>>,
}

/// One facet declaration in a facet catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    /// Explicit display title. When absent, the catalog key is capitalized
    /// (first character uppercased, remainder unchanged).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The backing terms aggregation. Required at resolve time; a facet
    /// without one is a malformed spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<TermsAgg>,
    /// Optional nested child aggregation.
    #[serde(default, rename = "childAgg", skip_serializing_if = "Option::is_none")]
    pub child_agg: Option<ChildAggSpec>,
}

/// Facet declarations of one search index, keyed by aggregation name.
/// Declaration order is display order.
pub type FacetCatalog = OrderedMap<FacetOption>;

/// Which sort key applies by default, with and without a query string.
///
/// Both keys must exist in the sort catalog of the associated search
/// index; a dangling key is a configuration error. The wire names `query`
/// and `noquery` match the hosting application's configuration format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSortSelection {
    /// Sort key applied when the user typed a query.
    #[serde(rename = "query")]
    pub on_query: String,
    /// Sort key applied on an empty query string.
    #[serde(rename = "noquery")]
    pub on_empty_query: String,
}

/// Metadata describing where and how to reach a search REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// URL path of the endpoint's list route, e.g. `/records/`.
    pub list_route: String,
    /// MIME type requested via the `Accept` header.
    pub default_media_type: String,
    /// Search index name used to look up the sort/facet catalogs that
    /// apply to this endpoint.
    pub search_index: String,
}

/// Page size choices offered to the user, plus the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSpec {
    /// Page size choices, in display order.
    pub choices: Vec<u32>,
    /// The pre-selected page size. Must be one of `choices`.
    pub default_choice: u32,
}

impl Default for PaginationSpec {
    fn default() -> Self {
        Self {
            choices: vec![10, 20, 50],
            default_choice: 10,
        }
    }
}

//
// Output schema. Wire names below are consumed by name on the JS side and
// must stay bit-exact.
//

/// One entry of the sort dropdown in the generated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortEntry {
    /// Display label.
    pub text: String,
    /// Sort key submitted to the search API.
    pub sort_by: String,
    /// Direction applied when this entry is selected.
    pub sort_order: SortDirection,
}

/// A resolved facet/aggregation display entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggEntry {
    /// Display title of the facet.
    pub title: String,
    /// Aggregation name submitted to the search API.
    pub agg_name: String,
    /// Bucketed document field. Always present on top-level entries;
    /// optional on nested children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Resolved nested child aggregation, if declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_agg: Option<Box<AggEntry>>,
}

/// A resolved `{sortBy, sortOrder}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSortKey {
    /// Sort key.
    pub sort_by: String,
    /// Direction taken from the catalog entry's default order.
    pub sort_order: SortDirection,
}

/// The resolved default sort, with and without a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSort {
    /// Applied when the user typed a query.
    pub on_query: DefaultSortKey,
    /// Applied on an empty query string.
    pub on_empty_query: DefaultSortKey,
}

/// HTTP client settings for the search API, in the shape the JS-side
/// axios wrapper expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchApi {
    /// Axios request settings.
    pub axios: AxiosConfig,
}

/// Axios request settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxiosConfig {
    /// Full URL of the search endpoint, API prefix included.
    pub url: String,
    /// Always `true`: session cookies are sent with search requests.
    pub with_credentials: bool,
    /// Request headers, `Accept` plus any caller-supplied extras.
    pub headers: OrderedMap<String>,
}

/// Result layout the widget starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// List of result rows.
    List,
    /// Grid of result cards.
    Grid,
}

/// The query state the search widget initializes with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialQueryState {
    /// Extra query parameters applied to every request, as key/value pairs.
    pub hidden_params: Vec<(String, String)>,
    /// Initial result layout.
    pub layout: Layout,
    /// Initial page size.
    pub size: u32,
    /// Initial sort key.
    pub sort_by: String,
    /// Initial sort direction.
    pub sort_order: SortDirection,
    /// Initial page number.
    pub page: u32,
}

/// Which result layouts are available to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Whether the list layout is offered.
    pub list_view: bool,
    /// Whether the grid layout is offered.
    pub grid_view: bool,
}

/// One page size choice in the generated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSizeEntry {
    /// Decimal string form of the page size, used as the display label.
    pub text: String,
    /// The page size itself.
    pub value: u32,
}

/// Resolved pagination settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationOptions {
    /// Page size choices, in configured order.
    pub results_per_page: Vec<PageSizeEntry>,
    /// The pre-selected page size.
    pub default_value: u32,
}

/// The complete generated configuration object handed to the search
/// widget. Serializes to the canonical wire schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSearchConfig {
    /// Identifier of the search application instance on the page.
    pub app_id: String,
    /// Initial query state.
    pub initial_query_state: InitialQueryState,
    /// Search API client settings.
    pub search_api: SearchApi,
    /// Sort dropdown entries, ordered by priority.
    pub sort_options: Vec<SortEntry>,
    /// Facet display entries, in catalog order.
    pub aggs: Vec<AggEntry>,
    /// Available result layouts.
    pub layout_options: LayoutOptions,
    /// Pagination settings.
    pub pagination_options: PaginationOptions,
    /// Default sort applied on an empty query string.
    pub default_sorting_on_empty_query_string: DefaultSortKey,
}
