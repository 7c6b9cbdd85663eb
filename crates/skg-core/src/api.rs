//! Search API endpoint resolution.

use crate::types::{AxiosConfig, EndpointDescriptor, OrderedMap, SearchApi};

/// Path prefix under which the REST API is mounted.
pub const API_PREFIX: &str = "/api";

/// Resolve the HTTP client settings for a search endpoint.
///
/// The endpoint URL is the descriptor's list route behind [`API_PREFIX`].
/// Headers are the computed `Accept` header (from the endpoint's default
/// media type) merged with caller-supplied extras; extras win on key
/// collision. Credentials are always included so the session cookie
/// travels with search requests.
#[must_use]
pub fn resolve_search_api(
    endpoint: &EndpointDescriptor,
    extra_headers: &OrderedMap<String>,
) -> SearchApi {
    let mut headers = OrderedMap::new();
    headers.insert("Accept".to_string(), endpoint.default_media_type.clone());
    for (key, value) in extra_headers.iter() {
        headers.insert(key.to_string(), value.clone());
    }

    SearchApi {
        axios: AxiosConfig {
            url: format!("{API_PREFIX}{}", endpoint.list_route),
            with_credentials: true,
            headers,
        },
    }
}
