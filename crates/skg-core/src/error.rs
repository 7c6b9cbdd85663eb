//! Error types and result alias for skg-core.
//!
//! Every failure in this crate is a configuration error: the hosting
//! application supplied endpoint metadata that is internally inconsistent
//! or incomplete. None of these conditions is transient, so nothing here
//! is ever retried or silently corrected. Callers are expected to surface
//! these errors at application startup (see
//! [`AppSearchConfig::validate`](crate::AppSearchConfig::validate)) rather
//! than mask them at request time.

use thiserror::Error;

/// The error type for configuration generation.
///
/// All public functions in skg-core return `Result<T, Error>`. Variants
/// carry enough context to point an operator at the offending entry in the
/// application configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested endpoint id has no descriptor in the endpoint catalog.
    #[error("unknown search endpoint '{id}'")]
    UnknownEndpoint {
        /// Endpoint id that was requested.
        id: String,
    },

    /// A default-sort selection names a key that is absent from the sort
    /// option catalog of the associated search index.
    #[error("default sort key '{key}' is not defined in the sort option catalog")]
    MissingSortKey {
        /// Sort key that could not be resolved.
        key: String,
    },

    /// The default page size is not one of the configured page size choices.
    ///
    /// This is a hard precondition: the value is never clamped to the
    /// nearest choice.
    #[error("default page size {size} is not one of the configured choices {choices:?}")]
    InvalidDefaultPageSize {
        /// The configured default page size.
        size: u32,
        /// The configured page size choices.
        choices: Vec<u32>,
    },

    /// A facet entry is structurally invalid (e.g. it carries no `terms`
    /// aggregation to derive the field from).
    #[error("malformed facet spec '{key}': {reason}")]
    MalformedFacetSpec {
        /// Facet catalog key of the offending entry.
        key: String,
        /// Human-readable description of what is missing or wrong.
        reason: String,
    },

    /// The application configuration file could not be read or parsed, or
    /// a required section is missing.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Useful for grouping errors in logs or metrics without matching on
    /// the full variant.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::UnknownEndpoint { .. } => "unknown_endpoint",
            Self::MissingSortKey { .. } => "missing_sort_key",
            Self::InvalidDefaultPageSize { .. } => "invalid_default_page_size",
            Self::MalformedFacetSpec { .. } => "malformed_facet_spec",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_values() {
        let err = Error::InvalidDefaultPageSize {
            size: 15,
            choices: vec![10, 20, 50],
        };
        let message = err.to_string();
        assert!(message.contains("15"));
        assert!(message.contains("[10, 20, 50]"));

        let err = Error::MissingSortKey {
            key: "mostrecent".to_string(),
        };
        assert!(err.to_string().contains("mostrecent"));
    }

    #[test]
    fn categories_are_stable() {
        let cases = vec![
            (
                Error::UnknownEndpoint {
                    id: "recid".to_string(),
                },
                "unknown_endpoint",
            ),
            (
                Error::MissingSortKey {
                    key: "x".to_string(),
                },
                "missing_sort_key",
            ),
            (
                Error::InvalidDefaultPageSize {
                    size: 7,
                    choices: vec![10],
                },
                "invalid_default_page_size",
            ),
            (
                Error::MalformedFacetSpec {
                    key: "type".to_string(),
                    reason: "missing terms".to_string(),
                },
                "malformed_facet_spec",
            ),
            (Error::Config("bad toml".to_string()), "config"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.category(), expected);
        }
    }
}
