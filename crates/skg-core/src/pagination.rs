//! Pagination resolution.

use crate::error::{Error, Result};
use crate::types::{PageSizeEntry, PaginationOptions, PaginationSpec};

/// Resolve a pagination spec into the page size choices of the generated
/// configuration.
///
/// The default choice must be one of the configured choices; anything else
/// fails with [`Error::InvalidDefaultPageSize`]. This is a precondition
/// check, not a clamp: an invalid default is a misconfigured application
/// and is surfaced as such.
pub fn resolve_pagination(spec: &PaginationSpec) -> Result<PaginationOptions> {
    if !spec.choices.contains(&spec.default_choice) {
        return Err(Error::InvalidDefaultPageSize {
            size: spec.default_choice,
            choices: spec.choices.clone(),
        });
    }

    Ok(PaginationOptions {
        results_per_page: spec
            .choices
            .iter()
            .map(|choice| PageSizeEntry {
                text: choice.to_string(),
                value: *choice,
            })
            .collect(),
        default_value: spec.default_choice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_choices_with_decimal_labels() {
        let spec = PaginationSpec {
            choices: vec![10, 20, 50],
            default_choice: 10,
        };

        let options = resolve_pagination(&spec).expect("valid spec");
        assert_eq!(
            options,
            PaginationOptions {
                results_per_page: vec![
                    PageSizeEntry {
                        text: "10".to_string(),
                        value: 10
                    },
                    PageSizeEntry {
                        text: "20".to_string(),
                        value: 20
                    },
                    PageSizeEntry {
                        text: "50".to_string(),
                        value: 50
                    },
                ],
                default_value: 10,
            }
        );
    }

    #[test]
    fn default_outside_choices_is_an_error() {
        let spec = PaginationSpec {
            choices: vec![10, 20, 50],
            default_choice: 15,
        };

        let err = resolve_pagination(&spec).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDefaultPageSize {
                size: 15,
                choices: vec![10, 20, 50],
            }
        );
    }

    #[test]
    fn empty_choices_reject_any_default() {
        let spec = PaginationSpec {
            choices: vec![],
            default_choice: 10,
        };
        assert!(resolve_pagination(&spec).is_err());
    }

    #[test]
    fn default_spec_is_valid() {
        let options = resolve_pagination(&PaginationSpec::default()).expect("default is valid");
        assert_eq!(options.default_value, 10);
        assert_eq!(options.results_per_page.len(), 3);
    }
}
