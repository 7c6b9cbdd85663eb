//! Command implementations for the `skg` CLI.

pub mod check;
pub mod generate;

use anyhow::{anyhow, Result};

/// Split a repeatable `KEY=VALUE` argument into its parts.
pub fn parse_key_value(raw: &str) -> Result<(String, String)> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals() {
        let (key, value) = parse_key_value("community=biosyslit").expect("valid pair");
        assert_eq!(key, "community");
        assert_eq!(value, "biosyslit");

        let (key, value) = parse_key_value("q=type=dataset").expect("valid pair");
        assert_eq!(key, "q");
        assert_eq!(value, "type=dataset");
    }

    #[test]
    fn rejects_missing_equals() {
        assert!(parse_key_value("community").is_err());
    }
}
