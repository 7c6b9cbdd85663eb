//! Check command implementation - validate endpoint configuration.
//!
//! Runs one endpoint (or the whole catalog) through the generator with
//! default options and reports every configuration error. Intended to run
//! in CI or at deploy time, so a misconfigured endpoint fails fast
//! instead of surfacing on a user-facing search page.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use skg_core::{generate, AppSearchConfig, GenerateOptions};

use crate::cli::CheckArgs;

/// Execute `skg check`.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let app = AppSearchConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let failures: Vec<(String, skg_core::Error)> = match &args.endpoint {
        Some(endpoint) => generate(&app, endpoint, &GenerateOptions::default())
            .err()
            .map(|error| (endpoint.clone(), error))
            .into_iter()
            .collect(),
        None => app.validate(),
    };

    let checked: Vec<&str> = match &args.endpoint {
        Some(endpoint) => vec![endpoint.as_str()],
        None => app.endpoints.keys().collect(),
    };
    for endpoint in checked {
        match failures.iter().find(|(id, _)| id == endpoint) {
            Some((_, error)) => {
                println!(
                    "{} {}: {} [{}]",
                    "✗".red(),
                    endpoint,
                    error,
                    error.category()
                );
            },
            None => println!("{} {}", "✓".green(), endpoint),
        }
    }

    if !failures.is_empty() {
        bail!(
            "{} of {} endpoint(s) failed validation",
            failures.len(),
            if args.endpoint.is_some() {
                1
            } else {
                app.endpoints.len()
            }
        );
    }
    Ok(())
}
