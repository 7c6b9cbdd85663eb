//! Generate command implementation - emit the configuration for one
//! endpoint as JSON on stdout.

use anyhow::{anyhow, Context, Result};
use skg_core::{generate, AppSearchConfig, GenerateOptions, OrderedMap, PaginationSpec};

use super::parse_key_value;
use crate::cli::GenerateArgs;

/// Execute `skg generate`.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let app = AppSearchConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let options = build_options(args)?;

    let value = generate(&app, &args.endpoint, &options)
        .with_context(|| format!("generating configuration for '{}'", args.endpoint))?;

    let rendered = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{rendered}");
    Ok(())
}

fn build_options(args: &GenerateArgs) -> Result<GenerateOptions> {
    let mut options = GenerateOptions {
        app_id: args.app_id.clone(),
        list_view: !args.no_list_view,
        grid_view: args.grid_view,
        ..GenerateOptions::default()
    };

    let mut pagination = PaginationSpec::default();
    if let Some(choices) = &args.page_sizes {
        pagination.choices.clone_from(choices);
        // A custom choice list with no explicit default pre-selects the
        // first choice rather than guessing.
        pagination.default_choice = *choices
            .first()
            .ok_or_else(|| anyhow!("--page-sizes needs at least one value"))?;
    }
    if let Some(size) = args.page_size {
        pagination.default_choice = size;
    }
    options.pagination = pagination;

    options.hidden_params = args
        .hidden_params
        .iter()
        .map(|raw| parse_key_value(raw))
        .collect::<Result<Vec<_>>>()
        .context("parsing --hidden-param")?;

    options.extra_headers = args
        .headers
        .iter()
        .map(|raw| parse_key_value(raw))
        .collect::<Result<OrderedMap<String>>>()
        .context("parsing --header")?;

    if let Some(raw) = &args.overrides {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("parsing --override JSON")?;
        options.overrides = match value {
            serde_json::Value::Object(map) => map,
            _ => return Err(anyhow!("--override must be a JSON object")),
        };
    }

    Ok(options)
}
