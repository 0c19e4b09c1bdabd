//! `mvault list` command implementation
//!
//! Fetches the full collection, runs the query pipeline locally, and renders
//! the result.

use crate::config::Config;
use crate::error::{CliError, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use mediavault_client::AssetClient;
use mediavault_common::format::{format_date, format_file_size};
use mediavault_common::types::{Asset, FilterState, SortKey, SortOrder};
use tracing::debug;

/// List assets filtered and sorted by the given query spec
pub async fn run(
    config: &Config,
    terms: Vec<String>,
    category: Option<String>,
    sort: &str,
    order: &str,
    format: &str,
) -> Result<()> {
    let sort_by: SortKey = sort.parse().map_err(CliError::Common)?;
    let sort_order: SortOrder = order.parse().map_err(CliError::Common)?;

    let filters = FilterState {
        search_query: terms.join(" "),
        category: category.unwrap_or_default(),
        sort_by,
        sort_order,
    };

    let client = AssetClient::new(config.client_config())?;
    let assets = client.list_assets().await?;
    let visible = mediavault_core::query(&assets, &filters);

    debug!(
        total = assets.len(),
        visible = visible.len(),
        sort = %filters.sort_by,
        order = %filters.sort_order,
        "Query pipeline applied"
    );

    match format {
        "table" => print_table(&visible),
        "compact" => print_compact(&visible),
        "json" => println!("{}", serde_json::to_string_pretty(&visible)?),
        other => {
            return Err(CliError::config(format!(
                "Unknown output format: {other}. Expected table, compact, or json"
            )))
        }
    }

    if format != "json" {
        println!();
        println!("{} of {} assets shown", visible.len(), assets.len());
    }

    Ok(())
}

fn print_table(assets: &[Asset]) {
    if assets.is_empty() {
        println!("No matching assets.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Category", "Type", "Size", "Uploaded", "Tags"]);

    for asset in assets {
        table.add_row(vec![
            asset.id.clone(),
            asset.name.clone(),
            asset.category.clone(),
            asset.file_type.clone(),
            format_file_size(asset.file_size),
            format_date(&asset.upload_date),
            asset.tags.join(", "),
        ]);
    }

    println!("{table}");
}

fn print_compact(assets: &[Asset]) {
    for asset in assets {
        println!(
            "{}  {} ({}) {} {}",
            asset.id.dimmed(),
            asset.name.green(),
            asset.category,
            format_file_size(asset.file_size),
            format_date(&asset.upload_date).dimmed(),
        );
    }
}
