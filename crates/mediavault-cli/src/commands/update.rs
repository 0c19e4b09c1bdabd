//! `mvault update` command implementation
//!
//! Fetches the current record, merges the requested edits, validates the
//! result, and replaces the asset. File-derived fields (type, size, model
//! URL) change only when a replacement file is given; omitting `--file`
//! keeps the existing one.

use crate::commands::upload::{file_meta, model_url_for};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::parse_tags;
use colored::Colorize;
use mediavault_client::AssetClient;
use mediavault_core::{validate_update, AssetDraft};
use std::path::Path;
use tracing::info;

/// Validate and apply an edit to an existing asset
#[allow(clippy::too_many_arguments)]
pub async fn run(
    config: &Config,
    id: &str,
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    tags: Option<&str>,
    file: Option<&Path>,
) -> Result<()> {
    let client = AssetClient::new(config.client_config())?;
    let mut asset = client.get_asset(id).await?;

    if let Some(name) = name {
        asset.name = name;
    }
    if let Some(category) = category {
        asset.category = category;
    }
    if let Some(description) = description {
        asset.description = description;
    }
    if let Some(tags) = tags {
        asset.tags = parse_tags(tags);
    }

    let meta = file.map(file_meta).transpose()?;

    let draft = AssetDraft {
        name: asset.name.clone(),
        category: asset.category.clone(),
        description: asset.description.clone(),
        file: meta.clone(),
    };

    let rules = config.load_rules()?;
    let errors = validate_update(&draft, &rules);
    if !errors.is_empty() {
        return Err(CliError::Validation(errors));
    }

    if let (Some(meta), Some(path)) = (meta, file) {
        asset.file_type = meta.extension().unwrap_or_else(|| "unknown".to_string());
        asset.file_size = meta.size_bytes;
        asset.model_url = model_url_for(path, &meta);
    }

    let updated = client.update_asset(id, &asset).await?;

    info!(asset_id = %updated.id, name = %updated.name, "Asset updated");
    println!("{} {} (id: {})", "Updated".green().bold(), updated.name, updated.id);

    Ok(())
}
