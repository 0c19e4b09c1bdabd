//! `mvault upload` command implementation
//!
//! Validate-then-create: the draft runs through the form validator before
//! any network call. Validation failures are printed per field and the
//! store is never contacted.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::preview::{self, StagedPreview};
use crate::parse_tags;
use chrono::Utc;
use colored::Colorize;
use mediavault_client::AssetClient;
use mediavault_common::types::NewAsset;
use mediavault_core::{validate_create, AssetDraft, FileMeta};
use std::path::Path;
use tracing::{info, warn};

/// Validate and upload a new asset
pub async fn run(
    config: &Config,
    file: &Path,
    name: String,
    category: String,
    description: String,
    tags: Option<&str>,
) -> Result<()> {
    let meta = file_meta(file)?;

    let draft = AssetDraft {
        name,
        category,
        description,
        file: Some(meta.clone()),
    };

    let rules = config.load_rules()?;
    let errors = validate_create(&draft, &rules);
    if !errors.is_empty() {
        return Err(CliError::Validation(errors));
    }

    // Stage a scoped preview copy for 3D models; the copy is released when
    // `staged` drops at the end of this block. A preview failure only prints
    // a fallback line, the upload proceeds regardless.
    if matches!(meta.extension().as_deref(), Some("glb")) {
        match StagedPreview::stage(file) {
            Ok(staged) => match preview::inspect_glb(staged.path()) {
                Ok(summary) => println!(
                    "GLB preview: version {}, {} bytes declared",
                    summary.version, summary.declared_length
                ),
                Err(e) => {
                    warn!(error = %e, file = %file.display(), "Model preview failed");
                    println!("Preview unavailable: {e}");
                }
            },
            Err(e) => {
                warn!(error = %e, file = %file.display(), "Could not stage preview copy");
                println!("Preview unavailable: {e}");
            }
        }
    }

    let new_asset = build_new_asset(&draft, &meta, file, tags);

    let client = AssetClient::new(config.client_config())?;
    let created = client.create_asset(&new_asset).await?;

    info!(asset_id = %created.id, name = %created.name, "Asset created");
    println!(
        "{} {} (id: {})",
        "Uploaded".green().bold(),
        created.name,
        created.id
    );

    Ok(())
}

/// Stat a local file into the validator's file handle
pub(crate) fn file_meta(path: &Path) -> Result<FileMeta> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let metadata = std::fs::metadata(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(FileMeta::new(file_name, metadata.len()))
}

/// A model URL is recorded for model formats the viewer can load; other
/// asset kinds only get a thumbnail.
pub(crate) fn model_url_for(path: &Path, meta: &FileMeta) -> Option<String> {
    match meta.extension().as_deref() {
        Some("glb") | Some("gltf") => {
            let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
            Some(format!("file://{}", absolute.display()))
        }
        _ => None,
    }
}

fn build_new_asset(draft: &AssetDraft, meta: &FileMeta, path: &Path, tags: Option<&str>) -> NewAsset {
    let thumbnail_text: String = draft.name.chars().take(10).collect();

    NewAsset {
        name: draft.name.clone(),
        category: draft.category.clone(),
        file_type: meta.extension().unwrap_or_else(|| "unknown".to_string()),
        file_size: meta.size_bytes,
        upload_date: Utc::now().to_rfc3339(),
        thumbnail_url: format!(
            "https://placehold.co/300x300/6366f1/white?text={}",
            urlencoding::encode(&thumbnail_text)
        ),
        model_url: model_url_for(path, meta),
        tags: tags.map(parse_tags).unwrap_or_default(),
        description: draft.description.clone(),
    }
}
