//! `mvault show` command implementation

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use mediavault_client::AssetClient;
use mediavault_common::format::{format_date, format_file_size};

/// Show a single asset record
pub async fn run(config: &Config, id: &str, json: bool) -> Result<()> {
    let client = AssetClient::new(config.client_config())?;
    let asset = client.get_asset(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&asset)?);
        return Ok(());
    }

    println!("{}", asset.name.green().bold());
    println!("  Id:          {}", asset.id);
    println!("  Category:    {}", asset.category);
    println!("  File type:   {}", asset.file_type);
    println!("  Size:        {}", format_file_size(asset.file_size));
    println!("  Uploaded:    {}", format_date(&asset.upload_date));
    println!("  Thumbnail:   {}", asset.thumbnail_url);
    if let Some(ref model_url) = asset.model_url {
        println!("  Model:       {model_url}");
    }
    if !asset.tags.is_empty() {
        println!("  Tags:        {}", asset.tags.join(", "));
    }
    println!("  Description: {}", asset.description);

    Ok(())
}
