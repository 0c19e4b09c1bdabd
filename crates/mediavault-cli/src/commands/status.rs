//! `mvault status` command implementation
//!
//! Per-category counts and total size of the asset store.

use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use mediavault_client::AssetClient;
use mediavault_common::format::format_file_size;
use mediavault_core::query::categories;

/// Show a summary of the asset store
pub async fn run(config: &Config) -> Result<()> {
    let client = AssetClient::new(config.client_config())?;
    let assets = client.list_assets().await?;

    if assets.is_empty() {
        println!("The asset store is empty.");
        println!("Run 'mvault upload' to add an asset.");
        return Ok(());
    }

    println!("{}", "Assets by category:".cyan().bold());
    println!();

    for category in categories(&assets) {
        let in_category: Vec<_> = assets.iter().filter(|a| a.category == category).collect();
        let size: u64 = in_category.iter().map(|a| a.file_size).sum();
        println!(
            "  {:<12} {:>4}  {}",
            category.green(),
            in_category.len(),
            format_file_size(size)
        );
    }

    let total_size: u64 = assets.iter().map(|a| a.file_size).sum();
    println!();
    println!("{}", "Summary:".cyan().bold());
    println!("  Total assets: {}", assets.len());
    println!("  Total size:   {}", format_file_size(total_size));
    println!("  Store URL:    {}", config.server_url);

    Ok(())
}
