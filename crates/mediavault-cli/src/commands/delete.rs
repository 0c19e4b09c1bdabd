//! `mvault delete` command implementation

use crate::config::Config;
use crate::error::Result;
use mediavault_client::AssetClient;
use tracing::info;

/// Delete an asset by id
pub async fn run(config: &Config, id: &str) -> Result<()> {
    let client = AssetClient::new(config.client_config())?;
    client.delete_asset(id).await?;

    info!(asset_id = %id, "Asset deleted");
    println!("Deleted asset {id}");

    Ok(())
}
