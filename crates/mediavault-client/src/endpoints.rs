//! Endpoint URL builders
//!
//! Helper functions to construct asset store URLs. Ids are opaque strings
//! chosen by the backend, so they are percent-encoded before being placed
//! in a path segment.

/// Build the asset collection URL (list and create)
pub fn assets_url(base_url: &str) -> String {
    format!("{}/assets", base_url.trim_end_matches('/'))
}

/// Build a single-asset URL (get, update, delete)
pub fn asset_url(base_url: &str, id: &str) -> String {
    format!("{}/{}", assets_url(base_url), urlencoding::encode(id))
}
