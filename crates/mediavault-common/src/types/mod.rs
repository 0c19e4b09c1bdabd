//! Core domain types for MediaVault
//!
//! Wire format matches the asset store's REST contract: JSON bodies with
//! camelCase field names.

use serde::{Deserialize, Serialize};

/// The fixed set of categories the dashboard knows about.
///
/// `Asset::category` is deliberately kept as a plain string: records written
/// by older clients may carry categories outside this list, and downstream
/// logic (validation, filtering) must tolerate them rather than fail to
/// deserialize.
pub const CATEGORIES: &[&str] = &["3D Model", "Audio", "Video", "Image"];

/// A managed creative file plus its metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Opaque identifier assigned by the repository on creation
    pub id: String,

    /// Display name
    pub name: String,

    /// Category label (see [`CATEGORIES`])
    pub category: String,

    /// Lowercase file extension, no leading dot
    pub file_type: String,

    /// File size in bytes
    pub file_size: u64,

    /// Upload timestamp, RFC 3339
    pub upload_date: String,

    /// Preview image URL
    pub thumbnail_url: String,

    /// Full-resolution resource URL, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,

    /// Free-text labels; order is display-relevant, duplicates allowed
    pub tags: Vec<String>,

    /// Free-text description
    pub description: String,
}

/// An asset record before the repository has assigned it an id.
///
/// This is the POST body for create; the repository echoes back a full
/// [`Asset`] including the new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub category: String,
    pub file_type: String,
    pub file_size: u64,
    pub upload_date: String,
    pub thumbnail_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    pub tags: Vec<String>,
    pub description: String,
}

/// Sort key for the query pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive lexicographic on name
    Name,
    /// Chronological on upload date
    #[default]
    Date,
    /// Numeric on file size
    Size,
    /// No-op sort: every pair compares equal, input order is kept.
    /// Unknown wire values land here so a stale or malformed query spec
    /// degrades to "unsorted" instead of failing.
    Unspecified,
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "name" => SortKey::Name,
            "date" => SortKey::Date,
            "size" => SortKey::Size,
            _ => SortKey::Unspecified,
        })
    }
}

impl std::str::FromStr for SortKey {
    type Err = crate::error::VaultError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "date" => Ok(SortKey::Date),
            "size" => Ok(SortKey::Size),
            _ => Err(crate::error::VaultError::parse(format!(
                "Invalid sort key: {s}. Expected one of: name, date, size"
            ))),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Date => write!(f, "date"),
            SortKey::Size => write!(f, "size"),
            SortKey::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = crate::error::VaultError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(crate::error::VaultError::parse(format!(
                "Invalid sort order: {s}. Expected 'asc' or 'desc'"
            ))),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Query spec for the asset list: search, category filter, and sort.
///
/// Owned by the caller, passed by reference into the query engine; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Free-text search; empty or whitespace means no search filter
    #[serde(default)]
    pub search_query: String,

    /// Exact category filter; empty means no category filter
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub sort_by: SortKey,

    #[serde(default)]
    pub sort_order: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        // The dashboard's default view: newest uploads first.
        Self {
            search_query: String::new(),
            category: String::new(),
            sort_by: SortKey::Date,
            sort_order: SortOrder::Desc,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_wire_field_names() {
        let json = serde_json::json!({
            "id": "a1",
            "name": "Robot",
            "category": "3D Model",
            "fileType": "glb",
            "fileSize": 2048,
            "uploadDate": "2026-01-15T10:00:00Z",
            "thumbnailUrl": "https://example.com/t.png",
            "modelUrl": "https://example.com/robot.glb",
            "tags": ["robot", "sci-fi"],
            "description": "A small robot model"
        });

        let asset: Asset = serde_json::from_value(json).unwrap();
        assert_eq!(asset.file_type, "glb");
        assert_eq!(asset.file_size, 2048);
        assert_eq!(asset.model_url.as_deref(), Some("https://example.com/robot.glb"));
    }

    #[test]
    fn test_asset_model_url_omitted_when_absent() {
        let asset = Asset {
            id: "a1".to_string(),
            name: "Photo".to_string(),
            category: "Image".to_string(),
            file_type: "jpg".to_string(),
            file_size: 100,
            upload_date: "2026-01-15T10:00:00Z".to_string(),
            thumbnail_url: "https://example.com/t.png".to_string(),
            model_url: None,
            tags: vec![],
            description: "A photo".to_string(),
        };

        let value = serde_json::to_value(&asset).unwrap();
        assert!(value.get("modelUrl").is_none());
        assert!(value.get("fileType").is_some());
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("DATE".parse::<SortKey>().unwrap(), SortKey::Date);
        assert_eq!("Size".parse::<SortKey>().unwrap(), SortKey::Size);
        assert!("nonsense".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_unknown_wire_value_degrades() {
        let key: SortKey = serde_json::from_str("\"popularity\"").unwrap();
        assert_eq!(key, SortKey::Unspecified);
    }

    #[test]
    fn test_sort_order_from_str() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_filter_state_default() {
        let filters = FilterState::default();
        assert!(filters.search_query.is_empty());
        assert!(filters.category.is_empty());
        assert_eq!(filters.sort_by, SortKey::Date);
        assert_eq!(filters.sort_order, SortOrder::Desc);
    }
}
