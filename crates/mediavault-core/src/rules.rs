//! Category→extension rule table
//!
//! Which file extensions each category accepts at the write boundary. The
//! table is explicit data rather than hard-coded branches so deployments can
//! override it (e.g. whether "3D Model" also accepts `.gltf`, which has
//! flip-flopped historically). The default table is the conservative one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Allowed file extensions per category.
///
/// Extensions are stored lowercase without a leading dot. Categories absent
/// from the table have no extension restriction.
///
/// Serializes as a plain map, so an override file is just:
///
/// ```toml
/// "3D Model" = ["glb", "gltf"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionRules {
    rules: BTreeMap<String, Vec<String>>,
}

impl Default for ExtensionRules {
    fn default() -> Self {
        let mut rules = BTreeMap::new();
        rules.insert("3D Model".to_string(), to_vec(&["glb"]));
        rules.insert("Audio".to_string(), to_vec(&["mp3", "wav", "ogg", "m4a"]));
        rules.insert("Video".to_string(), to_vec(&["mp4", "webm", "mov", "avi"]));
        rules.insert(
            "Image".to_string(),
            to_vec(&["jpg", "jpeg", "png", "gif", "webp", "svg"]),
        );
        Self { rules }
    }
}

impl ExtensionRules {
    /// An empty table: no category restricts extensions.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Allowed extensions for a category, or `None` when the category is
    /// not covered by the table.
    pub fn allowed(&self, category: &str) -> Option<&[String]> {
        self.rules.get(category).map(Vec::as_slice)
    }

    /// Whether `extension` (without dot, any case) is accepted for
    /// `category`. Categories outside the table accept everything.
    pub fn is_allowed(&self, category: &str, extension: &str) -> bool {
        match self.allowed(category) {
            Some(allowed) => {
                let extension = extension.to_lowercase();
                allowed.iter().any(|e| *e == extension)
            }
            None => true,
        }
    }

    /// Replace the extension list for a category.
    pub fn set(&mut self, category: impl Into<String>, extensions: &[&str]) {
        self.rules.insert(category.into(), to_vec(extensions));
    }

    /// Render an extension list for error messages: `.glb, .gltf`
    pub fn describe(extensions: &[String]) -> String {
        extensions
            .iter()
            .map(|e| format!(".{e}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn to_vec(extensions: &[&str]) -> Vec<String> {
    extensions.iter().map(|e| e.to_lowercase()).collect()
}
