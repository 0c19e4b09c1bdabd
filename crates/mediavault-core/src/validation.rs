//! Draft form validation
//!
//! Checks a create/update submission against field rules and the
//! category→extension table, accumulating at most one message per field.
//! Validation is reporting, not control flow: the entry points always
//! return a [`ValidationErrors`] value and never fail.

use crate::rules::ExtensionRules;
use serde::Serialize;

/// Maximum accepted file size: 50 MiB. A file of exactly this size passes.
pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

const MIN_NAME_LEN: usize = 3;
const MIN_DESCRIPTION_LEN: usize = 10;

/// Name and size of a file selected for upload. No content inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub file_name: String,
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }

    /// Extension after the final dot, lowercased. `None` when the file name
    /// has no dot.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }
}

/// An in-progress, unpersisted form submission.
///
/// For updates, `file: None` means "keep the existing file".
#[derive(Debug, Clone, Default)]
pub struct AssetDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub file: Option<FileMeta>,
}

/// Per-field validation messages. A `None` field is valid; an empty value
/// means the whole draft is safe to submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl ValidationErrors {
    /// True when every field passed
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.file.is_none()
    }

    /// Iterate present errors as `(field, message)` pairs, in field order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("category", self.category.as_deref()),
            ("description", self.description.as_deref()),
            ("file", self.file.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.map(|m| (field, m)))
    }
}

/// Validate a new-asset submission. The file is mandatory.
pub fn validate_create(draft: &AssetDraft, rules: &ExtensionRules) -> ValidationErrors {
    validate(draft, rules, true)
}

/// Validate an edit submission. A missing file means "keep the existing
/// file" and raises no error.
pub fn validate_update(draft: &AssetDraft, rules: &ExtensionRules) -> ValidationErrors {
    validate(draft, rules, false)
}

fn validate(draft: &AssetDraft, rules: &ExtensionRules, file_required: bool) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().len() < MIN_NAME_LEN {
        errors.name = Some(format!(
            "Name must be at least {MIN_NAME_LEN} characters"
        ));
    }

    if draft.category.is_empty() {
        errors.category = Some("Category is required".to_string());
    }

    if draft.description.trim().len() < MIN_DESCRIPTION_LEN {
        errors.description = Some(format!(
            "Description must be at least {MIN_DESCRIPTION_LEN} characters"
        ));
    }

    match &draft.file {
        None if file_required => {
            errors.file = Some("File is required".to_string());
        }
        None => {}
        Some(file) => {
            errors.file = validate_file(file, &draft.category, rules);
        }
    }

    errors
}

/// Check a present file against the extension table and size limit.
/// The size message wins when both rules fail.
fn validate_file(file: &FileMeta, category: &str, rules: &ExtensionRules) -> Option<String> {
    if file.size_bytes > MAX_FILE_SIZE_BYTES {
        return Some("File size must be less than 50MB".to_string());
    }

    if let Some(allowed) = rules.allowed(category) {
        let accepted = file
            .extension()
            .is_some_and(|ext| allowed.iter().any(|e| *e == ext));
        if !accepted {
            return Some(format!(
                "Invalid file type for {category}. Allowed: {}",
                ExtensionRules::describe(allowed)
            ));
        }
    }

    None
}
