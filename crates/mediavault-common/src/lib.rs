//! MediaVault Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the MediaVault workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all MediaVault
//! workspace members:
//!
//! - **Types**: The asset record, query spec, and sort enums
//! - **Error Handling**: Custom error and result types
//! - **Logging**: Centralized tracing setup
//! - **Formatting**: Human-readable file sizes and dates

pub mod error;
pub mod format;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VaultError};
pub use types::{Asset, FilterState, NewAsset, SortKey, SortOrder};
