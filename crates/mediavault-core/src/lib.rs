//! MediaVault Core Logic
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! The two pure logic modules behind the asset dashboard:
//!
//! - **Query engine** ([`query`]): filter, search, and sort an in-memory
//!   asset collection against a query spec.
//! - **Form validator** ([`validation`]): check a draft submission against
//!   field rules and the category→extension table ([`rules`]).
//!
//! Both are total functions over their inputs: they never fail, never touch
//! I/O, and never mutate shared state. Problems are reported as data.

pub mod query;
pub mod rules;
pub mod validation;

pub use query::query;
pub use rules::ExtensionRules;
pub use validation::{
    validate_create, validate_update, AssetDraft, FileMeta, ValidationErrors,
};
