//! Category records and the lazy URL resolver.
//!
//! Categories are authored as external structured data conforming to this
//! fixed schema. Deserialization is strict: every field is required and
//! unknown fields are rejected, so the declared shape is authoritative
//! rather than anything inferred from the source data.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Options;
use crate::error::{CoreError, Result};

/// One help-center category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Opaque identity.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short description shown on listing pages.
    pub description: String,

    /// Route-path segment of the category.
    pub slug: String,

    /// Display and iteration order, ascending.
    pub order: i32,

    /// Path of the category's illustration image.
    pub image: String,
}

impl Category {
    /// The public URL of the category.
    ///
    /// Computed at query time from the current options, never stored, so a
    /// base-path change between queries is always reflected.
    pub fn url(&self, options: &Options) -> String {
        options.category_route(&self.slug)
    }
}

/// Parse category records from an authored data file.
///
/// The format follows the file extension: JSON for `.json`, YAML
/// otherwise. Both hold a sequence of records.
pub fn parse_categories(raw: &str, path: &Path) -> Result<Vec<Category>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(raw).map_err(|e| CoreError::category_data(path, e.to_string()))
    } else {
        serde_yaml::from_str(raw).map_err(|e| CoreError::category_data(path, e.to_string()))
    }
}
