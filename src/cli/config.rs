//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every invocation can live in a
//! config file:
//!
//! ```toml
//! # catalog2xlsx.toml
//! [conversion]
//! sort_by_index = true
//!
//! [workbook]
//! sheet_name = "Products"
//! bold_header = true
//! auto_size_columns = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use catalog2xlsx::convert::ConversionConfig;

/// Root configuration structure for catalog2xlsx.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Conversion settings.
    #[serde(default)]
    pub conversion: ConversionSection,

    /// Workbook layout settings.
    #[serde(default)]
    pub workbook: WorkbookSection,
}

/// `[conversion]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionSection {
    /// Sort rows by sequence index.
    pub sort_by_index: Option<bool>,
}

/// `[workbook]` table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkbookSection {
    /// Worksheet name.
    pub sheet_name: Option<String>,

    /// Bold header row.
    pub bold_header: Option<bool>,

    /// Fit column widths to content.
    pub auto_size_columns: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Overlay the file settings on top of `base`.
    pub fn apply(&self, mut base: ConversionConfig) -> ConversionConfig {
        if let Some(sort) = self.conversion.sort_by_index {
            base.sort_by_index = sort;
        }
        if let Some(name) = &self.workbook.sheet_name {
            base.workbook.sheet_name = name.clone();
        }
        if let Some(bold) = self.workbook.bold_header {
            base.workbook.bold_header = bold;
        }
        if let Some(auto_size) = self.workbook.auto_size_columns {
            base.workbook.auto_size_columns = auto_size;
        }
        base
    }
}
