//! Catalog XML to XLSX conversion pipeline
//!
//! Ties the streaming product parser to the workbook exporter: the whole
//! document is parsed first, records are ordered by their sequence index and
//! the workbook is rendered in memory.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use crate::catalog::{parse_products, CatalogError, FailureKind};
use crate::sheet::{SheetError, WorkbookConfig, WorkbookExporter};

/// Errors that can occur during conversion
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The input document was rejected
    #[error("Catalog parsing error: {0}")]
    Catalog(#[from] CatalogError),

    /// The workbook could not be generated
    #[error("Workbook generation error: {0}")]
    Sheet(#[from] SheetError),

    /// The output file could not be written
    #[error("Failed to write output: {0}")]
    Io(#[source] std::io::Error),
}

impl ConversionError {
    /// Coarse classification of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            ConversionError::Catalog(e) => e.kind(),
            ConversionError::Sheet(_) => FailureKind::GenerationFailure,
            ConversionError::Io(_) => FailureKind::OutputWriteFailure,
        }
    }

    /// Structured description suitable for machine-readable output
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Serializable error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Failure classification
    pub kind: FailureKind,
    /// Human-readable description
    pub message: String,
}

/// Configuration for the catalog to workbook conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Order rows by sequence index (stable); document order otherwise
    pub sort_by_index: bool,

    /// Workbook settings
    pub workbook: WorkbookConfig,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            sort_by_index: true,
            workbook: WorkbookConfig::default(),
        }
    }
}

/// Statistics from a conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Number of products written
    pub products: usize,
    /// Size of the input document in bytes
    pub input_bytes: usize,
    /// Size of the generated workbook in bytes
    pub output_bytes: usize,
}

/// Result of an in-memory conversion
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// XLSX package bytes
    pub workbook: Vec<u8>,
    /// Conversion statistics
    pub stats: ConversionStats,
}

/// Converter from catalog XML to XLSX
#[derive(Debug, Clone, Default)]
pub struct CatalogConverter {
    config: ConversionConfig,
}

impl CatalogConverter {
    /// Create a new converter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new converter with custom configuration
    pub fn with_config(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Keep rows in document order instead of sorting by sequence index
    pub fn keep_document_order(mut self) -> Self {
        self.config.sort_by_index = false;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Convert an in-memory catalog document into workbook bytes
    pub fn convert_bytes(&self, input: &[u8]) -> Result<ConversionOutput, ConversionError> {
        self.config.workbook.validate()?;

        let mut products = parse_products(input)?;
        if self.config.sort_by_index {
            products.sort_by_key(|p| p.sequence_index);
        }

        let workbook = WorkbookExporter::with_config(self.config.workbook.clone()).export(&products)?;
        let stats = ConversionStats {
            products: products.len(),
            input_bytes: input.len(),
            output_bytes: workbook.len(),
        };
        debug!("Converted {:?}", stats);

        Ok(ConversionOutput { workbook, stats })
    }

    /// Convert a catalog file and write the workbook to `output`
    pub fn convert_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<ConversionStats, ConversionError> {
        let data = fs::read(input).map_err(CatalogError::StreamReadFailure)?;
        info!("Read {} bytes from {}", data.len(), input.display());

        let ConversionOutput { workbook, stats } = self.convert_bytes(&data)?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ConversionError::Io)?;
            }
        }
        fs::write(output, &workbook).map_err(ConversionError::Io)?;
        info!(
            "Wrote {} product row(s) to {}",
            stats.products,
            output.display()
        );

        Ok(stats)
    }
}
