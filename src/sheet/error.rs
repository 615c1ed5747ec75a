/// Errors that can occur while generating a workbook
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// Error from the XLSX writer
    #[error("XLSX writer error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    /// The configured worksheet name is not accepted by spreadsheet applications
    #[error("Invalid sheet name {name:?}: {reason}")]
    InvalidSheetName {
        /// Rejected name
        name: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// More products than a single worksheet can hold
    #[error("{rows} products do not fit in one worksheet (limit {limit})")]
    TooManyRows {
        /// Number of products offered
        rows: usize,
        /// Data rows available below the header
        limit: usize,
    },
}
