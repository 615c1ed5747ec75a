use serde::Serialize;

/// Errors that can occur while parsing a product catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The supplied buffer has no bytes
    #[error("XML document is empty")]
    EmptyInput,

    /// The byte stream cannot be tokenized as a well-formed XML document
    #[error("Malformed XML document: {0}")]
    MalformedDocument(String),

    /// A mandatory element never appeared inside its block
    #[error("Block <{block}> does not contain required element <{field}>")]
    MissingRequiredField {
        /// Enclosing block tag
        block: &'static str,
        /// Missing element tag
        field: &'static str,
    },

    /// A mandatory element was found but its text is blank
    #[error("Required element <{field}> in block <{block}> must not be empty")]
    EmptyRequiredField {
        /// Enclosing block tag
        block: &'static str,
        /// Blank element tag
        field: &'static str,
    },

    /// An integer-typed element contains non-numeric text
    #[error("Element <{field}> is not a valid integer: {value:?}")]
    InvalidNumericField {
        /// Element tag
        field: &'static str,
        /// Offending text
        value: String,
    },

    /// The underlying byte source failed
    #[error("Failed to read XML stream: {0}")]
    StreamReadFailure(#[from] std::io::Error),
}

impl CatalogError {
    /// Coarse classification of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::EmptyInput => FailureKind::EmptyInput,
            CatalogError::MalformedDocument(_) => FailureKind::MalformedDocument,
            CatalogError::MissingRequiredField { .. } => FailureKind::MissingRequiredField,
            CatalogError::EmptyRequiredField { .. } => FailureKind::EmptyRequiredField,
            CatalogError::InvalidNumericField { .. } => FailureKind::InvalidNumericField,
            CatalogError::StreamReadFailure(_) => FailureKind::StreamReadFailure,
        }
    }

    /// Wrap a low-level reader error, keeping the byte offset it occurred at
    pub(crate) fn from_xml(err: quick_xml::Error, position: u64) -> Self {
        match err {
            quick_xml::Error::Io(io) => {
                CatalogError::StreamReadFailure(std::io::Error::new(io.kind(), io.to_string()))
            }
            other => CatalogError::MalformedDocument(format!("at byte {}: {}", position, other)),
        }
    }
}

/// Failure taxonomy shared by the parser, the workbook sink and the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    /// Zero-length input
    EmptyInput,
    /// Not well-formed XML
    MalformedDocument,
    /// Mandatory element absent
    MissingRequiredField,
    /// Mandatory element blank
    EmptyRequiredField,
    /// Non-integer numeric element
    InvalidNumericField,
    /// Reading the input failed
    StreamReadFailure,
    /// Rendering the workbook failed
    GenerationFailure,
    /// Writing the output file failed
    OutputWriteFailure,
}

impl FailureKind {
    /// Whether the failure is caused by the submitted document rather than the environment
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            FailureKind::EmptyInput
                | FailureKind::MalformedDocument
                | FailureKind::MissingRequiredField
                | FailureKind::EmptyRequiredField
                | FailureKind::InvalidNumericField
        )
    }
}
