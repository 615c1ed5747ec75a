//! # catalog2xlsx - Product Catalog to Spreadsheet Converter
//!
//! `catalog2xlsx` reads product-catalog XML documents in a single forward pass
//! and turns every `productInfo` element into a flat [`models::ProductRecord`].
//! The records can then be written out as an XLSX workbook.
//!
//! ## Key Features
//!
//! - **Streaming Parser**: Pull-based walk over the document with quick-xml;
//!   products are found at any nesting depth and unknown elements are skipped
//!   with their whole subtree.
//!
//! - **All-or-Nothing Validation**: A missing or blank unit-of-measure code, a
//!   non-numeric index or a malformed document aborts the parse with a typed
//!   [`catalog::CatalogError`]; partial results are never returned.
//!
//! - **Hardened Input Handling**: DTDs are rejected and no external entities
//!   are ever resolved.
//!
//! - **In-Memory XLSX Output**: Workbooks are rendered with `rust_xlsxwriter`
//!   into a byte buffer, so nothing touches disk until the caller decides.
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog2xlsx::convert::CatalogConverter;
//!
//! let xml = br#"<catalog>
//!   <productInfo>
//!     <indexNum>2</indexNum>
//!     <name>Bandage</name>
//!     <OKEIInfo><nationalCode>796</nationalCode></OKEIInfo>
//!   </productInfo>
//!   <productInfo>
//!     <indexNum>1</indexNum>
//!     <name>Aspirin</name>
//!     <trademarkInfo><trademark>Bayer</trademark></trademarkInfo>
//!     <OKEIInfo><nationalCode>778</nationalCode></OKEIInfo>
//!   </productInfo>
//! </catalog>"#;
//!
//! let output = CatalogConverter::new().convert_bytes(xml)?;
//! assert_eq!(output.stats.products, 2);
//! assert_eq!(&output.workbook[..2], b"PK");
//! # Ok::<(), catalog2xlsx::convert::ConversionError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`catalog`]: Event cursor, text reader and product streamer
//! - [`models`]: The [`models::ProductRecord`] row type
//! - [`sheet`]: XLSX workbook generation
//! - [`convert`]: End-to-end conversion with ordering and statistics
//!
//! ## Output Columns
//!
//! | Column | Source element | Type |
//! |--------|----------------|------|
//! | № п/п | `indexNum` | Number |
//! | Единицы измерения | `OKEIInfo/nationalCode` | Text |
//! | ОКПД2 | `OKPD2Info/OKPDCode` | Text |
//! | НКМИ | `medicalProductCode` | Text |
//! | Производитель | `manufacturer` | Text |
//! | Страна производства | `countryFullName` | Text |
//! | Рег. номер удостоверения | (none) | Text |
//! | Полное  наименование | `name` | Text |
//! | Товарный знак | `trademarkInfo/trademark` | Text |

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod convert;
pub mod models;
pub mod sheet;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::catalog::{
        parse_products, parse_reader, CatalogError, FailureKind, ProductIterator, ProductStreamer,
    };
    pub use crate::convert::{
        CatalogConverter, ConversionConfig, ConversionError, ConversionOutput, ConversionStats,
        ErrorReport,
    };
    pub use crate::models::ProductRecord;
    pub use crate::sheet::{
        SheetColumn, SheetError, WorkbookConfig, WorkbookExporter, DEFAULT_ATTACHMENT_NAME,
        XLSX_CONTENT_TYPE,
    };
}
