//! # XLSX Workbook Export
//!
//! Renders a sequence of [`ProductRecord`]s into an in-memory Office Open XML
//! spreadsheet with a single worksheet. The package itself is produced by
//! `rust_xlsxwriter`; this module decides what goes where:
//!
//! - row 1 holds the [`SheetColumn`] captions, bold unless configured otherwise
//! - every product fills one row below it, in the order given
//! - the sequence index column is stored as a number, every other column as text
//! - empty text fields leave their cell blank
//!
//! ## Usage
//!
//! ```rust
//! use catalog2xlsx::models::ProductRecord;
//! use catalog2xlsx::sheet::WorkbookExporter;
//!
//! let products = vec![ProductRecord::new(1, "796").with_full_name("Aspirin")];
//! let bytes = WorkbookExporter::new().export(&products)?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok::<(), catalog2xlsx::sheet::SheetError>(())
//! ```

use chrono::{DateTime, Datelike, Timelike, Utc};
use log::debug;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, Worksheet};

use crate::models::ProductRecord;

pub use error::SheetError;

mod error;

#[cfg(test)]
mod tests;

/// MIME type of the generated workbook
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name offered when the workbook is served as an attachment
pub const DEFAULT_ATTACHMENT_NAME: &str = "converted.xlsx";

/// Default worksheet name
pub const DEFAULT_SHEET_NAME: &str = "Продукты";

/// Longest worksheet name spreadsheet applications accept
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Rows in a worksheet, header included
pub const MAX_SHEET_ROWS: usize = 1_048_576;

const AUTHOR: &str = "catalog2xlsx";

/// Columns of the product sheet, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetColumn {
    /// Sequence index (numeric)
    SequenceIndex,
    /// Unit-of-measure national code
    UnitCode,
    /// OKPD2 classification code
    ClassificationCode,
    /// Medical product code (NKMI)
    MedicalCode,
    /// Manufacturer
    Manufacturer,
    /// Country of origin
    CountryName,
    /// Registration certificate number
    CertificateNumber,
    /// Full product name
    FullName,
    /// Trademark
    TradeMark,
}

impl SheetColumn {
    /// All columns in output order
    pub const ALL: [SheetColumn; 9] = [
        SheetColumn::SequenceIndex,
        SheetColumn::UnitCode,
        SheetColumn::ClassificationCode,
        SheetColumn::MedicalCode,
        SheetColumn::Manufacturer,
        SheetColumn::CountryName,
        SheetColumn::CertificateNumber,
        SheetColumn::FullName,
        SheetColumn::TradeMark,
    ];

    /// Header caption written in the first row
    pub fn header(&self) -> &'static str {
        match self {
            SheetColumn::SequenceIndex => "№ п/п",
            SheetColumn::UnitCode => "Единицы измерения",
            SheetColumn::ClassificationCode => "ОКПД2",
            SheetColumn::MedicalCode => "НКМИ",
            SheetColumn::Manufacturer => "Производитель",
            SheetColumn::CountryName => "Страна производства",
            SheetColumn::CertificateNumber => "Рег. номер удостоверения",
            SheetColumn::FullName => "Полное  наименование",
            SheetColumn::TradeMark => "Товарный знак",
        }
    }

    /// Cell value of this column for a product
    pub fn value<'a>(&self, product: &'a ProductRecord) -> CellValue<'a> {
        match self {
            SheetColumn::SequenceIndex => CellValue::Number(i64::from(product.sequence_index)),
            SheetColumn::UnitCode => CellValue::Text(&product.unit_code),
            SheetColumn::ClassificationCode => CellValue::Text(&product.classification_code),
            SheetColumn::MedicalCode => CellValue::Text(&product.medical_code),
            SheetColumn::Manufacturer => CellValue::Text(&product.manufacturer),
            SheetColumn::CountryName => CellValue::Text(&product.country_name),
            SheetColumn::CertificateNumber => CellValue::Text(&product.certificate_number),
            SheetColumn::FullName => CellValue::Text(&product.full_name),
            SheetColumn::TradeMark => CellValue::Text(&product.trade_mark),
        }
    }
}

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    /// Numeric cell
    Number(i64),
    /// String cell
    Text(&'a str),
}

/// Configuration for workbook generation
#[derive(Debug, Clone)]
pub struct WorkbookConfig {
    /// Name of the single worksheet
    pub sheet_name: String,

    /// Render the header row in bold
    pub bold_header: bool,

    /// Size columns to fit their longest value
    pub auto_size_columns: bool,

    /// Creation timestamp recorded in the document properties; now if unset
    pub created: Option<DateTime<Utc>>,
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            bold_header: true,
            auto_size_columns: true,
            created: None,
        }
    }
}

impl WorkbookConfig {
    /// Set the worksheet name
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }

    /// Pin the creation timestamp
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Check the settings before any output is produced
    pub fn validate(&self) -> Result<(), SheetError> {
        validate_sheet_name(&self.sheet_name)
    }
}

/// Reject names that spreadsheet applications refuse to open
pub fn validate_sheet_name(name: &str) -> Result<(), SheetError> {
    let reason = if name.trim().is_empty() {
        Some("must not be empty")
    } else if name.chars().count() > MAX_SHEET_NAME_LEN {
        Some("must be at most 31 characters long")
    } else if name.contains(['[', ']', ':', '*', '?', '/', '\\']) {
        Some("must not contain any of [ ] : * ? / \\")
    } else if name.starts_with('\'') || name.ends_with('\'') {
        Some("must not begin or end with an apostrophe")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SheetError::InvalidSheetName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Writes product records into an XLSX package held in memory
#[derive(Debug, Clone, Default)]
pub struct WorkbookExporter {
    config: WorkbookConfig,
}

impl WorkbookExporter {
    /// Create an exporter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with custom configuration
    pub fn with_config(config: WorkbookConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &WorkbookConfig {
        &self.config
    }

    /// Render `products` as a workbook and return the package bytes.
    ///
    /// An empty slice produces a sheet with only the header row.
    pub fn export(&self, products: &[ProductRecord]) -> Result<Vec<u8>, SheetError> {
        self.config.validate()?;
        if products.len() >= MAX_SHEET_ROWS {
            return Err(SheetError::TooManyRows {
                rows: products.len(),
                limit: MAX_SHEET_ROWS - 1,
            });
        }

        let created = self.config.created.unwrap_or_else(Utc::now);
        let properties = DocProperties::new()
            .set_author(AUTHOR)
            .set_creation_datetime(&excel_datetime(created)?);

        let mut workbook = Workbook::new();
        workbook.set_properties(&properties);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.config.sheet_name)?;
        self.write_header(worksheet)?;

        for (row, product) in (1u32..).zip(products) {
            write_product(worksheet, row, product)?;
        }

        if self.config.auto_size_columns {
            worksheet.autofit();
        }

        let bytes = workbook.save_to_buffer()?;
        debug!(
            "Rendered {} product row(s) into {} byte workbook",
            products.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    fn write_header(&self, worksheet: &mut Worksheet) -> Result<(), SheetError> {
        let bold = Format::new().set_bold();
        for (col, column) in (0u16..).zip(SheetColumn::ALL) {
            if self.config.bold_header {
                worksheet.write_string_with_format(0, col, column.header(), &bold)?;
            } else {
                worksheet.write_string(0, col, column.header())?;
            }
        }
        Ok(())
    }
}

fn write_product(
    worksheet: &mut Worksheet,
    row: u32,
    product: &ProductRecord,
) -> Result<(), SheetError> {
    for (col, column) in (0u16..).zip(SheetColumn::ALL) {
        match column.value(product) {
            CellValue::Number(n) => {
                worksheet.write_number(row, col, n as f64)?;
            }
            CellValue::Text("") => {}
            CellValue::Text(text) => {
                worksheet.write_string(row, col, text)?;
            }
        }
    }
    Ok(())
}

/// Whole-second timestamp for the document properties
fn excel_datetime(at: DateTime<Utc>) -> Result<ExcelDateTime, SheetError> {
    let year = u16::try_from(at.year()).unwrap_or(1900);
    let date = ExcelDateTime::from_ymd(year, at.month() as u8, at.day() as u8)?;
    Ok(date.and_hms(at.hour() as u16, at.minute() as u8, at.second() as u8)?)
}
