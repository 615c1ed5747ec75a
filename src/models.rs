//! Data model shared by the catalog parser and the workbook writer

use serde::Serialize;

/// One product extracted from a catalog document; one row of the output sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Ordering hint from `indexNum`; 0 when absent or empty
    pub sequence_index: i32,
    /// Unit-of-measure national code from `OKEIInfo/nationalCode`; never empty
    pub unit_code: String,
    /// Classification code from `OKPD2Info/OKPDCode`
    pub classification_code: String,
    /// Medical product code from `medicalProductCode`
    pub medical_code: String,
    /// Manufacturer from `manufacturer`
    pub manufacturer: String,
    /// Country of origin from `countryFullName`
    pub country_name: String,
    /// Registration certificate number
    pub certificate_number: String,
    /// Full product name from the first `name` element
    pub full_name: String,
    /// Trademark from `trademarkInfo/trademark`
    pub trade_mark: String,
}

impl ProductRecord {
    /// Create a record with the mandatory unit code and every other field defaulted
    pub fn new(sequence_index: i32, unit_code: impl Into<String>) -> Self {
        Self {
            sequence_index,
            unit_code: unit_code.into(),
            ..Default::default()
        }
    }

    /// Set the full product name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Set the trademark
    pub fn with_trade_mark(mut self, trade_mark: impl Into<String>) -> Self {
        self.trade_mark = trade_mark.into();
        self
    }

    /// Set the classification code
    pub fn with_classification_code(mut self, code: impl Into<String>) -> Self {
        self.classification_code = code.into();
        self
    }

    /// Set the country of origin
    pub fn with_country_name(mut self, country: impl Into<String>) -> Self {
        self.country_name = country.into();
        self
    }
}
