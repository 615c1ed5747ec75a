//! Per-product extraction
//!
//! Everything between `<productInfo>` and its closing tag is consumed here.
//! Direct children are dispatched on their tag name; the nested blocks
//! (`trademarkInfo`, `OKEIInfo`, `OKPD2Info`) are always read through their
//! own closing tag so nothing inside them leaks into the product.

use super::events::XmlEvent;
use super::tags::ProductTag;
use super::text::read_element_text;
use super::{CatalogError, ProductStreamer};
use crate::models::ProductRecord;

/// Fields collected while a `productInfo` element is open
#[derive(Debug, Default)]
struct ProductDraft {
    sequence_index: i32,
    unit_code: Option<String>,
    classification_code: String,
    medical_code: String,
    manufacturer: String,
    country_name: String,
    full_name: Option<String>,
    trade_mark: String,
}

impl ProductDraft {
    /// Validate the collected fields and produce the final record
    fn seal(self) -> Result<ProductRecord, CatalogError> {
        let unit_code = self.unit_code.ok_or(CatalogError::MissingRequiredField {
            block: ProductTag::OkeiInfo.as_str(),
            field: ProductTag::NationalCode.as_str(),
        })?;

        Ok(ProductRecord {
            sequence_index: self.sequence_index,
            unit_code,
            classification_code: self.classification_code,
            medical_code: self.medical_code,
            manufacturer: self.manufacturer,
            country_name: self.country_name,
            certificate_number: String::new(),
            full_name: self.full_name.unwrap_or_default(),
            trade_mark: self.trade_mark,
        })
    }
}

impl ProductStreamer<'_> {
    /// Read the next product from the stream
    ///
    /// Returns `Ok(None)` once the document is exhausted. After an error the
    /// streamer stays exhausted.
    pub fn next_product(&mut self) -> Result<Option<ProductRecord>, CatalogError> {
        if self.failed {
            return Ok(None);
        }
        let result = self.seek_product();
        if result.is_err() {
            self.failed = true;
        }
        result
    }

    fn seek_product(&mut self) -> Result<Option<ProductRecord>, CatalogError> {
        while let Some(event) = self.cursor.next_event()? {
            if let XmlEvent::Open(name) = event {
                if ProductTag::from_name(&name) == ProductTag::ProductInfo {
                    let product = self.parse_product()?;
                    self.products_read += 1;
                    return Ok(Some(product));
                }
            }
        }
        Ok(None)
    }

    /// Parse a single product element; the cursor is just past `<productInfo>`
    fn parse_product(&mut self) -> Result<ProductRecord, CatalogError> {
        let mut draft = ProductDraft::default();

        loop {
            match self.cursor.expect_event()? {
                XmlEvent::Open(name) => match ProductTag::from_name(&name) {
                    ProductTag::IndexNum => {
                        draft.sequence_index = self.parse_index_number()?;
                    }
                    ProductTag::Name => {
                        let full_name = read_element_text(&mut self.cursor)?;
                        if draft.full_name.as_deref().map_or(true, str::is_empty) {
                            draft.full_name = Some(full_name);
                        }
                    }
                    ProductTag::TrademarkInfo => {
                        draft.trade_mark = self.parse_trademark()?;
                    }
                    ProductTag::OkeiInfo => {
                        draft.unit_code = Some(self.parse_okei_unit()?);
                    }
                    ProductTag::Okpd2Info => {
                        draft.classification_code = self.parse_okpd2()?;
                    }
                    ProductTag::MedicalProductCode => {
                        draft.medical_code = read_element_text(&mut self.cursor)?;
                    }
                    ProductTag::CountryFullName => {
                        draft.country_name = read_element_text(&mut self.cursor)?;
                    }
                    ProductTag::Manufacturer => {
                        draft.manufacturer = read_element_text(&mut self.cursor)?;
                    }
                    _ => {
                        read_element_text(&mut self.cursor)?;
                    }
                },
                // Every child is consumed whole, so this is `</productInfo>`
                XmlEvent::Close(_) => break,
                XmlEvent::Text(_) => {}
            }
        }

        draft.seal()
    }

    /// Parse `indexNum`; empty text means 0
    fn parse_index_number(&mut self) -> Result<i32, CatalogError> {
        let text = read_element_text(&mut self.cursor)?;
        if text.is_empty() {
            return Ok(0);
        }
        text.parse().map_err(|_| CatalogError::InvalidNumericField {
            field: ProductTag::IndexNum.as_str(),
            value: text,
        })
    }

    /// Extract `trademark` from a `trademarkInfo` block, or an empty string
    fn parse_trademark(&mut self) -> Result<String, CatalogError> {
        Ok(self
            .scan_block(ProductTag::Trademark, BlockSearch::AnyDepth)?
            .unwrap_or_default())
    }

    /// Extract the mandatory `nationalCode` from an `OKEIInfo` block
    fn parse_okei_unit(&mut self) -> Result<String, CatalogError> {
        let code = self
            .scan_block(ProductTag::NationalCode, BlockSearch::DirectChild)?
            .ok_or(CatalogError::MissingRequiredField {
                block: ProductTag::OkeiInfo.as_str(),
                field: ProductTag::NationalCode.as_str(),
            })?;
        if code.is_empty() {
            return Err(CatalogError::EmptyRequiredField {
                block: ProductTag::OkeiInfo.as_str(),
                field: ProductTag::NationalCode.as_str(),
            });
        }
        Ok(code)
    }

    /// Extract `OKPDCode` from an `OKPD2Info` block, or an empty string
    fn parse_okpd2(&mut self) -> Result<String, CatalogError> {
        Ok(self
            .scan_block(ProductTag::OkpdCode, BlockSearch::AnyDepth)?
            .unwrap_or_default())
    }

    /// Consume a block up to its closing tag, returning the text of the first
    /// element named `wanted` that `search` admits. Everything else is drained.
    fn scan_block(
        &mut self,
        wanted: ProductTag,
        search: BlockSearch,
    ) -> Result<Option<String>, CatalogError> {
        let mut found = None;
        let mut depth = 0usize;

        loop {
            match self.cursor.expect_event()? {
                XmlEvent::Open(name) => {
                    if found.is_none() && ProductTag::from_name(&name) == wanted {
                        found = Some(read_element_text(&mut self.cursor)?);
                    } else if search == BlockSearch::AnyDepth {
                        depth += 1;
                    } else {
                        read_element_text(&mut self.cursor)?;
                    }
                }
                XmlEvent::Close(_) => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                XmlEvent::Text(_) => {}
            }
        }

        Ok(found)
    }
}

/// Where inside a block the wanted element may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockSearch {
    /// Only as a direct child of the block
    DirectChild,
    /// Anywhere inside the block
    AnyDepth,
}
