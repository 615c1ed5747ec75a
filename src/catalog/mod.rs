//! Streaming product-catalog parser using quick-xml
//!
//! This module provides a pull-based parser that walks a catalog document once,
//! finds every `productInfo` element at any depth and turns each one into a
//! [`ProductRecord`].
//!
//! ```rust
//! use catalog2xlsx::catalog::parse_products;
//!
//! let xml = br#"<products><productInfo>
//!     <indexNum>100</indexNum>
//!     <name>Aspirin</name>
//!     <OKEIInfo><nationalCode>796</nationalCode></OKEIInfo>
//! </productInfo></products>"#;
//!
//! let products = parse_products(xml)?;
//! assert_eq!(products.len(), 1);
//! assert_eq!(products[0].unit_code, "796");
//! # Ok::<(), catalog2xlsx::catalog::CatalogError>(())
//! ```
//!
//! Parsing is all-or-nothing: the first invalid product aborts the whole
//! document and no records are returned.

use std::io::Read;

use log::debug;

use crate::models::ProductRecord;

pub use error::{CatalogError, FailureKind};
pub use events::{EventCursor, XmlEvent};
pub use iterators::ProductIterator;
pub use tags::ProductTag;
pub use text::read_element_text;

mod error;
mod events;
mod iterators;
mod product;
mod tags;
mod text;


/// Streaming parser for product catalogs
pub struct ProductStreamer<'a> {
    cursor: EventCursor<'a>,
    products_read: usize,
    failed: bool,
}

impl<'a> ProductStreamer<'a> {
    /// Create a new streamer over a complete XML document
    pub fn new(input: &'a [u8]) -> Result<Self, CatalogError> {
        if input.is_empty() {
            return Err(CatalogError::EmptyInput);
        }

        Ok(Self {
            cursor: EventCursor::new(input),
            products_read: 0,
            failed: false,
        })
    }

    /// Number of products returned so far
    pub fn products_read(&self) -> usize {
        self.products_read
    }

    /// Iterate over all remaining products
    pub fn products(self) -> ProductIterator<'a> {
        ProductIterator { streamer: self }
    }

    /// Read every remaining product, failing on the first invalid one
    pub fn read_all(mut self) -> Result<Vec<ProductRecord>, CatalogError> {
        let mut products = Vec::new();
        while let Some(product) = self.next_product()? {
            products.push(product);
        }
        Ok(products)
    }
}

/// Parse all products from an in-memory XML document
pub fn parse_products(input: &[u8]) -> Result<Vec<ProductRecord>, CatalogError> {
    let products = ProductStreamer::new(input)?.read_all()?;
    debug!("Parsed {} product(s) from {} bytes", products.len(), input.len());
    Ok(products)
}

/// Read a whole document from `reader` and parse all products from it
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<ProductRecord>, CatalogError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    parse_products(&buffer)
}
