use super::{CatalogError, ProductStreamer};
use crate::models::ProductRecord;

/// Iterator over products in a catalog document
///
/// Yields at most one error; iteration stops after it.
pub struct ProductIterator<'a> {
    pub(super) streamer: ProductStreamer<'a>,
}

impl Iterator for ProductIterator<'_> {
    type Item = Result<ProductRecord, CatalogError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.streamer.next_product() {
            Ok(Some(product)) => Some(Ok(product)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
