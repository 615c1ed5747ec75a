//! Forward-only cursor over the events of an in-memory XML document
//!
//! The cursor flattens quick-xml's event model into three kinds of events the
//! product parser cares about. Self-closing elements become an `Open` followed
//! by a `Close`, CDATA sections are delivered as plain text, and comments,
//! processing instructions and the XML declaration are skipped.
//!
//! Document type declarations are refused outright and no entities beyond the
//! five predefined ones are resolved.

use std::iter::FusedIterator;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::CatalogError;

/// A single event produced by [`EventCursor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// An element opened; carries its local name
    Open(String),
    /// An element closed; carries its local name
    Close(String),
    /// Character data or CDATA content, unescaped but not trimmed
    Text(String),
}

/// Lazy, finite, non-restartable sequence of [`XmlEvent`]s
pub struct EventCursor<'a> {
    reader: Reader<&'a [u8]>,
    depth: usize,
    seen_root: bool,
    pending_close: Option<String>,
    finished: bool,
}

impl<'a> EventCursor<'a> {
    /// Create a cursor positioned before the first event of `input`
    pub fn new(input: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = true;

        Self {
            reader,
            depth: 0,
            seen_root: false,
            pending_close: None,
            finished: false,
        }
    }

    /// Number of currently open elements
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Byte offset of the reader in the input
    pub fn byte_offset(&self) -> u64 {
        self.reader.buffer_position() as u64
    }

    /// Advance to the next event, or `None` once the document is exhausted.
    ///
    /// After the first error or the end of the document the cursor yields
    /// `None` forever.
    pub fn next_event(&mut self) -> Result<Option<XmlEvent>, CatalogError> {
        if self.finished {
            return Ok(None);
        }
        let result = self.read_next();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    /// Advance to the next event, treating the end of the document as malformed input.
    ///
    /// Used by routines that are inside an element and need its closing tag.
    pub fn expect_event(&mut self) -> Result<XmlEvent, CatalogError> {
        match self.next_event()? {
            Some(event) => Ok(event),
            None => Err(self.malformed("unexpected end of document")),
        }
    }

    fn read_next(&mut self) -> Result<Option<XmlEvent>, CatalogError> {
        if let Some(name) = self.pending_close.take() {
            self.depth -= 1;
            return Ok(Some(XmlEvent::Close(name)));
        }

        loop {
            let event = match self.reader.read_event() {
                Ok(event) => event,
                Err(e) => return Err(CatalogError::from_xml(e, self.reader.error_position() as u64)),
            };

            match event {
                Event::Start(ref e) => {
                    let name = self.open_element(e)?;
                    return Ok(Some(XmlEvent::Open(name)));
                }
                Event::Empty(ref e) => {
                    let name = self.open_element(e)?;
                    self.pending_close = Some(name.clone());
                    return Ok(Some(XmlEvent::Open(name)));
                }
                Event::End(ref e) => {
                    let name = self.decode_name(e.local_name().as_ref())?;
                    self.depth = self.depth.saturating_sub(1);
                    return Ok(Some(XmlEvent::Close(name)));
                }
                Event::Text(ref e) => {
                    let offset = self.byte_offset();
                    let text = e
                        .unescape()
                        .map_err(|err| CatalogError::from_xml(err, offset))?;
                    if self.depth == 0 {
                        if is_ignorable(&text) {
                            continue;
                        }
                        return Err(self.malformed("text content outside the root element"));
                    }
                    return Ok(Some(XmlEvent::Text(text.into_owned())));
                }
                Event::CData(ref e) => {
                    if self.depth == 0 {
                        return Err(self.malformed("CDATA section outside the root element"));
                    }
                    let text = std::str::from_utf8(e)
                        .map_err(|err| self.malformed(format!("invalid UTF-8 in CDATA: {}", err)))?;
                    return Ok(Some(XmlEvent::Text(text.to_owned())));
                }
                Event::DocType(_) => {
                    return Err(self.malformed("document type declarations are not permitted"));
                }
                Event::Eof => {
                    if self.depth > 0 {
                        return Err(self.malformed(format!(
                            "unexpected end of document with {} unclosed element(s)",
                            self.depth
                        )));
                    }
                    if !self.seen_root {
                        return Err(self.malformed("document has no root element"));
                    }
                    return Ok(None);
                }
                // Comments, processing instructions and the XML declaration
                _ => continue,
            }
        }
    }

    fn open_element(&mut self, e: &BytesStart<'_>) -> Result<String, CatalogError> {
        if self.depth == 0 && self.seen_root {
            return Err(self.malformed("document has more than one root element"));
        }
        let name = self.decode_name(e.local_name().as_ref())?;
        self.depth += 1;
        self.seen_root = true;
        Ok(name)
    }

    fn decode_name(&self, raw: &[u8]) -> Result<String, CatalogError> {
        std::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|err| self.malformed(format!("invalid UTF-8 in element name: {}", err)))
    }

    fn malformed(&self, message: impl std::fmt::Display) -> CatalogError {
        CatalogError::MalformedDocument(format!("at byte {}: {}", self.byte_offset(), message))
    }
}

impl Iterator for EventCursor<'_> {
    type Item = Result<XmlEvent, CatalogError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}

impl FusedIterator for EventCursor<'_> {}

/// Whitespace and byte-order marks may surround the root element
fn is_ignorable(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}
