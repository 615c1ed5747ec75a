//! Text content of a single element

use super::events::{EventCursor, XmlEvent};
use super::CatalogError;

/// Read the text content of the element the cursor has just entered.
///
/// Consumes events up to and including the element's closing tag and returns
/// the concatenation of all text chunks inside it, trimmed. Nested children
/// are consumed as part of the element, so the cursor always ends up past
/// the element regardless of its shape.
pub fn read_element_text(cursor: &mut EventCursor<'_>) -> Result<String, CatalogError> {
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match cursor.expect_event()? {
            XmlEvent::Text(chunk) => text.push_str(&chunk),
            XmlEvent::Open(_) => depth += 1,
            XmlEvent::Close(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
        }
    }

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Position a cursor just inside the root element
    fn enter_root(input: &str) -> EventCursor<'_> {
        let mut cursor = EventCursor::new(input.as_bytes());
        assert!(matches!(cursor.next_event().unwrap(), Some(XmlEvent::Open(_))));
        cursor
    }

    #[test]
    fn test_reads_and_trims_text() {
        let mut cursor = enter_root("<a>  hello world \n</a>");
        assert_eq!(read_element_text(&mut cursor).unwrap(), "hello world");
        assert!(cursor.next_event().unwrap().is_none());
    }

    #[test]
    fn test_concatenates_text_and_cdata_chunks() {
        let mut cursor = enter_root("<a>one <![CDATA[two]]> three</a>");
        assert_eq!(read_element_text(&mut cursor).unwrap(), "one two three");
    }

    #[test]
    fn test_empty_element_yields_empty_string() {
        let mut cursor = enter_root("<a/>");
        assert_eq!(read_element_text(&mut cursor).unwrap(), "");

        let mut cursor = enter_root("<a>   </a>");
        assert_eq!(read_element_text(&mut cursor).unwrap(), "");
    }

    #[test]
    fn test_consumes_nested_children() {
        let mut cursor = enter_root("<root><a>x<b><c>y</c></b>z</a><next>n</next></root>");
        assert_eq!(cursor.next_event().unwrap(), Some(XmlEvent::Open("a".to_string())));
        assert_eq!(read_element_text(&mut cursor).unwrap(), "xyz");
        assert_eq!(cursor.next_event().unwrap(), Some(XmlEvent::Open("next".to_string())));
    }

    #[test]
    fn test_truncated_element_is_malformed() {
        let mut cursor = enter_root("<a>text");
        let err = read_element_text(&mut cursor).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedDocument(_)));
    }
}
