//! PDF text extraction.
//!
//! Pages are read in page-number order and joined with a single newline.
//! Every failure mode is reported as an [`ExtractionFailure`] value; lopdf's
//! own error type never crosses this module.

use std::fmt;
use std::sync::Arc;

use docqa_core::ExtractionFailure;
use lopdf::Document;
use tracing::{debug, warn};

/// Text recovered from a document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    text: Arc<str>,
    pages: usize,
}

impl ExtractedText {
    pub fn new(text: impl Into<Arc<str>>, pages: usize) -> Self {
        Self {
            text: text.into(),
            pages,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of pages the document declared (not only those that yielded text).
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Shared handle to the text, cheap to clone across workers.
    pub fn shared(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Extract plain text from PDF bytes.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, ExtractionFailure> {
    let document = Document::load_mem(bytes).map_err(|e| {
        warn!("Failed to parse document ({} bytes): {}", bytes.len(), e);
        ExtractionFailure::Unparseable(e.to_string())
    })?;

    let pages = document.get_pages();
    let page_count = pages.len();

    let mut page_texts: Vec<String> = Vec::with_capacity(page_count);
    for page_number in pages.keys() {
        match document.extract_text(&[*page_number]) {
            Ok(text) => page_texts.push(text),
            Err(e) => debug!("Page {} yielded no text: {}", page_number, e),
        }
    }

    let text = page_texts.join("\n");
    if text.trim().is_empty() {
        warn!("No text recoverable from {} page(s)", page_count);
        return Err(ExtractionFailure::NoText { pages: page_count });
    }

    debug!(
        "Extracted {} chars from {} page(s)",
        text.chars().count(),
        page_count
    );
    Ok(ExtractedText::new(text, page_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a minimal PDF with one page per entry; an empty entry is a blank page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let operations = if page_text.is_empty() {
                Vec::new()
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => font_id },
                },
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_single_page() {
        let bytes = build_pdf(&["Coverage includes inpatient hospitalization expenses."]);
        let extracted = extract_text(&bytes).unwrap();
        assert_eq!(extracted.page_count(), 1);
        assert!(extracted
            .as_str()
            .contains("Coverage includes inpatient hospitalization expenses."));
    }

    #[test]
    fn test_pages_in_order() {
        let bytes = build_pdf(&["First page text", "Second page text"]);
        let extracted = extract_text(&bytes).unwrap();
        let text = extracted.as_str();
        assert_eq!(extracted.page_count(), 2);
        let first = text.find("First page text").unwrap();
        let second = text.find("Second page text").unwrap();
        assert!(first < second);
        assert!(text[first..second].contains('\n'));
    }

    #[test]
    fn test_garbage_is_unparseable() {
        let result = extract_text(b"definitely not a pdf");
        assert!(matches!(result, Err(ExtractionFailure::Unparseable(_))));
    }

    #[test]
    fn test_empty_bytes_is_unparseable() {
        assert!(matches!(
            extract_text(&[]),
            Err(ExtractionFailure::Unparseable(_))
        ));
    }

    #[test]
    fn test_blank_pages_yield_no_text() {
        let bytes = build_pdf(&["", ""]);
        assert_eq!(
            extract_text(&bytes),
            Err(ExtractionFailure::NoText { pages: 2 })
        );
    }

    #[test]
    fn test_shared_text_is_same_allocation() {
        let extracted = ExtractedText::new("abc", 1);
        let a = extracted.shared();
        let b = extracted.shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(extracted.to_string(), "abc");
    }
}
