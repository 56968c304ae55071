//! A text buffer paired with its annotation index.

use ropey::Rope;

use crate::index::AnnotationIndex;

/// One annotated document: an immutable rope-backed text buffer plus the
/// index of annotations over it.
///
/// Both fields are public so that engines can split-borrow the text and the
/// index (e.g. read the text while draining the index).
#[derive(Debug)]
pub struct Document {
    /// The document text. Annotation offsets are character offsets into
    /// this buffer.
    pub text: Rope,
    /// The annotations over `text`.
    pub annotations: AnnotationIndex,
}

impl Document {
    /// Create a document with the given text and an empty annotation index.
    pub fn new(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
            annotations: AnnotationIndex::new(),
        }
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.len_chars()
    }

    /// The substring covered by `[begin, end)` (character offsets).
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or exceeds the text length, like
    /// slice indexing does.
    pub fn slice(&self, begin: usize, end: usize) -> String {
        self.text.slice(begin..end).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Annotation, AnnotationKind};

    #[test]
    fn test_char_offsets_not_bytes() {
        let document = Document::new("naïve café");
        assert_eq!(document.char_len(), 10);
        assert_eq!(document.slice(6, 10), "café");
    }

    #[test]
    fn test_split_borrow_text_and_index() {
        let mut document = Document::new("The cat sat.");
        document
            .annotations
            .insert(Annotation::new(4, 7, AnnotationKind::Token));

        let text = &document.text;
        let taken = document.annotations.take_covered_by(0, text.len_chars());
        assert_eq!(taken.len(), 1);
        assert_eq!(text.slice(taken[0].begin..taken[0].end).to_string(), "cat");
    }
}
