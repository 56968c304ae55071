//! Serialized-document decode/encode.
//!
//! The wire envelope carries the annotated document as a string payload
//! (field `xmi`, name kept for compatibility with earlier deployments).
//! The serialized form is JSON:
//!
//! ```json
//! {
//!   "text": "The cat sat.",
//!   "annotations": [
//!     { "kind": "token", "begin": 4, "end": 7, "label": "NN" },
//!     { "kind": "delta", "begin": 4, "end": 7, "old": "dog" }
//!   ]
//! }
//! ```
//!
//! Decoding validates kinds and offsets up front; a document that fails any
//! check is rejected before an index is populated.

use annot_core::{Annotation, AnnotationKind, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DeltaError;

#[derive(Debug, Serialize, Deserialize)]
struct DocumentDto {
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    annotations: Vec<AnnotationDto>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AnnotationDto {
    kind: String,
    begin: usize,
    end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(rename = "old", default, skip_serializing_if = "Option::is_none")]
    old_text: Option<String>,
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

/// Parse a serialized document into a [`Document`].
///
/// Fails with [`DeltaError::InvalidDocument`] on malformed JSON, an unknown
/// annotation kind, or an annotation range that is inverted or exceeds the
/// text length.
pub fn parse_document(serialized: &str) -> Result<Document, DeltaError> {
    let dto: DocumentDto = serde_json::from_str(serialized)
        .map_err(|err| DeltaError::InvalidDocument(err.to_string()))?;

    let mut document = Document::new(&dto.text);
    let length = document.char_len();

    for annotation_dto in dto.annotations {
        let kind = AnnotationKind::parse(&annotation_dto.kind).ok_or_else(|| {
            DeltaError::InvalidDocument(format!(
                "unknown annotation kind '{}'",
                annotation_dto.kind
            ))
        })?;

        let (begin, end) = (annotation_dto.begin, annotation_dto.end);
        if begin > end || end > length {
            return Err(DeltaError::InvalidDocument(format!(
                "annotation {begin}..{end} is not a valid range for a document of length {length}"
            )));
        }

        let mut annotation = Annotation::new(begin, end, kind);
        annotation.label = annotation_dto.label;
        annotation.old_text = annotation_dto.old_text;
        annotation.data_json = annotation_dto.data.map(|value| value.to_string());
        document.annotations.insert(annotation);
    }

    Ok(document)
}

/// Serialize a [`Document`], annotations in begin-order.
///
/// Inverse of [`parse_document`].
pub fn serialize_document(document: &Document) -> String {
    let annotations = document
        .annotations
        .iter()
        .map(|annotation| AnnotationDto {
            kind: annotation.kind.as_str().to_string(),
            begin: annotation.begin,
            end: annotation.end,
            label: annotation.label.clone(),
            old_text: annotation.old_text.clone(),
            // Payloads are stored as JSON text; anything unparseable is
            // carried as a plain JSON string.
            data: annotation.data_json.as_ref().map(|json| {
                serde_json::from_str(json).unwrap_or_else(|_| Value::String(json.clone()))
            }),
        })
        .collect();

    let dto = DocumentDto {
        text: document.text.to_string(),
        annotations,
    };
    serde_json::to_string(&dto).expect("document serialization cannot fail")
}
