//! The delta request envelope and the one-shot processing pipeline.
//!
//! Wire request:
//!
//! ```json
//! {
//!   "xmi": "<serialized original document>",
//!   "deltas": [ { "begin": 4, "end": 7, "new": "dog" }, ... ],
//!   "state": { "anything": "the client wants back" }
//! }
//! ```
//!
//! `deltas` order is irrelevant (the plan sorts by begin); `state` is
//! arbitrary JSON, never inspected, and echoed verbatim in the response:
//!
//! ```json
//! { "xmi": "<serialized edited document>", "state": ... }
//! ```

use annot_core::Document;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::document_io::{parse_document, serialize_document};
use crate::edit::{EditPlan, TextEdit};
use crate::error::DeltaError;
use crate::rebuild::rebuild_text;
use crate::relocate::relocate;

#[derive(Debug, Deserialize)]
struct RequestDto {
    xmi: String,
    #[serde(default)]
    deltas: Vec<DeltaDto>,
    #[serde(default)]
    state: Value,
}

#[derive(Debug, Deserialize)]
struct DeltaDto {
    begin: usize,
    end: usize,
    #[serde(rename = "new")]
    new_text: String,
}

/// A decoded, validated delta request.
pub struct DeltaRequest {
    /// The original document, with its annotations indexed.
    pub document: Document,
    /// The validated edit plan against `document`'s text.
    pub plan: EditPlan,
    /// Opaque client state, echoed back unmodified (`null` if absent).
    pub state: Value,
}

impl DeltaRequest {
    /// Decode and validate a request envelope.
    ///
    /// All failures happen here, before any transformation: a malformed
    /// envelope ([`DeltaError::InvalidRequest`]), an unparseable document
    /// ([`DeltaError::InvalidDocument`]), or an invalid edit list
    /// ([`DeltaError::MalformedEdits`]).
    pub fn decode(request: &str) -> Result<Self, DeltaError> {
        let dto: RequestDto = serde_json::from_str(request)
            .map_err(|err| DeltaError::InvalidRequest(err.to_string()))?;

        let document = parse_document(&dto.xmi)?;

        let edits = dto
            .deltas
            .into_iter()
            .map(|delta| TextEdit::new(delta.begin, delta.end, delta.new_text))
            .collect();
        let plan = EditPlan::new(edits, document.char_len())?;

        Ok(Self {
            document,
            plan,
            state: dto.state,
        })
    }
}

/// Apply a validated plan to a document, producing the edited document.
///
/// Rebuilds the text, then relocates the original's annotations into the
/// new document and emits one delta marker per edit. The original's index
/// is drained in the process; annotations inside edited regions (or
/// straddling an edit boundary) stay behind in it and are discarded with
/// it.
pub fn apply_edit_plan(original: &mut Document, plan: &EditPlan) -> Document {
    let new_text = rebuild_text(&original.text, plan);
    let mut edited = Document::new(&new_text);
    relocate(
        &mut original.annotations,
        &mut edited.annotations,
        &original.text,
        plan,
    );
    edited
}

/// Encode the response envelope: the serialized edited document plus the
/// client state, verbatim.
pub fn encode_response(document: &Document, state: &Value) -> String {
    json!({
        "xmi": serialize_document(document),
        "state": state,
    })
    .to_string()
}

/// Process one delta request end to end: decode, rebuild, relocate, encode.
///
/// Atomic: any error is raised at decode time and no response document
/// exists for a failed request.
pub fn process_request(request: &str) -> Result<String, DeltaError> {
    let DeltaRequest {
        mut document,
        plan,
        state,
    } = DeltaRequest::decode(request)?;

    log::debug!(
        target: "annot.delta",
        "applying {} deltas to a document of {} chars",
        plan.len(),
        document.char_len(),
    );

    let edited = apply_edit_plan(&mut document, &plan);
    Ok(encode_response(&edited, &state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use annot_core::AnnotationKind;

    fn request_json(deltas: &str) -> String {
        let xmi = r#"{ "text": "The cat sat.", "annotations": [{ "kind": "token", "begin": 8, "end": 11 }] }"#;
        format!(
            r#"{{ "xmi": {}, "deltas": {}, "state": {{ "revision": 7 }} }}"#,
            serde_json::to_string(xmi).unwrap(),
            deltas,
        )
    }

    #[test]
    fn test_decode_sorts_deltas() {
        let request = DeltaRequest::decode(&request_json(
            r#"[ { "begin": 8, "end": 11, "new": "lay" }, { "begin": 4, "end": 7, "new": "dog" } ]"#,
        ))
        .unwrap();

        let begins: Vec<usize> = request.plan.edits().iter().map(|e| e.begin).collect();
        assert_eq!(begins, vec![4, 8]);
        assert_eq!(request.state, json!({ "revision": 7 }));
    }

    #[test]
    fn test_decode_missing_state_defaults_to_null() {
        let request = DeltaRequest::decode(
            r#"{ "xmi": "{ \"text\": \"abc\" }", "deltas": [] }"#,
        )
        .unwrap();
        assert_eq!(request.state, Value::Null);
    }

    #[test]
    fn test_decode_rejects_non_object_envelope() {
        assert!(matches!(
            DeltaRequest::decode("[1, 2, 3]"),
            Err(DeltaError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_decode_rejects_overlapping_deltas() {
        assert!(matches!(
            DeltaRequest::decode(&request_json(
                r#"[ { "begin": 5, "end": 10, "new": "a" }, { "begin": 7, "end": 12, "new": "b" } ]"#,
            )),
            Err(DeltaError::MalformedEdits(_))
        ));
    }

    #[test]
    fn test_process_request_round_trip() {
        let response = process_request(&request_json(
            r#"[ { "begin": 4, "end": 7, "new": "dog" } ]"#,
        ))
        .unwrap();

        let envelope: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(envelope["state"], json!({ "revision": 7 }));

        let document = parse_document(envelope["xmi"].as_str().unwrap()).unwrap();
        assert_eq!(document.text.to_string(), "The dog sat.");
        // The pre-existing token keeps its offsets (same-length edit) and
        // the marker records the replaced text.
        let kinds: Vec<AnnotationKind> =
            document.annotations.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AnnotationKind::Delta, AnnotationKind::Token]);
        assert_eq!(
            document.annotations.annotations()[0].old_text.as_deref(),
            Some("cat")
        );
    }
}
