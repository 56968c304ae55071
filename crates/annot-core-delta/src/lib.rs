#![warn(missing_docs)]
//! `annot-core-delta` - Delta application for `annot-core`.
//!
//! Takes an annotated document plus a list of character-range text
//! replacements ("deltas"), produces the edited text, and relocates the
//! existing annotations so they stay valid in the new text. Each edited
//! region is marked with a [`annot_core::AnnotationKind::Delta`] annotation
//! carrying the replaced text.
//!
//! # Pipeline
//!
//! 1. [`request::DeltaRequest::decode`] - parse the wire envelope into the
//!    original [`annot_core::Document`], a validated [`EditPlan`], and the
//!    opaque client state token.
//! 2. [`rebuild::rebuild_text`] - apply the plan to the original text.
//! 3. [`relocate::relocate`] - move annotations from the original index
//!    into the new document's index, shifted by the cumulative length
//!    change, and emit one delta marker per edit.
//! 4. [`request::encode_response`] - serialize the new document and echo
//!    the state token.
//!
//! [`request::process_request`] runs all four steps for one request.
//!
//! # Invariants
//!
//! - Edits are validated up front ([`EditPlan::new`]): in-bounds,
//!   non-inverted, pairwise non-overlapping after sorting by begin. A
//!   request that fails validation mutates nothing.
//! - Only annotations *fully covered* by an untouched gap between edits are
//!   relocated; an annotation straddling an edit boundary is dropped.
//! - The transformation is synchronous, in-memory and deterministic; each
//!   request operates on its own document pair.

pub mod document_io;
pub mod edit;
pub mod error;
pub mod rebuild;
pub mod relocate;
pub mod request;

pub use document_io::{parse_document, serialize_document};
pub use edit::{EditPlan, TextEdit};
pub use error::{DeltaError, EditPlanError};
pub use rebuild::rebuild_text;
pub use relocate::relocate;
pub use request::{DeltaRequest, apply_edit_plan, encode_response, process_request};
