//! Error types for delta decoding and validation.
//!
//! Everything here is raised *before* the rebuild/relocate transformation
//! touches a document: a failing request is rejected wholesale.

use thiserror::Error;

/// A structurally invalid edit list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditPlanError {
    #[error("edit has begin {begin} greater than end {end}")]
    /// An edit's begin offset exceeds its end offset.
    InvertedRange {
        /// The edit's begin offset.
        begin: usize,
        /// The edit's end offset.
        end: usize,
    },

    #[error("edit {begin}..{end} exceeds the document length {length}")]
    /// An edit reaches past the end of the original text.
    OutOfBounds {
        /// The edit's begin offset.
        begin: usize,
        /// The edit's end offset.
        end: usize,
        /// The original text length in characters.
        length: usize,
    },

    #[error("edits {first_begin}..{first_end} and {second_begin}..{second_end} overlap")]
    /// Two edits overlap after sorting by begin offset.
    Overlap {
        /// Begin offset of the earlier edit.
        first_begin: usize,
        /// End offset of the earlier edit.
        first_end: usize,
        /// Begin offset of the later edit.
        second_begin: usize,
        /// End offset of the later edit.
        second_end: usize,
    },
}

/// Errors produced while decoding a delta request.
#[derive(Debug, Error)]
pub enum DeltaError {
    #[error("invalid request: {0}")]
    /// The request envelope is not the documented JSON object shape.
    InvalidRequest(String),

    #[error("invalid document: {0}")]
    /// The serialized original document cannot be parsed.
    InvalidDocument(String),

    #[error("malformed edits: {0}")]
    /// The edit list failed validation.
    MalformedEdits(#[from] EditPlanError),
}
