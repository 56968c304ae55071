#![warn(missing_docs)]
//! `annot-core` - Document-Annotation Model
//!
//! A small, pipeline-agnostic document model for text-annotation systems: an
//! immutable text buffer paired with a queryable index of attributed spans
//! ("annotations"). Annotators (tokenizers, parsers, feature scorers, delta
//! engines) produce and consume annotations through the index; this crate does
//! not know what any particular annotation means.
//!
//! # Core Types
//!
//! - [`Document`] - a rope-backed text buffer plus its [`AnnotationIndex`]
//! - [`AnnotationIndex`] - begin-sorted span index with covered-by and
//!   overlap queries
//! - [`Annotation`] - one attributed `[begin, end)` span
//!
//! # Offsets
//!
//! All offsets in this crate are **character offsets** (Unicode scalar
//! values), half-open `[begin, end)`. The text buffer is a [`ropey::Rope`],
//! whose native indexing unit is the same, so slicing by annotation offsets
//! needs no conversion layer.
//!
//! # Ownership
//!
//! An annotation belongs to exactly one index at a time. Moving annotations
//! between documents is an explicit remove-then-insert, for which
//! [`AnnotationIndex::take_covered_by`] is the batch primitive.

pub mod annotation;
pub mod document;
pub mod index;

pub use annotation::{Annotation, AnnotationKind};
pub use document::Document;
pub use index::AnnotationIndex;
