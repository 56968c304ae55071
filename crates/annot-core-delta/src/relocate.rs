//! Moves annotations from the original document into the edited one.
//!
//! The original text decomposes into alternating regions: *gaps* (untouched
//! between edits) and *edited ranges*. Annotations fully covered by a gap
//! move into the new index with their offsets shifted by the cumulative
//! length change of all prior edits. Annotations inside an edited range are
//! discarded together with the text they covered; one delta marker per edit
//! records the replacement. Annotations straddling a gap boundary are
//! neither moved nor truncated: they are dropped.

use annot_core::{Annotation, AnnotationIndex};
use ropey::Rope;

use crate::edit::{EditPlan, TextEdit};

/// Relocate all annotations in `source` into `target` according to `plan`,
/// and emit one delta marker per edit.
///
/// `source` is the original document's index and is drained destructively;
/// `target` is the edited document's (initially empty) index.
/// `original_text` is the text `source`'s offsets refer to, and must be the
/// text the plan was validated against.
///
/// Gaps are processed left to right; `shift` accumulates the net length
/// change (inserted minus replaced characters) of the edits passed so far,
/// so an original offset `o` inside a later gap lands at `o + shift`.
pub fn relocate(
    source: &mut AnnotationIndex,
    target: &mut AnnotationIndex,
    original_text: &Rope,
    plan: &EditPlan,
) {
    let original_len = original_text.len_chars();

    let mut original_end = 0;
    let mut shift: isize = 0;
    for edit in plan.edits() {
        if edit.begin > original_end {
            move_annotations(source, target, original_end, edit.begin, shift);
        }

        original_end = edit.end;
        emit_delta_marker(target, edit, shift, original_text);
        shift += edit.len_delta();
    }
    if original_end < original_len {
        move_annotations(source, target, original_end, original_len, shift);
    }

    log::trace!(
        target: "annot.delta",
        "relocated {} annotations, dropped {}, emitted {} markers",
        target.len() - plan.len(),
        source.len(),
        plan.len(),
    );
}

/// Move every annotation fully covered by `[begin, end)` from `source` to
/// `target`, adding `shift` to its offsets.
fn move_annotations(
    source: &mut AnnotationIndex,
    target: &mut AnnotationIndex,
    begin: usize,
    end: usize,
    shift: isize,
) {
    for mut annotation in source.take_covered_by(begin, end) {
        annotation.begin = (annotation.begin as isize + shift).max(0) as usize;
        annotation.end = (annotation.end as isize + shift).max(0) as usize;
        target.insert(annotation);
    }
}

/// Insert the delta marker for `edit` into `target`.
///
/// `shift` is the cumulative shift of the edits *before* this one. The
/// marker spans `[begin + shift, end + shift)`: the edit's original range
/// translated into the new text, keeping the original width even when the
/// replacement text has a different length. Its payload is the replaced
/// original substring.
fn emit_delta_marker(
    target: &mut AnnotationIndex,
    edit: &TextEdit,
    shift: isize,
    original_text: &Rope,
) {
    let begin = (edit.begin as isize + shift).max(0) as usize;
    let end = (edit.end as isize + shift).max(0) as usize;
    let old_text = original_text.slice(edit.begin..edit.end).to_string();

    target.insert(Annotation::delta(begin, end, old_text));
}
