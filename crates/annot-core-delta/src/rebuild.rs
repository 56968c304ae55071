//! Builds the edited text from the original text and an edit plan.

use ropey::Rope;

use crate::edit::EditPlan;

/// Apply `plan` to `original`, producing the edited text.
///
/// Single left-to-right pass: for each edit, the untouched gap before it is
/// copied verbatim, then the replacement text is appended; the trailing gap
/// after the last edit closes the output. An empty plan reproduces the
/// input exactly.
///
/// Range validity is [`EditPlan::new`](crate::EditPlan::new)'s
/// responsibility and is not re-checked here.
pub fn rebuild_text(original: &Rope, plan: &EditPlan) -> String {
    let original_len = original.len_chars();
    let mut out = String::with_capacity(original_len);

    let mut cursor = 0;
    for edit in plan.edits() {
        if edit.begin > cursor {
            push_slice(&mut out, original, cursor, edit.begin);
        }
        out.push_str(&edit.new_text);
        cursor = edit.end;
    }
    if cursor < original_len {
        push_slice(&mut out, original, cursor, original_len);
    }

    out
}

fn push_slice(out: &mut String, text: &Rope, begin: usize, end: usize) {
    for chunk in text.slice(begin..end).chunks() {
        out.push_str(chunk);
    }
}
