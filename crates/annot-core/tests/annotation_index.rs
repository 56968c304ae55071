//! Index behavior against a real annotated document.

use annot_core::{Annotation, AnnotationKind, Document};

fn annotated_sentence() -> Document {
    // "The cat sat."
    //  0123456789012
    let mut document = Document::new("The cat sat.");
    document
        .annotations
        .insert(Annotation::new(0, 12, AnnotationKind::Sentence));
    document
        .annotations
        .insert(Annotation::new(0, 3, AnnotationKind::Token).with_label("DT"));
    document
        .annotations
        .insert(Annotation::new(4, 7, AnnotationKind::Token).with_label("NN"));
    document
        .annotations
        .insert(Annotation::new(8, 11, AnnotationKind::Token).with_label("VBD"));
    document
}

#[test]
fn covered_by_returns_only_fully_contained_annotations() {
    let document = annotated_sentence();

    let covered = document.annotations.covered_by(0, 7);
    let kinds: Vec<AnnotationKind> = covered.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AnnotationKind::Token, AnnotationKind::Token]);

    // The whole text covers everything.
    assert_eq!(document.annotations.covered_by(0, 12).len(), 4);
}

#[test]
fn overlapping_includes_partial_hits() {
    let document = annotated_sentence();

    let hits = document.annotations.overlapping(5, 9);
    let kinds: Vec<AnnotationKind> = hits.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AnnotationKind::Sentence,
            AnnotationKind::Token,
            AnnotationKind::Token,
        ]
    );
}

#[test]
fn take_covered_by_preserves_begin_order_and_drains() {
    let mut document = annotated_sentence();

    let taken = document.annotations.take_covered_by(0, 12);
    assert_eq!(taken.len(), 4);
    let begins: Vec<usize> = taken.iter().map(|a| a.begin).collect();
    assert_eq!(begins, vec![0, 0, 4, 8]);
    assert!(document.annotations.is_empty());
}

#[test]
fn annotation_text_is_sliceable_by_offsets() {
    let document = annotated_sentence();

    let texts: Vec<String> = document
        .annotations
        .iter()
        .filter(|a| a.kind == AnnotationKind::Token)
        .map(|a| document.slice(a.begin, a.end))
        .collect();
    assert_eq!(texts, vec!["The", "cat", "sat"]);
}
