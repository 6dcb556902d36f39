use super::*;

#[test]
fn skips_are_classified_and_counted() {
    let mut report = BatchReport::default();
    report.record_ok();
    report.record_skip("Hoe_Down_Clip_1", &ForgeError::grammar_mismatch("Hoe_Down_Clip_1"));
    report.record_skip("sheet_b", &ForgeError::empty_segmentation("sheet_b"));
    report.record_skip("Slice_Down_Clip_2", &ForgeError::validation("no frames"));

    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 3);
    assert!(!report.is_clean());
    assert_eq!(report.issues_of(IssueKind::GrammarMismatch).count(), 1);
    assert_eq!(report.issues_of(IssueKind::InvalidInput).count(), 1);
}

#[test]
fn summary_lists_offending_names() {
    let mut report = BatchReport::default();
    report.record_skip("Pierce_Diagonal_Clip_4", &ForgeError::unrecognized_direction("x"));
    let summary = report.summary();
    assert!(summary.starts_with("processed 0, skipped 1"));
    assert!(summary.contains("UnrecognizedDirection: Pierce_Diagonal_Clip_4"));
}

#[test]
fn empty_report_is_clean() {
    assert!(BatchReport::default().is_clean());
}
