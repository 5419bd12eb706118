//! Tests for line edits

use super::*;
use proptest::prelude::*;

/// Apply an edit to a list of labelled lines, using `fresh` for new lines.
fn apply(lines: &[String], edit: LineEdit, fresh: &mut usize) -> Vec<String> {
    let mut out = lines[..edit.start_line].to_vec();
    for _ in 0..edit.new_line_count {
        out.push(format!("new{}", fresh));
        *fresh += 1;
    }
    out.extend_from_slice(&lines[edit.end_line..]);
    out
}

#[test]
fn test_new_orders_range() {
    let edit = LineEdit::new(5, 2, 1);
    assert_eq!(edit.start_line, 5);
    assert_eq!(edit.end_line, 5);
}

#[test]
fn test_line_delta() {
    assert_eq!(LineEdit::new(2, 4, 5).line_delta(), 3);
    assert_eq!(LineEdit::new(2, 4, 0).line_delta(), -2);
    assert_eq!(LineEdit::lines_changed(1, 3).line_delta(), 0);
}

#[test]
fn test_clamp_fixes_count_from_lengths() {
    let edit = LineEdit::new(2, 3, 1).clamp(10, 12).unwrap();
    assert_eq!(edit, LineEdit::new(2, 3, 3));
}

#[test]
fn test_clamp_bounds_range_to_document() {
    let edit = LineEdit::new(8, 20, 1).clamp(10, 9).unwrap();
    assert_eq!(edit, LineEdit::new(8, 10, 1));
}

#[test]
fn test_clamp_rejects_impossible_shrink() {
    // Replacing one line cannot remove five
    assert_eq!(LineEdit::new(0, 1, 0).clamp(10, 5), None);
}

#[test]
fn test_merge_adjacent_inserts() {
    // Insert a line at 3, then another right after it
    let merged = LineEdit::new(3, 3, 1).merge(LineEdit::new(4, 4, 1));
    assert_eq!(merged, LineEdit::new(3, 3, 2));
}

#[test]
fn test_merge_disjoint_edits_covers_both() {
    let merged = LineEdit::lines_changed(1, 2).merge(LineEdit::lines_changed(6, 7));
    assert_eq!(merged, LineEdit::lines_changed(1, 7));
}

// Applying the merged edit to the original lines changes exactly the lines
// touched by the two edits in sequence: everything outside it survives.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_merge_covers_sequential_edits(
        len in 1usize..20,
        a in (0usize..20, 0usize..5, 0usize..5),
        b in (0usize..30, 0usize..5, 0usize..5),
    ) {
        let original: Vec<String> = (0..len).map(|i| format!("old{}", i)).collect();

        let start_a = a.0.min(len);
        let first = LineEdit::new(start_a, (start_a + a.1).min(len), a.2);
        let mut fresh = 0;
        let after_first = apply(&original, first, &mut fresh);

        let len_b = after_first.len();
        let start_b = b.0.min(len_b);
        let second = LineEdit::new(start_b, (start_b + b.1).min(len_b), b.2);
        let after_second = apply(&after_first, second, &mut fresh);

        let merged = first.merge(second);
        prop_assert!(merged.end_line <= len);
        prop_assert_eq!(
            len as isize + merged.line_delta(),
            after_second.len() as isize
        );
        prop_assert_eq!(&after_second[..merged.start_line], &original[..merged.start_line]);
        prop_assert_eq!(
            &after_second[merged.start_line + merged.new_line_count..],
            &original[merged.end_line..]
        );
    }
}
