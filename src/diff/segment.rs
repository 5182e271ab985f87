use similar::{ChangeTag, TextDiff};

use super::types::{ChangeSegment, DiffResult};

/// Merge a change stream into maximal same-tag segments.
fn group_segments(parts: impl Iterator<Item = (ChangeTag, String)>) -> Vec<ChangeSegment> {
    let mut segments: Vec<ChangeSegment> = Vec::new();
    for (tag, text) in parts {
        let is_added = tag == ChangeTag::Insert;
        let is_removed = tag == ChangeTag::Delete;
        match segments.last_mut() {
            Some(last) if last.is_added == is_added && last.is_removed == is_removed => {
                last.text.push_str(&text);
            }
            _ => segments.push(ChangeSegment {
                text,
                is_added,
                is_removed,
            }),
        }
    }
    segments
}

/// Line-granularity change segments between two blobs.
pub fn line_segments(old_text: &str, new_text: &str) -> Vec<ChangeSegment> {
    let diff = TextDiff::from_lines(old_text, new_text);
    group_segments(
        diff.iter_all_changes()
            .map(|c| (c.tag(), c.value().to_string())),
    )
}

/// Word-plus-whitespace granularity segments, used for similarity scoring and
/// fine-grained highlighting.
pub fn word_segments(old_text: &str, new_text: &str) -> Vec<ChangeSegment> {
    let diff = TextDiff::from_words(old_text, new_text);
    group_segments(
        diff.iter_all_changes()
            .map(|c| (c.tag(), c.value().to_string())),
    )
}

/// Split a segment's raw text into lines.
///
/// A trailing newline makes `split` produce one empty trailing entry that is
/// an artifact of the split, not a real line, so it is stripped. Text that
/// does not end in a newline keeps every entry; a genuinely empty trailing
/// line can only come from "\n\n", which still ends in a newline and loses
/// exactly the artifact.
pub(crate) fn segment_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(|l| l.to_string()).collect();
    if text.ends_with('\n') {
        lines.pop();
    }
    lines
}

/// Compute the structured line diff between two blobs.
///
/// Removed-segment lines go only to the old side, added-segment lines only to
/// the new side, unchanged lines to both. Missing content (deleted file, path
/// absent at a revision) is represented upstream as an empty string, never as
/// an error.
pub fn compute_line_diff(old_text: &str, new_text: &str) -> DiffResult {
    let change_segments = line_segments(old_text, new_text);
    let has_changes = change_segments
        .iter()
        .any(|s| s.is_added || s.is_removed);

    let mut old_lines = Vec::new();
    let mut new_lines = Vec::new();
    for segment in &change_segments {
        let lines = segment_lines(&segment.text);
        if segment.is_removed {
            old_lines.extend(lines);
        } else if segment.is_added {
            new_lines.extend(lines);
        } else {
            old_lines.extend(lines.iter().cloned());
            new_lines.extend(lines);
        }
    }

    DiffResult {
        change_segments,
        has_changes,
        old_lines,
        new_lines,
    }
}

/// Similarity score 0..=100 between two blobs.
///
/// Character-length-weighted over the word diff: the score is the share of
/// characters sitting in unchanged segments, not the share of segments.
pub fn compute_similarity(old_text: &str, new_text: &str) -> u32 {
    if old_text.is_empty() && new_text.is_empty() {
        return 100;
    }
    if old_text.is_empty() || new_text.is_empty() {
        return 0;
    }

    let mut unchanged = 0usize;
    let mut total = 0usize;
    for segment in word_segments(old_text, new_text) {
        let len = segment.text.chars().count();
        total += len;
        if !segment.is_added && !segment.is_removed {
            unchanged += len;
        }
    }

    if total == 0 {
        return 100;
    }
    (100.0 * unchanged as f64 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_has_no_changes() {
        let result = compute_line_diff("a\nb\nc", "a\nb\nc");
        assert!(!result.has_changes);
        assert_eq!(result.old_lines, vec!["a", "b", "c"]);
        assert_eq!(result.new_lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_vs_empty() {
        let result = compute_line_diff("", "");
        assert!(!result.has_changes);
        assert!(result.old_lines.is_empty());
        assert!(result.new_lines.is_empty());
    }

    #[test]
    fn test_single_line_replacement() {
        let result = compute_line_diff("a\nb\nc", "a\nx\nc");
        assert!(result.has_changes);
        assert_eq!(result.old_lines, vec!["a", "b", "c"]);
        assert_eq!(result.new_lines, vec!["a", "x", "c"]);

        let removed: Vec<_> = result
            .change_segments
            .iter()
            .filter(|s| s.is_removed)
            .collect();
        let added: Vec<_> = result
            .change_segments
            .iter()
            .filter(|s| s.is_added)
            .collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].text, "b\n");
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].text, "x\n");
    }

    #[test]
    fn test_addition_only_routes_to_new_side() {
        let result = compute_line_diff("a\nc", "a\nb\nc");
        assert_eq!(result.old_lines, vec!["a", "c"]);
        assert_eq!(result.new_lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_segment_lines_strips_split_artifact() {
        assert_eq!(segment_lines("a\nb\n"), vec!["a", "b"]);
        // No trailing newline: nothing to strip.
        assert_eq!(segment_lines("a\nb"), vec!["a", "b"]);
        // Real empty trailing line survives; only the artifact goes.
        assert_eq!(segment_lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_similarity_boundaries() {
        assert_eq!(compute_similarity("", ""), 100);
        assert_eq!(compute_similarity("abc", ""), 0);
        assert_eq!(compute_similarity("", "abc"), 0);
        assert_eq!(compute_similarity("abc", "abc"), 100);
    }

    #[test]
    fn test_similarity_is_character_weighted() {
        // Shared prefix dominates; score stays well above half.
        let score = compute_similarity("the quick brown fox", "the quick brown cat");
        assert!(score > 50, "expected >50, got {}", score);
        assert!(score < 100);

        let disjoint = compute_similarity("aaaa", "zzzz");
        assert_eq!(disjoint, 0);
    }

    #[test]
    fn test_word_segments_cover_both_inputs() {
        let segments = word_segments("one two", "one three");
        assert!(segments.iter().any(|s| !s.is_added && !s.is_removed));
        assert!(segments.iter().any(|s| s.is_removed));
        assert!(segments.iter().any(|s| s.is_added));
    }
}
