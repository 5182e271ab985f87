use super::segment::{line_segments, segment_lines};
use super::types::{BlockKind, ChangeBlock, ChangeStats};

fn pluralize_lines(count: usize) -> String {
    if count == 1 {
        "1 line".to_string()
    } else {
        format!("{} lines", count)
    }
}

/// Walk the line diff and extract per-block change statistics.
///
/// Old-line and new-line counters advance independently: removed blocks are
/// numbered against the old side, added blocks against the new side, and
/// unchanged segments advance both without emitting a block. Block ids are
/// sequential in document order regardless of kind.
pub fn compute_change_stats(old_text: &str, new_text: &str) -> ChangeStats {
    let mut additions = 0usize;
    let mut deletions = 0usize;
    let mut change_blocks: Vec<ChangeBlock> = Vec::new();

    let mut old_line = 1usize;
    let mut new_line = 1usize;

    for segment in line_segments(old_text, new_text) {
        let count = segment_lines(&segment.text).len();
        if count == 0 {
            continue;
        }

        if segment.is_added {
            additions += count;
            change_blocks.push(ChangeBlock {
                id: format!("change-{}", change_blocks.len() + 1),
                kind: BlockKind::Added,
                start_line: new_line,
                end_line: new_line + count - 1,
                line_count: count,
                summary: format!("{} added", pluralize_lines(count)),
            });
            new_line += count;
        } else if segment.is_removed {
            deletions += count;
            change_blocks.push(ChangeBlock {
                id: format!("change-{}", change_blocks.len() + 1),
                kind: BlockKind::Removed,
                start_line: old_line,
                end_line: old_line + count - 1,
                line_count: count,
                summary: format!("{} removed", pluralize_lines(count)),
            });
            old_line += count;
        } else {
            old_line += count;
            new_line += count;
        }
    }

    ChangeStats {
        additions,
        deletions,
        change_blocks,
    }
}
