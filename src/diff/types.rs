use serde::{Deserialize, Serialize};

/// One run of consecutive lines (or words) sharing the same diff tag.
///
/// Unchanged segments have both flags false. `text` is the raw concatenated
/// change text including newlines, exactly as the diff primitive produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSegment {
    pub text: String,
    pub is_added: bool,
    pub is_removed: bool,
}

/// Structured line diff between two text blobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub change_segments: Vec<ChangeSegment>,
    pub has_changes: bool,
    /// Old-side lines: removed and unchanged segments only.
    pub old_lines: Vec<String>,
    /// New-side lines: added and unchanged segments only.
    pub new_lines: Vec<String>,
}

/// Whether a change block adds or removes lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Added,
    Removed,
}

/// A maximal contiguous run of added-only or removed-only lines, used as a
/// navigable unit ("jump to next change") in the diff view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeBlock {
    /// Stable DOM-addressable id: "change-1", "change-2", ... in document
    /// order regardless of kind.
    pub id: String,
    pub kind: BlockKind,
    /// Inclusive line range. Removed blocks use old-side numbering, added
    /// blocks use new-side numbering.
    pub start_line: usize,
    pub end_line: usize,
    pub line_count: usize,
    pub summary: String,
}

/// Per-file change statistics for the commit detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStats {
    pub additions: usize,
    pub deletions: usize,
    pub change_blocks: Vec<ChangeBlock>,
}
