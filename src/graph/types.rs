use serde::{Deserialize, Serialize};

/// The type of a git reference parsed from a `%d` decoration string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RefType {
    Branch,
    RemoteBranch,
    Tag,
    Head,
}

/// A single git reference (branch, tag, HEAD) decorating a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefInfo {
    pub name: String,
    pub ref_type: RefType,
    pub is_head: bool,
}

/// A normalized commit as parsed from git log output.
///
/// The sequence handed to the layout engine must be strictly time-descending
/// (newest first); the engine performs a single forward pass and never re-sorts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRecord {
    pub hash: String,
    /// First entry is the mainline parent. Empty for root commits.
    pub parent_hashes: Vec<String>,
    pub author: String,
    pub email: String,
    /// Display-formatted date string (`%ad`), passed through untouched.
    pub date: String,
    /// Unix epoch seconds (`%at`).
    pub timestamp: u64,
    pub message: String,
    /// Raw `%d` decoration string, e.g. "HEAD -> main, tag: v1.0, origin/main".
    pub ref_names: String,
}

/// Display-only classification of a commit. Has no effect on layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CommitType {
    Initial,
    Merge,
    BranchTip,
    Tag,
    Fix,
    Feature,
    Normal,
}

/// A positioned node in the commit graph, ready for the webview renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub hash: String,
    pub parent_hashes: Vec<String>,
    pub author: String,
    pub email: String,
    pub date: String,
    pub timestamp: u64,
    pub message: String,
    pub ref_names: String,
    /// Horizontal pixel position, derived from `lane`.
    pub x: i32,
    /// Vertical pixel position, derived from the commit's sequence index.
    pub y: i32,
    pub lane: i32,
    /// Hex color string from the lane palette.
    pub color: String,
    pub commit_type: CommitType,
}

/// An edge connecting a commit to one of its parents.
///
/// `target_hash` is always the parent side. Lanes at both endpoints are
/// recorded so the renderer can route orthogonal connector paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source_hash: String,
    pub target_hash: String,
    pub source_lane: i32,
    pub target_lane: i32,
}

/// The complete layout result, returned as JSON to the extension host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLayout {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub canvas_height: i32,
    pub canvas_width: i32,
}

/// Pixel geometry for the graph canvas.
///
/// The paddings leave room for labels and avatars drawn by the webview; the
/// engine only guarantees the margins, the renderer owns what goes in them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub row_height: i32,
    pub top_margin: i32,
    pub lane_spacing: i32,
    pub left_margin: i32,
    pub vertical_padding: i32,
    pub horizontal_padding: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            row_height: 40,
            top_margin: 20,
            lane_spacing: 24,
            left_margin: 16,
            vertical_padding: 40,
            horizontal_padding: 160,
        }
    }
}
