pub mod graph;
pub mod diff;
pub mod timeline;
pub mod files;

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::OnceLock;

use wasm_bindgen::prelude::*;

use graph::types::LayoutConfig;
use timeline::TimelineCursor;

// ---------------------------------------------------------------------------
// Handle storage for timeline cursors across WASM calls.
//
// The cursor is the one stateful piece of the core; graph layouts and diffs
// are recomputed wholesale per call and never stored.
// ---------------------------------------------------------------------------

/// Global storage for timeline cursors, keyed by opaque u32 handles.
/// OnceLock for lazy one-time initialization, Mutex for interior mutability.
fn cursor_store() -> &'static Mutex<CursorStore> {
    static STORE: OnceLock<Mutex<CursorStore>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(CursorStore::new()))
}

struct CursorStore {
    cursors: HashMap<u32, TimelineCursor>,
    next_handle: u32,
}

impl CursorStore {
    fn new() -> Self {
        CursorStore {
            cursors: HashMap::new(),
            next_handle: 1,
        }
    }

    fn insert(&mut self, cursor: TimelineCursor) -> u32 {
        let handle = self.next_handle;
        self.next_handle = self.next_handle.wrapping_add(1);
        if self.next_handle == 0 {
            self.next_handle = 1; // skip 0 as a sentinel
        }
        self.cursors.insert(handle, cursor);
        handle
    }

    fn get_mut(&mut self, handle: u32) -> Option<&mut TimelineCursor> {
        self.cursors.get_mut(&handle)
    }

    fn remove(&mut self, handle: u32) {
        self.cursors.remove(&handle);
    }
}

// ---------------------------------------------------------------------------
// JSON error wrapper.
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
struct ErrorResult {
    error: String,
}

fn json_error(msg: &str) -> String {
    serde_json::to_string(&ErrorResult {
        error: msg.to_string(),
    })
    .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", msg))
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Compute the full commit graph layout from raw git log output.
///
/// Input: raw bytes of NUL-delimited, record-separator-separated git log in
/// time-descending order (see `graph::parser` for the format string).
/// Returns: JSON `GraphLayout` with { nodes, edges, canvasHeight, canvasWidth }.
#[wasm_bindgen]
pub fn compute_graph_layout(raw_log: &[u8]) -> String {
    let commits = graph::parse_log(raw_log);
    let layout = graph::compute_layout(&commits, &LayoutConfig::default());
    serde_json::to_string(&layout)
        .unwrap_or_else(|e| json_error(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// Diff
// ---------------------------------------------------------------------------

/// Structured line diff between two blobs. Returns JSON `DiffResult`.
#[wasm_bindgen]
pub fn compute_line_diff(old_text: &str, new_text: &str) -> String {
    let result = diff::compute_line_diff(old_text, new_text);
    serde_json::to_string(&result)
        .unwrap_or_else(|e| json_error(&format!("Serialization error: {}", e)))
}

/// Word-plus-whitespace granularity change segments, for fine-grained
/// highlighting. Returns a JSON array of segments.
#[wasm_bindgen]
pub fn compute_word_diff(old_text: &str, new_text: &str) -> String {
    let segments = diff::word_segments(old_text, new_text);
    serde_json::to_string(&segments)
        .unwrap_or_else(|e| json_error(&format!("Serialization error: {}", e)))
}

/// Character-weighted similarity score 0..=100 between two blobs.
#[wasm_bindgen]
pub fn compute_similarity(old_text: &str, new_text: &str) -> u32 {
    diff::compute_similarity(old_text, new_text)
}

/// Per-block change statistics. Returns JSON `ChangeStats`.
#[wasm_bindgen]
pub fn compute_change_stats(old_text: &str, new_text: &str) -> String {
    let stats = diff::compute_change_stats(old_text, new_text);
    serde_json::to_string(&stats)
        .unwrap_or_else(|e| json_error(&format!("Serialization error: {}", e)))
}

/// Side-by-side diff view as an HTML fragment for the webview.
#[wasm_bindgen]
pub fn render_side_by_side(old_text: &str, new_text: &str, title: &str) -> String {
    diff::render_side_by_side(old_text, new_text, title)
}

/// Unified diff text with `---`/`+++` headers.
#[wasm_bindgen]
pub fn render_unified_diff(old_text: &str, new_text: &str, filename: &str) -> String {
    diff::render_unified_diff(old_text, new_text, filename)
}

// ---------------------------------------------------------------------------
// Changed files
// ---------------------------------------------------------------------------

/// Group a commit's changed files into a directory tree.
///
/// Input: JSON array of { status, path }.
/// Returns: JSON array of `FileTreeNode` roots.
#[wasm_bindgen]
pub fn group_changed_files(changes_json: &str) -> String {
    let changes: Vec<files::FileChange> = match serde_json::from_str(changes_json) {
        Ok(c) => c,
        Err(e) => return json_error(&format!("Invalid file change list: {}", e)),
    };
    let tree = files::group_changed_files(&changes);
    serde_json::to_string(&tree)
        .unwrap_or_else(|e| json_error(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Create a timeline cursor over newline-separated commit hashes
/// (newest first). Returns an opaque handle, or 0 if the store is poisoned.
/// Must be freed with `free_timeline` when the session closes.
#[wasm_bindgen]
pub fn create_timeline(raw_hashes: &str) -> u32 {
    let hashes: Vec<String> = raw_hashes
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect();

    let mut cursor = TimelineCursor::new();
    cursor.initialize(hashes);

    match cursor_store().lock() {
        Ok(mut store) => store.insert(cursor),
        Err(_) => 0,
    }
}

fn with_cursor<T>(handle: u32, default: T, f: impl FnOnce(&mut TimelineCursor) -> T) -> T {
    match cursor_store().lock() {
        Ok(mut store) => match store.get_mut(handle) {
            Some(cursor) => f(cursor),
            None => default,
        },
        Err(_) => default,
    }
}

/// Step toward newer commits. Returns the new current hash, or "" at the end.
#[wasm_bindgen]
pub fn timeline_next(handle: u32) -> String {
    with_cursor(handle, String::new(), |c| {
        c.next().map(|h| h.to_string()).unwrap_or_default()
    })
}

/// Step toward older commits. Returns the new current hash, or "" at the end.
#[wasm_bindgen]
pub fn timeline_previous(handle: u32) -> String {
    with_cursor(handle, String::new(), |c| {
        c.previous().map(|h| h.to_string()).unwrap_or_default()
    })
}

/// Jump to a specific hash. False means the hash is not in the current
/// window (commonly a pagination miss); the cursor is left unchanged.
#[wasm_bindgen]
pub fn timeline_jump_to(handle: u32, hash: &str) -> bool {
    with_cursor(handle, false, |c| c.jump_to(hash))
}

/// Current hash under the cursor, or "" for an empty or unknown timeline.
#[wasm_bindgen]
pub fn timeline_current(handle: u32) -> String {
    with_cursor(handle, String::new(), |c| {
        c.current_hash().map(|h| h.to_string()).unwrap_or_default()
    })
}

#[wasm_bindgen]
pub fn timeline_count(handle: u32) -> usize {
    with_cursor(handle, 0, |c| c.count())
}

#[wasm_bindgen]
pub fn timeline_can_go_next(handle: u32) -> bool {
    with_cursor(handle, false, |c| c.can_go_next())
}

#[wasm_bindgen]
pub fn timeline_can_go_previous(handle: u32) -> bool {
    with_cursor(handle, false, |c| c.can_go_previous())
}

/// Free a timeline handle. After this the handle is invalid.
#[wasm_bindgen]
pub fn free_timeline(handle: u32) {
    if let Ok(mut store) = cursor_store().lock() {
        store.remove(handle);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_graph_layout_json_shape() {
        let raw = b"aaa111\x00bbb222\x00Alice\x00alice@example.com\x00Tue Nov 14 2023\x001700000000\x00Second commit\x00 (HEAD -> main)\x1ebbb222\x00\x00Bob\x00bob@example.com\x00Mon Nov 13 2023\x001699999000\x00Initial commit\x00\x1e";
        let json = compute_graph_layout(raw);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["edges"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["nodes"][0]["lane"], 0);
        assert_eq!(parsed["nodes"][0]["commitType"], "branchTip");
        assert_eq!(parsed["nodes"][1]["commitType"], "initial");
        assert!(parsed["canvasHeight"].as_i64().unwrap() > 0);
        assert!(parsed["canvasWidth"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_compute_line_diff_json_shape() {
        let json = compute_line_diff("a\nb", "a\nc");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["hasChanges"], true);
        assert!(parsed["changeSegments"].as_array().unwrap().len() >= 2);
        assert_eq!(parsed["oldLines"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["newLines"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_compute_word_diff_and_similarity() {
        let json = compute_word_diff("one two", "one three");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.as_array().unwrap().len() >= 2);

        assert_eq!(compute_similarity("", ""), 100);
        assert_eq!(compute_similarity("abc", ""), 0);
    }

    #[test]
    fn test_compute_change_stats_json_shape() {
        let json = compute_change_stats("a\nb\nc", "a\nx\nc");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["additions"], 1);
        assert_eq!(parsed["deletions"], 1);
        assert_eq!(parsed["changeBlocks"][0]["id"], "change-1");
    }

    #[test]
    fn test_group_changed_files_roundtrip() {
        let json = group_changed_files(r#"[{"status":"A","path":"src/new.rs"},{"status":"M","path":"README.md"}]"#);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let roots = parsed.as_array().unwrap();
        assert_eq!(roots.len(), 2);
        // Folder sorts before file.
        assert_eq!(roots[0]["name"], "src");
        assert_eq!(roots[0]["kind"], "folder");
        assert_eq!(roots[1]["name"], "README.md");
    }

    #[test]
    fn test_group_changed_files_rejects_bad_json() {
        let json = group_changed_files("not json");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("error").is_some());
    }

    #[test]
    fn test_timeline_handle_lifecycle() {
        let handle = create_timeline("c3\nc2\nc1\n");
        assert_ne!(handle, 0);
        assert_eq!(timeline_count(handle), 3);
        assert_eq!(timeline_current(handle), "c3");

        assert_eq!(timeline_previous(handle), "c2");
        assert!(timeline_can_go_next(handle));
        assert!(timeline_jump_to(handle, "c1"));
        assert!(!timeline_jump_to(handle, "missing"));
        assert_eq!(timeline_current(handle), "c1");

        free_timeline(handle);
        // Freed handle behaves as empty.
        assert_eq!(timeline_count(handle), 0);
        assert_eq!(timeline_current(handle), "");
        assert!(!timeline_jump_to(handle, "c1"));
    }
}
