use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::refs::parse_ref_names;
use super::types::*;

/// Lane color palette; a node's color is `PALETTE[lane % PALETTE.len()]`.
const PALETTE: [&str; 10] = [
    "#e06c75", "#61afef", "#98c379", "#c678dd", "#d19a66",
    "#56b6c2", "#e5c07b", "#be5046", "#528bff", "#7f848e",
];

fn fix_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)fix|bug|issue").unwrap())
}

fn feature_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)feat|add|new").unwrap())
}

/// Classify a commit for icon/legend selection.
///
/// Structural classification (initial/merge) always wins over ref decorations,
/// and decorations win over the message heuristics. The message matching is
/// intentionally approximate; it drives display only, never layout.
pub fn classify_commit(record: &CommitRecord) -> CommitType {
    if record.parent_hashes.is_empty() {
        return CommitType::Initial;
    }
    if record.parent_hashes.len() > 1 {
        return CommitType::Merge;
    }

    let refs = parse_ref_names(&record.ref_names);
    if refs.iter().any(|r| r.ref_type == RefType::Tag) {
        return CommitType::Tag;
    }
    if !refs.is_empty() {
        return CommitType::BranchTip;
    }

    if fix_pattern().is_match(&record.message) {
        return CommitType::Fix;
    }
    if feature_pattern().is_match(&record.message) {
        return CommitType::Feature;
    }

    CommitType::Normal
}

/// Pick the free lane closest to `origin`, or append a new one.
///
/// Left-to-right scan with a strict comparison, so ties break toward the
/// lower lane index; this keeps the choice deterministic.
fn nearest_free_lane(lanes: &mut Vec<Option<String>>, origin: usize) -> usize {
    let distance = |lane: usize| lane.abs_diff(origin);

    let mut best: Option<usize> = None;
    for (i, slot) in lanes.iter().enumerate() {
        if slot.is_none() && best.is_none_or(|b| distance(i) < distance(b)) {
            best = Some(i);
        }
    }

    match best {
        Some(lane) => lane,
        None => {
            lanes.push(None);
            lanes.len() - 1
        }
    }
}

/// Compute the graph layout for a time-descending (newest first) commit list.
///
/// Single forward pass. `lanes` is a pending-expectation table: index = lane,
/// value = the parent hash that lane is waiting to reconnect with, or None if
/// the lane is free.
///
/// For each commit:
/// 1. If some lane expects this commit's hash, the commit lands there
///    (reconnecting a child's line); otherwise it takes the first free lane,
///    appending one if all are busy.
/// 2. The first parent re-reserves the same lane, which keeps a straight
///    branch on one visual line.
/// 3. Each additional (merge) parent without an existing reservation gets the
///    free lane nearest to the commit's own lane, minimizing connector length.
///
/// Root commits reserve nothing, so their lane frees up for reuse. The engine
/// never re-sorts and never deduplicates; it is a pure function of input order.
pub fn compute_layout(commits: &[CommitRecord], config: &LayoutConfig) -> GraphLayout {
    let mut lanes: Vec<Option<String>> = Vec::new();
    let mut nodes: Vec<GraphNode> = Vec::with_capacity(commits.len());
    let mut max_lane: i32 = -1;

    for (index, commit) in commits.iter().enumerate() {
        let lane = match lanes
            .iter()
            .position(|slot| slot.as_deref() == Some(commit.hash.as_str()))
        {
            Some(expected) => expected,
            None => match lanes.iter().position(|slot| slot.is_none()) {
                Some(free) => free,
                None => {
                    lanes.push(None);
                    lanes.len() - 1
                }
            },
        };
        lanes[lane] = None;

        if let Some(first_parent) = commit.parent_hashes.first() {
            lanes[lane] = Some(first_parent.clone());

            for parent in commit.parent_hashes.iter().skip(1) {
                // A parent already pending in some lane (shared with another
                // child, or a degenerate duplicate of the first parent) must
                // not claim a second reservation.
                if lanes
                    .iter()
                    .any(|slot| slot.as_deref() == Some(parent.as_str()))
                {
                    continue;
                }
                let reserved = nearest_free_lane(&mut lanes, lane);
                lanes[reserved] = Some(parent.clone());
            }
        }

        let lane = lane as i32;
        max_lane = max_lane.max(lane);

        nodes.push(GraphNode {
            hash: commit.hash.clone(),
            parent_hashes: commit.parent_hashes.clone(),
            author: commit.author.clone(),
            email: commit.email.clone(),
            date: commit.date.clone(),
            timestamp: commit.timestamp,
            message: commit.message.clone(),
            ref_names: commit.ref_names.clone(),
            x: lane * config.lane_spacing + config.left_margin,
            y: index as i32 * config.row_height + config.top_margin,
            lane,
            color: PALETTE[lane as usize % PALETTE.len()].to_string(),
            commit_type: classify_commit(commit),
        });
    }

    // Edges connect each commit to the parents inside the loaded window.
    // A parent beyond the fetched window (pagination limit) is silently
    // dropped rather than emitted as a dangling edge.
    let lane_of: HashMap<&str, i32> = nodes.iter().map(|n| (n.hash.as_str(), n.lane)).collect();

    let mut edges: Vec<GraphEdge> = Vec::new();
    for node in &nodes {
        for parent in &node.parent_hashes {
            if let Some(&target_lane) = lane_of.get(parent.as_str()) {
                edges.push(GraphEdge {
                    source_hash: node.hash.clone(),
                    target_hash: parent.clone(),
                    source_lane: node.lane,
                    target_lane,
                });
            }
        }
    }

    GraphLayout {
        canvas_height: nodes.len() as i32 * config.row_height + config.vertical_padding,
        canvas_width: (max_lane + 1) * config.lane_spacing + config.horizontal_padding,
        nodes,
        edges,
    }
}
