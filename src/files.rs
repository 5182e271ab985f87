use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One changed file in a commit, as reported by the git collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    /// Raw status code: "A" added, "D" deleted, anything else modified.
    pub status: String,
    pub path: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FileStatus {
    Added,
    Deleted,
    Modified,
}

impl FileStatus {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "A" => FileStatus::Added,
            "D" => FileStatus::Deleted,
            _ => FileStatus::Modified,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TreeNodeKind {
    Folder,
    File,
}

/// A node in the grouped changed-files tree shown in the commit detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTreeNode {
    pub name: String,
    /// Full path from the repository root to this node.
    pub path: String,
    pub kind: TreeNodeKind,
    /// Present on files only.
    pub status: Option<FileStatus>,
    pub children: Vec<FileTreeNode>,
}

fn insert_path(nodes: &mut Vec<FileTreeNode>, segments: &[&str], prefix: &str, status: FileStatus) {
    let (head, rest) = match segments.split_first() {
        Some(split) => split,
        None => return,
    };

    let path = if prefix.is_empty() {
        head.to_string()
    } else {
        format!("{}/{}", prefix, head)
    };

    if rest.is_empty() {
        nodes.push(FileTreeNode {
            name: head.to_string(),
            path,
            kind: TreeNodeKind::File,
            status: Some(status),
            children: Vec::new(),
        });
        return;
    }

    let index = match nodes
        .iter()
        .position(|n| n.kind == TreeNodeKind::Folder && n.name == *head)
    {
        Some(existing) => existing,
        None => {
            nodes.push(FileTreeNode {
                name: head.to_string(),
                path: path.clone(),
                kind: TreeNodeKind::Folder,
                status: None,
                children: Vec::new(),
            });
            nodes.len() - 1
        }
    };

    insert_path(&mut nodes[index].children, rest, &path, status);
}

/// Folders before files; within the same kind, case-insensitive lexicographic
/// with the original spelling as a deterministic tiebreaker.
fn compare_nodes(a: &FileTreeNode, b: &FileTreeNode) -> Ordering {
    match (a.kind, b.kind) {
        (TreeNodeKind::Folder, TreeNodeKind::File) => Ordering::Less,
        (TreeNodeKind::File, TreeNodeKind::Folder) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    }
}

fn sort_tree(nodes: &mut Vec<FileTreeNode>) {
    nodes.sort_by(compare_nodes);
    for node in nodes {
        sort_tree(&mut node.children);
    }
}

/// Group a flat list of changed files into a directory tree keyed by path
/// segments. Intermediate segments become folder nodes; the final segment
/// becomes a file node carrying its status.
pub fn group_changed_files(changes: &[FileChange]) -> Vec<FileTreeNode> {
    let mut roots: Vec<FileTreeNode> = Vec::new();

    for change in changes {
        let segments: Vec<&str> = change
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();
        if segments.is_empty() {
            continue;
        }
        insert_path(
            &mut roots,
            &segments,
            "",
            FileStatus::from_code(&change.status),
        );
    }

    sort_tree(&mut roots);
    roots
}
