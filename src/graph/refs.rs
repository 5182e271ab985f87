use super::types::{RefInfo, RefType};

/// Parse a git log `%d` decoration string into typed refs.
///
/// The `%d` format produces loosely structured strings like:
///   ` (HEAD -> main, tag: v1.0, origin/main)`
///   ` (origin/feature-branch)`
///   `` (empty for undecorated commits)
///
/// Recognized forms, per comma-separated part:
///   `HEAD -> <branch>`  -> a Head ref plus the checked-out Branch ref
///   `HEAD`              -> detached Head ref
///   `tag: <name>`       -> Tag ref
///   `<remote>/<name>`   -> RemoteBranch ref
///   anything else       -> local Branch ref
pub fn parse_ref_names(decoration: &str) -> Vec<RefInfo> {
    let trimmed = decoration.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // `%d` wraps the list in parentheses; tolerate both wrapped and bare input.
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);

    let mut refs = Vec::new();

    for part in inner.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some(branch) = part.strip_prefix("HEAD -> ") {
            refs.push(RefInfo {
                name: "HEAD".to_string(),
                ref_type: RefType::Head,
                is_head: true,
            });
            refs.push(RefInfo {
                name: branch.trim().to_string(),
                ref_type: RefType::Branch,
                is_head: true,
            });
            continue;
        }

        if part == "HEAD" {
            // Detached HEAD
            refs.push(RefInfo {
                name: "HEAD".to_string(),
                ref_type: RefType::Head,
                is_head: true,
            });
            continue;
        }

        if let Some(tag) = part.strip_prefix("tag: ") {
            refs.push(RefInfo {
                name: tag.trim().to_string(),
                ref_type: RefType::Tag,
                is_head: false,
            });
            continue;
        }

        // "origin/main" and friends; full ref paths are normalized first.
        let (name, ref_type) = if let Some(stripped) = part.strip_prefix("refs/remotes/") {
            (stripped, RefType::RemoteBranch)
        } else if let Some(stripped) = part.strip_prefix("refs/heads/") {
            (stripped, RefType::Branch)
        } else if part.contains('/') {
            (part, RefType::RemoteBranch)
        } else {
            (part, RefType::Branch)
        };

        refs.push(RefInfo {
            name: name.to_string(),
            ref_type,
            is_head: false,
        });
    }

    refs
}
