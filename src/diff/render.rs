use super::segment::{line_segments, segment_lines};
use super::types::ChangeSegment;

/// Escape text for inline code display: exactly `&`, `<`, `>`.
///
/// Quotes stay unescaped in element content for readability; attribute values
/// must go through [`escape_attribute`] instead.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Stricter escaper for attribute-embedded text: also escapes both quotes.
pub fn escape_attribute(text: &str) -> String {
    escape_html(text)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render a unified diff (`---`/`+++` headers, `-`/`+`/` ` line prefixes).
pub fn render_unified_diff(old_text: &str, new_text: &str, filename: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("--- a/{}\n", filename));
    out.push_str(&format!("+++ b/{}\n", filename));

    for segment in line_segments(old_text, new_text) {
        let prefix = if segment.is_added {
            '+'
        } else if segment.is_removed {
            '-'
        } else {
            ' '
        };
        for line in segment_lines(&segment.text) {
            out.push(prefix);
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

fn push_pane_line(
    out: &mut String,
    number: usize,
    line: &str,
    class: &str,
    block_id: Option<&str>,
) {
    match block_id {
        Some(id) => out.push_str(&format!(
            "<tr id=\"{}\"><td class=\"line-num\">{}</td><td class=\"line {}\">{}</td></tr>",
            escape_attribute(id),
            number,
            class,
            escape_html(line)
        )),
        None => out.push_str(&format!(
            "<tr><td class=\"line-num\">{}</td><td class=\"line {}\">{}</td></tr>",
            number,
            class,
            escape_html(line)
        )),
    }
}

fn is_unchanged(segment: &ChangeSegment) -> bool {
    !segment.is_added && !segment.is_removed
}

/// Render a side-by-side diff view as an HTML fragment.
///
/// When nothing changed, a single "no changes" pane is emitted. Otherwise two
/// panes with independent per-line numbering: the first line of each change
/// block carries the block's DOM id (on the side the block belongs to) for
/// scroll-to-change navigation. The panes emit lines independently, so added
/// and removed blocks shift the two sides out of visual alignment; unchanged
/// blocks realign. That misalignment is accepted, not something to patch over
/// here.
pub fn render_side_by_side(old_text: &str, new_text: &str, title: &str) -> String {
    let segments = line_segments(old_text, new_text);
    let has_changes = segments.iter().any(|s| !is_unchanged(s));

    let header = format!(
        "<div class=\"diff-header\" title=\"{}\">{}</div>",
        escape_attribute(title),
        escape_html(title)
    );

    if !has_changes {
        return format!(
            "<div class=\"diff-container\">{}<div class=\"diff-no-changes\">No changes</div></div>",
            header
        );
    }

    let mut old_pane = String::new();
    let mut new_pane = String::new();
    let mut old_line = 1usize;
    let mut new_line = 1usize;
    let mut block_counter = 0usize;

    for segment in &segments {
        let lines = segment_lines(&segment.text);
        if lines.is_empty() {
            continue;
        }

        if is_unchanged(segment) {
            for line in &lines {
                push_pane_line(&mut old_pane, old_line, line, "line-context", None);
                push_pane_line(&mut new_pane, new_line, line, "line-context", None);
                old_line += 1;
                new_line += 1;
            }
            continue;
        }

        block_counter += 1;
        let block_id = format!("change-{}", block_counter);

        if segment.is_removed {
            for (i, line) in lines.iter().enumerate() {
                let id = if i == 0 { Some(block_id.as_str()) } else { None };
                push_pane_line(&mut old_pane, old_line, line, "line-removed", id);
                old_line += 1;
            }
        } else {
            for (i, line) in lines.iter().enumerate() {
                let id = if i == 0 { Some(block_id.as_str()) } else { None };
                push_pane_line(&mut new_pane, new_line, line, "line-added", id);
                new_line += 1;
            }
        }
    }

    format!(
        "<div class=\"diff-container\">{}<div class=\"diff-panes\">\
         <div class=\"diff-pane diff-pane-old\"><table>{}</table></div>\
         <div class=\"diff-pane diff-pane-new\"><table>{}</table></div>\
         </div></div>",
        header, old_pane, new_pane
    )
}
