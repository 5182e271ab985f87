pub mod types;
pub mod segment;
pub mod stats;
pub mod render;

pub use types::*;
pub use segment::{compute_line_diff, compute_similarity, line_segments, word_segments};
pub use stats::compute_change_stats;
pub use render::{escape_attribute, escape_html, render_side_by_side, render_unified_diff};
