pub mod types;
pub mod refs;
pub mod parser;
pub mod layout;

pub use types::*;
pub use refs::parse_ref_names;
pub use parser::parse_log;
pub use layout::compute_layout;
