pub mod html;
pub mod lines;
pub mod text;

pub use html::render_html;
pub use lines::{stat_lines, StatLine, NOT_AVAILABLE};
pub use text::render_text;
