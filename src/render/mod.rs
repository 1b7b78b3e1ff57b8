// Value renderer
//
// Turns an analysis result tree into a display tree, then into styled TUI
// lines or plain text.

mod display;
mod text;
mod value;

pub use display::{render, render_node, DisplayNode, Verdict};
pub use text::{badge_span, to_lines, to_plain};
pub use value::{display_string, format_fixed2, format_number, CheckPayload, Leaf, ResultNode};
