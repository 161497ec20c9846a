pub mod preview;

pub use preview::{label_color, render_preview_png, render_text, GRID_LINE_COLOR};
