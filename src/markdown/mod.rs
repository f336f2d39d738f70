//! Markdown preview module
//!
//! Renders the document to HTML, attaches outline anchors to headings and
//! tracks diagram fences handed to the external diagram renderer.

mod preview;
mod renderer;
mod theme;

pub use preview::{DiagramSlot, DiagramState, RenderedView};
pub use renderer::{
    diagram_placeholder, escape_text, preview_document, render_body, split_at_placeholder,
    CmarkRenderer, MarkupRenderer, RenderedBody, DIAGRAM_LANGUAGE,
};
pub use theme::PreviewTheme;
