//! Command types for the Elm-style architecture
//!
//! Commands are the session's outbound notifications and the side effects
//! the host should perform after an update.

use crate::markdown::RenderedView;
use crate::scroll_sync::Pane;

/// Commands returned from update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// A new preview (HTML and outline) is available
    PublishView(RenderedView),
    /// Scroll `pane` to `fraction` of its scrollable range
    ScrollTo { pane: Pane, fraction: f64 },
    /// Render a diagram; answer with `IoMsg::DiagramRendered`
    RenderDiagram {
        revision: u64,
        slot: usize,
        source: String,
    },
    /// Put text on the clipboard; answer with `IoMsg::ClipboardWritten`
    WriteClipboard(String),
    /// Read the clipboard; answer with `IoMsg::ClipboardRead`
    ReadClipboard,
    /// Let the user pick an image file; answer with `IoMsg::ImageFileRead`
    PickImageFile,
    /// Offer the document as a file download
    Download { file_name: String, contents: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands, collapsing trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|cmd| !matches!(cmd, Cmd::None))
            .collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Flatten nested batches into a list, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }
}
