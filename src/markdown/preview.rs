//! Rendered preview state

use super::renderer::{escape_text, split_at_placeholder, RenderedBody};
use crate::outline::Outline;

/// Title shown above the outline block
const OUTLINE_TITLE: &str = "Contents";

/// Render state of one diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramState {
    /// Waiting for the diagram renderer
    Pending,
    /// Rendered markup (e.g. SVG)
    Rendered(String),
    /// Renderer error message, shown in place of the diagram
    Failed(String),
}

/// A diagram fence in the rendered view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSlot {
    pub source: String,
    pub state: DiagramState,
}

/// Preview of one buffer revision
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    /// Buffer revision this view was rendered from
    pub revision: u64,
    pub outline: Outline,
    /// Body HTML with diagram placeholders
    pub body_html: String,
    pub diagrams: Vec<DiagramSlot>,
}

impl RenderedView {
    /// Assemble a view, reusing finished diagrams from `previous` whose
    /// source did not change.
    pub fn new(
        revision: u64,
        outline: Outline,
        body: RenderedBody,
        previous: Option<&RenderedView>,
    ) -> Self {
        let diagrams = body
            .diagrams
            .into_iter()
            .map(|source| {
                let state = previous
                    .and_then(|prev| {
                        prev.diagrams.iter().find(|slot| {
                            slot.source == source && slot.state != DiagramState::Pending
                        })
                    })
                    .map(|slot| slot.state.clone())
                    .unwrap_or(DiagramState::Pending);
                DiagramSlot { source, state }
            })
            .collect();

        Self {
            revision,
            outline,
            body_html: body.html,
            diagrams,
        }
    }

    /// Diagrams still waiting for the renderer, as `(slot, source)`
    pub fn pending_diagrams(&self) -> impl Iterator<Item = (usize, &str)> {
        self.diagrams
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.state == DiagramState::Pending)
            .map(|(index, slot)| (index, slot.source.as_str()))
    }

    /// Store a diagram result. Returns false if the slot does not exist.
    pub fn resolve_diagram(&mut self, slot: usize, result: Result<String, String>) -> bool {
        let Some(diagram) = self.diagrams.get_mut(slot) else {
            return false;
        };
        diagram.state = match result {
            Ok(markup) => DiagramState::Rendered(markup),
            Err(message) => {
                tracing::warn!("Diagram {} failed to render: {}", slot, message);
                DiagramState::Failed(message)
            }
        };
        true
    }

    /// Outline block, when the document asks for one
    pub fn outline_html(&self) -> Option<String> {
        if !self.outline.is_visible() {
            return None;
        }

        let mut out = String::from("<nav class=\"toc\">\n");
        out.push_str(&format!("<div class=\"toc-title\">{}</div>\n", OUTLINE_TITLE));
        for heading in &self.outline.headings {
            out.push_str(&format!(
                "<a href=\"#{}\" class=\"toc-link toc-level-{}\" style=\"padding-left: {}em\">{}</a>\n",
                heading.id,
                heading.level,
                heading.level.saturating_sub(1),
                escape_text(&heading.text)
            ));
        }
        out.push_str("</nav>\n");
        Some(out)
    }

    /// HTML fragment: outline block followed by the body with diagrams filled in
    pub fn to_html(&self) -> String {
        // Single pass, so diagram output is never searched for placeholders
        let mut body = String::with_capacity(self.body_html.len());
        let mut rest = self.body_html.as_str();
        while let Some((before, index, after)) = split_at_placeholder(rest) {
            body.push_str(before);
            if let Some(slot) = self.diagrams.get(index) {
                body.push_str(&diagram_html(&slot.state));
            }
            rest = after;
        }
        body.push_str(rest);

        match self.outline_html() {
            Some(outline) => outline + &body,
            None => body,
        }
    }
}

fn diagram_html(state: &DiagramState) -> String {
    match state {
        DiagramState::Pending => "<div class=\"diagram diagram-pending\"></div>".to_string(),
        DiagramState::Rendered(markup) => format!("<div class=\"diagram\">{}</div>", markup),
        DiagramState::Failed(message) => format!(
            "<div class=\"diagram-error\"><pre>Diagram render error: {}</pre></div>",
            escape_text(message)
        ),
    }
}
