//! Markdown to HTML renderer using pulldown-cmark

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::{PreviewTheme, RenderedView};
use crate::outline::{parse_heading_line, slug};

/// Fence language routed to the diagram renderer instead of a code block
pub const DIAGRAM_LANGUAGE: &str = "mermaid";

/// Markup transformer output before diagrams are resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBody {
    /// HTML fragment with a placeholder per diagram
    pub html: String,
    /// Diagram sources in document order, one per placeholder
    pub diagrams: Vec<String>,
}

/// Converts document text into HTML.
///
/// Implementations must give each heading the anchor id produced by
/// [`slug`] and emit [`diagram_placeholder`] for each diagram fence.
pub trait MarkupRenderer {
    fn render(&self, source: &str) -> RenderedBody;
}

/// Default renderer backed by pulldown-cmark
#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkRenderer;

impl MarkupRenderer for CmarkRenderer {
    fn render(&self, source: &str) -> RenderedBody {
        render_body(source)
    }
}

const PLACEHOLDER_PREFIX: &str = "<!--markpane-diagram:";
const PLACEHOLDER_SUFFIX: &str = "-->";

/// Placeholder substituted by the diagram's output when the view is assembled
pub fn diagram_placeholder(index: usize) -> String {
    format!("{}{}{}", PLACEHOLDER_PREFIX, index, PLACEHOLDER_SUFFIX)
}

/// Split body HTML at the next diagram placeholder.
///
/// Returns the HTML before it, the slot index and the remaining HTML.
pub fn split_at_placeholder(html: &str) -> Option<(&str, usize, &str)> {
    let start = html.find(PLACEHOLDER_PREFIX)?;
    let digits = &html[start + PLACEHOLDER_PREFIX.len()..];
    let end = digits.find(PLACEHOLDER_SUFFIX)?;
    let index = digits[..end].parse().ok()?;
    Some((&html[..start], index, &digits[end + PLACEHOLDER_SUFFIX.len()..]))
}

struct PendingHeading<'a> {
    /// Index of the heading's start event
    index: usize,
    /// Source text covered by the heading
    source: &'a str,
    /// Inline text collected until the heading ends
    text: String,
}

/// Render a Markdown fragment, attaching heading ids and extracting diagrams
pub fn render_body(markdown: &str) -> RenderedBody {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_MATH;

    let parser = Parser::new_ext(markdown, options);

    let mut events: Vec<Event> = Vec::new();
    let mut diagrams = Vec::new();
    let mut heading: Option<PendingHeading> = None;
    let mut diagram: Option<String> = None;

    for (event, range) in parser.into_offset_iter() {
        if let Some(source) = diagram.as_mut() {
            match event {
                Event::Text(text) => source.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    let mut source = std::mem::take(source);
                    diagram = None;
                    if source.ends_with('\n') {
                        source.pop();
                    }
                    events.push(Event::Html(diagram_placeholder(diagrams.len()).into()));
                    diagrams.push(source);
                }
                _ => {}
            }
            continue;
        }

        match &event {
            // Raw HTML that looks like a placeholder is shown as text
            Event::Html(raw) | Event::InlineHtml(raw) if raw.contains(PLACEHOLDER_PREFIX) => {
                events.push(Event::Text(raw.clone()));
                continue;
            }
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) if is_diagram_fence(info) => {
                diagram = Some(String::new());
                continue;
            }
            Event::Start(Tag::Heading { .. }) => {
                heading = Some(PendingHeading {
                    index: events.len(),
                    source: markdown.get(range.clone()).unwrap_or_default(),
                    text: String::new(),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(pending) = heading.as_mut() {
                    pending.text.push_str(text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(pending) = heading.take() {
                    assign_heading_id(&mut events, pending);
                }
            }
            _ => {}
        }

        events.push(event);
    }

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    RenderedBody {
        html: html_output,
        diagrams,
    }
}

fn is_diagram_fence(info: &str) -> bool {
    info.split_whitespace().next() == Some(DIAGRAM_LANGUAGE)
}

/// Give the heading the same id the outline computes for its source line.
/// Headings the line scan does not see (setext, indented) fall back to
/// their rendered text.
fn assign_heading_id(events: &mut [Event], pending: PendingHeading) {
    let text = pending
        .source
        .split('\n')
        .next()
        .and_then(parse_heading_line)
        .map(|(_, text)| text.to_string())
        .unwrap_or(pending.text);

    let anchor = slug(&text);
    if anchor.is_empty() {
        return;
    }

    if let Some(Event::Start(Tag::Heading { id, .. })) = events.get_mut(pending.index) {
        if id.is_none() {
            *id = Some(anchor.into());
        }
    }
}

/// Escape text for an HTML body context
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    html::push_html(&mut out, std::iter::once(Event::Text(text.into())));
    out
}

/// Wrap a rendered view into a complete HTML document with styling
pub fn preview_document(view: &RenderedView, theme: &PreviewTheme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github-dark.min.css">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css">
    <style>{}</style>
</head>
<body>
    <div id="content">{}</div>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.js"></script>
    <script>{}</script>
</body>
</html>"#,
        generate_css(theme),
        view.to_html(),
        PREVIEW_JS
    )
}

/// Generate CSS from theme colors
fn generate_css(theme: &PreviewTheme) -> String {
    format!(
        r#"
* {{
    box-sizing: border-box;
}}

body {{
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 14px;
    line-height: 1.6;
    color: {text};
    background: {background};
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
}}

h1, h2, h3, h4, h5, h6 {{
    color: {heading};
    margin-top: 24px;
    margin-bottom: 16px;
    font-weight: 600;
    line-height: 1.25;
}}

h1, h2 {{
    border-bottom: 1px solid {border};
    padding-bottom: 0.3em;
}}

code {{
    background: {code_background};
    padding: 0.2em 0.4em;
    border-radius: 3px;
    font-family: "SF Mono", "Fira Code", Consolas, "Liberation Mono", Menlo, Courier, monospace;
    font-size: 0.9em;
}}

pre {{
    background: {code_background};
    padding: 16px;
    border-radius: 6px;
    overflow-x: auto;
}}

pre code {{
    background: none;
    padding: 0;
}}

blockquote {{
    border-left: 4px solid {accent};
    margin: 0 0 16px 0;
    padding: 0 16px;
    color: {muted};
}}

a {{
    color: {link};
    text-decoration: none;
}}

table {{
    border-collapse: collapse;
    margin-bottom: 16px;
}}

th, td {{
    padding: 6px 13px;
    border: 1px solid {border};
}}

img {{
    max-width: 100%;
    height: auto;
}}

del {{
    color: {muted};
}}

.toc {{
    border: 1px solid {border};
    border-radius: 6px;
    padding: 12px 16px;
    margin-bottom: 24px;
}}

.toc-title {{
    font-weight: 600;
    margin-bottom: 8px;
}}

.toc-link {{
    display: block;
    color: {link};
}}

.diagram {{
    text-align: center;
    margin-bottom: 16px;
}}

.diagram-error pre {{
    color: {error};
    border: 1px solid {error};
}}
"#,
        text = theme.text,
        background = theme.background,
        heading = theme.heading,
        link = theme.link,
        code_background = theme.code_background,
        border = theme.border,
        accent = theme.accent,
        muted = theme.muted,
        error = theme.error,
    )
}

/// Syntax and formula highlighting for the standalone document
const PREVIEW_JS: &str = r#"
if (typeof hljs !== 'undefined') {
    hljs.highlightAll();
}
if (typeof katex !== 'undefined') {
    document.querySelectorAll('.math').forEach(function(el) {
        katex.render(el.textContent, el, {
            displayMode: el.classList.contains('math-display'),
            throwOnError: false
        });
    });
}
"#;
