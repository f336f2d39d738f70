//! Preview theme - colors for Markdown preview rendering

/// Theme colors for markdown preview (CSS-formatted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTheme {
    pub background: String,
    pub text: String,
    pub heading: String,
    pub link: String,
    pub code_background: String,
    pub border: String,
    pub accent: String,
    pub muted: String,
    /// Diagram error text and border
    pub error: String,
}

impl PreviewTheme {
    pub fn light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#24292f".to_string(),
            heading: "#1f2328".to_string(),
            link: "#0969da".to_string(),
            code_background: "#f6f8fa".to_string(),
            border: "#d0d7de".to_string(),
            accent: "#8250df".to_string(),
            muted: "#57606a".to_string(),
            error: "#cf222e".to_string(),
        }
    }
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            text: "#d4d4d4".to_string(),
            heading: "#569cd6".to_string(),
            link: "#ce9178".to_string(),
            code_background: "#252526".to_string(),
            border: "#3c3c3c".to_string(),
            accent: "#dcdcaa".to_string(),
            muted: "#858585".to_string(),
            error: "#f14c4c".to_string(),
        }
    }
}
