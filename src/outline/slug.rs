//! Heading text to anchor id

/// CJK unified ideographs kept verbatim in slugs
const IDEOGRAPHS: std::ops::RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

/// Convert heading text into an anchor id.
///
/// Lowercases the text, drops everything that is not an ASCII word character,
/// whitespace, a CJK ideograph or `-`, then collapses each whitespace run into
/// a single `-`. Not unique: identical headings produce identical ids.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
            continue;
        }
        if !is_slug_char(ch) {
            continue;
        }
        if in_whitespace {
            out.push('-');
            in_whitespace = false;
        }
        out.push(ch);
    }

    if in_whitespace {
        out.push('-');
    }

    out
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || IDEOGRAPHS.contains(&ch)
}
