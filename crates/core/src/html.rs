//! Escaping for untrusted text embedded in rendered markup.

/// Escape text for safe insertion into HTML.
///
/// Replaces the five characters `& < > " '` with their named character
/// references. Everything else passes through unchanged. Pure function
/// with no failure modes; callers treat absent input as `""`.
#[must_use]
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
