//! Markup pass for rendered documents.
//!
//! Escapes entity characters first, then classifies each physical line into
//! indentation, an optional key token, an optional value token, and trailing
//! structural characters, wrapping key and value in class-tagged spans.
//! Lines that do not fit the single-line shape (medium-tier inline arrays,
//! the compact full tier) pass through unchanged. How the fragments reach a
//! screen is the host's concern.

use std::sync::LazyLock;

use regex::Regex;

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\s*)("[\w-]+": ?)?("[^"]*"|[\w.+-]*)?([\[{}\]]*,?)?$"#)
        .expect("line pattern is valid")
});

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-.,e]+$").expect("number pattern is valid"));

/// Escape `&`, escaped quotes (`\"`), `<` and `>` to their entity forms.
/// Structural quotes stay as-is; only quote escapes inside string tokens are
/// rewritten, which keeps the line pattern's `"[^"]*"` token intact.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                out.push_str("&quot;");
            }
            _ => out.push(c),
        }
    }
    out
}

fn markup_line(line: &str) -> String {
    let Some(caps) = LINE.captures(line) else {
        return line.to_string();
    };
    let indent = caps.get(1).map_or("", |m| m.as_str());
    let key = caps.get(2).map_or("", |m| m.as_str());
    let value = caps.get(3).map_or("", |m| m.as_str());
    let end = caps.get(4).map_or("", |m| m.as_str());

    let mut out = String::from("<label class=\"line\">");
    out.push_str(indent);
    if !key.is_empty() {
        out.push_str("<span class=json_key>");
        out.push_str(&key.replace([':', ' '], ""));
        out.push_str("</span>: ");
    }
    if !value.is_empty() {
        let class = if value.eq_ignore_ascii_case("true")
            || value.eq_ignore_ascii_case("false")
            || value.eq_ignore_ascii_case("null")
        {
            "<span class=json_expression>"
        } else if NUMBER.is_match(value) {
            "<span class=json_number>"
        } else {
            "<span>"
        };
        out.push_str(class);
        out.push_str(value);
        out.push_str("</span>");
    }
    out.push_str(end);
    out.push_str("</label>");
    out
}

/// Colorize rendered text into per-line marked-up fragments.
pub fn colorize(text: &str) -> String {
    let escaped = escape(text);
    escaped
        .split('\n')
        .map(markup_line)
        .collect::<Vec<_>>()
        .join("\n")
}
