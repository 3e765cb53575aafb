//! Tier rendering.
//!
//! `None` and `Medium` share one recursive pretty printer with tab
//! indentation; `Medium` additionally collapses inline candidates onto a
//! single line. `Full` is the compact serde_json form. Scalar tokens go
//! through serde_json rendering in every tier, so the three agree on number
//! and string text.

use impactfx_types::CompressionTier;
use serde_json::Value;

/// Render a canonical document at the requested tier.
pub fn render(doc: &Value, tier: CompressionTier) -> String {
    match tier {
        CompressionTier::Full => doc.to_string(),
        CompressionTier::None => pretty(doc, false),
        CompressionTier::Medium => pretty(doc, true),
    }
}

fn pretty(doc: &Value, inline: bool) -> String {
    let mut out = String::new();
    write_value(&mut out, doc, 0, inline);
    out
}

/// A bare scalar: number, string, or boolean.
fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Number(_) | Value::String(_) | Value::Bool(_))
}

fn write_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

fn write_value(out: &mut String, value: &Value, depth: usize, inline: bool) {
    match value {
        Value::Array(items) if items.is_empty() => out.push_str("[]"),
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Array(items) => {
            // Inline candidate: the first element is a bare scalar. The test
            // is purely structural and never recurses; a composite-first
            // list stays in block form even if later elements are scalars.
            if inline && items.first().is_some_and(is_scalar) {
                write_inline_array(out, items);
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                write_indent(out, depth + 1);
                write_value(out, item, depth + 1, inline);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            write_indent(out, depth);
            out.push(']');
        }
        Value::Object(map) => {
            if inline && map.len() == 1 {
                if let Some((key, val)) = map.iter().next() {
                    if is_scalar(val) {
                        out.push('{');
                        write_key(out, key);
                        out.push_str(&val.to_string());
                        out.push('}');
                        return;
                    }
                }
            }
            out.push_str("{\n");
            for (i, (key, val)) in map.iter().enumerate() {
                write_indent(out, depth + 1);
                write_key(out, key);
                write_value(out, val, depth + 1, inline);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            write_indent(out, depth);
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_key(out: &mut String, key: &str) {
    out.push_str(&Value::String(key.to_string()).to_string());
    out.push_str(": ");
}

fn write_inline_array(out: &mut String, items: &[Value]) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // Scalars render bare/quoted; a composite element in an otherwise
        // inline-qualified list renders in compact form.
        out.push_str(&item.to_string());
    }
    out.push(']');
}
