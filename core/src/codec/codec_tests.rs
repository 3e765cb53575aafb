//! Codec tests: exact tier output, size monotonicity, colorizer markup.

use impactfx_types::CompressionTier;
use serde_json::{Value, json};

use super::{colorize, render};

fn sample() -> Value {
    json!({
        "kind": "zombie",
        "position": [1.5, -2],
        "flags": { "solid": true },
        "list": [[1, 2]],
    })
}

#[test]
fn tier_none_is_tab_indented_pretty_text() {
    let expected = "{\n\t\"kind\": \"zombie\",\n\t\"position\": [\n\t\t1.5,\n\t\t-2\n\t],\n\t\"flags\": {\n\t\t\"solid\": true\n\t},\n\t\"list\": [\n\t\t[\n\t\t\t1,\n\t\t\t2\n\t\t]\n\t]\n}";
    assert_eq!(render(&sample(), CompressionTier::None), expected);
}

#[test]
fn tier_medium_inlines_scalar_lists_and_single_key_scalar_objects() {
    let expected = "{\n\t\"kind\": \"zombie\",\n\t\"position\": [1.5,-2],\n\t\"flags\": {\"solid\": true},\n\t\"list\": [\n\t\t[1,2]\n\t]\n}";
    assert_eq!(render(&sample(), CompressionTier::Medium), expected);
}

#[test]
fn tier_full_is_compact() {
    let text = render(&sample(), CompressionTier::Full);
    assert_eq!(
        text,
        "{\"kind\":\"zombie\",\"position\":[1.5,-2],\"flags\":{\"solid\":true},\"list\":[[1,2]]}"
    );
    assert!(!text.contains('\n'));
}

#[test]
fn tier_sizes_are_monotonic() {
    let none = render(&sample(), CompressionTier::None).len();
    let medium = render(&sample(), CompressionTier::Medium).len();
    let full = render(&sample(), CompressionTier::Full).len();
    assert!(full <= medium, "full {full} > medium {medium}");
    assert!(medium <= none, "medium {medium} > none {none}");
}

#[test]
fn inline_predicate_checks_only_the_first_element() {
    // Composite-first lists stay in block form even with scalar tails.
    let doc = json!({ "mixed": [[1, 2], 3] });
    let text = render(&doc, CompressionTier::Medium);
    assert_eq!(text, "{\n\t\"mixed\": [\n\t\t[1,2],\n\t\t3\n\t]\n}");
}

#[test]
fn inline_strings_stay_quoted_and_booleans_bare() {
    let doc = json!({ "sounds": ["a.ogg", "b.ogg"], "on": [true, false] });
    let text = render(&doc, CompressionTier::Medium);
    assert!(text.contains("[\"a.ogg\",\"b.ogg\"]"));
    assert!(text.contains("[true,false]"));
}

#[test]
fn empty_containers_render_compact_at_every_tier() {
    let doc = json!({ "sounds": [], "particles": [[]] });
    let none = render(&doc, CompressionTier::None);
    assert_eq!(none, "{\n\t\"sounds\": [],\n\t\"particles\": [\n\t\t[]\n\t]\n}");
    // Empty lists are not inline candidates; medium output is identical.
    assert_eq!(render(&doc, CompressionTier::Medium), none);
}

#[test]
fn single_key_object_with_composite_value_stays_block() {
    let doc = json!({ "variance": { "initialVelocity": [0, 1] } });
    let text = render(&doc, CompressionTier::Medium);
    assert_eq!(
        text,
        "{\n\t\"variance\": {\n\t\t\"initialVelocity\": [0,1]\n\t}\n}"
    );
}

#[test]
fn colorize_wraps_keys_and_values_per_line() {
    assert_eq!(
        colorize("\t\"kind\": \"zombie\","),
        "<label class=\"line\">\t<span class=json_key>\"kind\"</span>: <span>\"zombie\"</span>,</label>"
    );
    assert_eq!(
        colorize("\t\"size\": 2,"),
        "<label class=\"line\">\t<span class=json_key>\"size\"</span>: <span class=json_number>2</span>,</label>"
    );
    assert_eq!(
        colorize("\t\"flippable\": true"),
        "<label class=\"line\">\t<span class=json_key>\"flippable\"</span>: <span class=json_expression>true</span></label>"
    );
}

#[test]
fn colorize_wraps_structural_lines() {
    assert_eq!(colorize("{"), "<label class=\"line\">{</label>");
    assert_eq!(colorize("\t},"), "<label class=\"line\">\t},</label>");
    assert_eq!(
        colorize("\t\"effects\": {"),
        "<label class=\"line\">\t<span class=json_key>\"effects\"</span>: {</label>"
    );
}

#[test]
fn colorize_escapes_entities_before_markup() {
    // Escaped quotes inside a string token become &quot; so the value token
    // still reads as one quoted string.
    assert_eq!(
        colorize("\t\"kind\": \"say \\\"hi\\\"\","),
        "<label class=\"line\">\t<span class=json_key>\"kind\"</span>: <span>\"say &quot;hi&quot;\"</span>,</label>"
    );
    // A line that stops matching the shape after escaping passes through.
    assert_eq!(colorize("a<b>&c"), "a&lt;b&gt;&amp;c");
}

#[test]
fn colorize_leaves_inline_medium_lines_alone() {
    assert_eq!(colorize("\t\"position\": [1.5,-2],"), "\t\"position\": [1.5,-2],");
}
