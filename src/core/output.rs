//! Terminal rendering of serialized navigation trees.
//!
//! Works on the JSON form so the CLI shows exactly what the presentation
//! layer would receive.

use colored::Colorize;
use serde_json::Value as JsonValue;

const MAX_LABEL_CHARS: usize = 48;

/// Collapse whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

fn badge_suffix(node: &JsonValue) -> String {
    match node.get("badge") {
        Some(JsonValue::Null) | None => String::new(),
        Some(JsonValue::String(s)) => format!(" [{}]", s),
        Some(other) => format!(" [{}]", other),
    }
}

fn render_node(node: &JsonValue, depth: usize, out: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let label = compact_line(
        node.get("label").and_then(|v| v.as_str()).unwrap_or_default(),
        MAX_LABEL_CHARS,
    );
    let badge = badge_suffix(node);

    match node.get("items").and_then(|v| v.as_array()) {
        Some(children) => {
            let marker = if node["collapsed"].as_bool().unwrap_or(false) {
                "▸"
            } else {
                "▾"
            };
            let state_id = node.get("stateId").and_then(|v| v.as_str()).unwrap_or_default();
            out.push(format!(
                "{}{} {}{} {}",
                indent,
                marker.bright_cyan(),
                label.bold(),
                badge.bright_yellow(),
                format!("({})", state_id).dimmed()
            ));
            for child in children {
                render_node(child, depth + 1, out);
            }
        }
        None => {
            let url = node.get("url").and_then(|v| v.as_str()).unwrap_or("-");
            out.push(format!(
                "{}• {}{} {}",
                indent,
                label,
                badge.bright_yellow(),
                url.dimmed()
            ));
        }
    }
}

/// Render a serialized menu (array of nodes) as an indented tree.
pub fn render_tree(menu: &JsonValue) -> String {
    let mut out = Vec::new();
    if let Some(nodes) = menu.as_array() {
        for node in nodes {
            render_node(node, 0, &mut out);
        }
    }
    out.join("\n")
}
