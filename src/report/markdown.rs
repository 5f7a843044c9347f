//! Markdown rendering
//!
//! Mappings become headings one level deeper per nesting step. A mapping's
//! scalar entries are written as `**Key:** value` lines directly under its
//! heading, before any nested section, so each line belongs to the heading
//! above it. Sequences become a heading with one bullet per scalar item and
//! an anonymous heading per nested item.
//!
//! Values are written verbatim: Markdown-special characters are NOT escaped.

use serde_json::{Map, Value};

/// Title line of every Markdown report.
pub const REPORT_TITLE: &str = "Content Creator Analysis Report";

/// Depth of top-level sections; the title sits at depth 1.
const SECTION_DEPTH: usize = 2;

/// Render a nested analysis structure as a Markdown document.
pub fn render_markdown(data: &Value) -> String {
    let mut lines = vec![format!("# {}", REPORT_TITLE)];

    match data {
        Value::Object(map) => render_entries(map, SECTION_DEPTH, &mut lines),
        other => render_section("", other, SECTION_DEPTH, &mut lines),
    }

    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}

/// `basic_stats` -> `Basic Stats`
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn render_entries(map: &Map<String, Value>, depth: usize, lines: &mut Vec<String>) {
    for (key, value) in map.iter().filter(|(_, v)| is_scalar(v)) {
        blank(lines);
        lines.push(format!("**{}:** {}", humanize_key(key), scalar_text(value)));
    }
    for (key, value) in map.iter().filter(|(_, v)| !is_scalar(v)) {
        render_section(key, value, depth, lines);
    }
}

fn render_section(key: &str, value: &Value, depth: usize, lines: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            heading(key, depth, lines);
            render_entries(map, depth + 1, lines);
        }
        Value::Array(items) => {
            heading(key, depth, lines);
            let mut bullets = items.iter().filter(|v| is_scalar(v)).peekable();
            if bullets.peek().is_some() {
                blank(lines);
            }
            for item in bullets {
                lines.push(format!("- {}", scalar_text(item)));
            }
            for item in items.iter().filter(|v| !is_scalar(v)) {
                render_section("", item, depth + 1, lines);
            }
        }
        scalar => {
            blank(lines);
            lines.push(scalar_text(scalar));
        }
    }
}

fn heading(key: &str, depth: usize, lines: &mut Vec<String>) {
    blank(lines);
    let marker = "#".repeat(depth);
    if key.is_empty() {
        lines.push(marker);
    } else {
        lines.push(format!("{} {}", marker, humanize_key(key)));
    }
}

fn blank(lines: &mut Vec<String>) {
    if lines.last().is_some_and(|l| !l.is_empty()) {
        lines.push(String::new());
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "n/a".to_string(),
        other => other.to_string(),
    }
}
