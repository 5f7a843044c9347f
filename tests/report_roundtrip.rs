//! Structural round-trip of Markdown reports
//!
//! Re-parses the heading structure of a rendered report and checks that it
//! recovers the key set and nesting depth of the rendered mapping.

use creator_analyst::report::REPORT_TITLE;
use creator_analyst::{render, render_markdown, Analyzer, ReportFormat};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// (depth, key) pairs in document order; anonymous sequence items have key "".
type Structure = Vec<(usize, String)>;

// =============================================================================
// Test Helpers
// =============================================================================

fn normalize(title: &str) -> String {
    title.trim().to_lowercase().replace(' ', "_")
}

/// Recover the structure from a rendered document.
///
/// `#` is the title; `##` is depth 1. `**Key:** value` lines sit one level
/// below the nearest heading above them.
fn parse_structure(doc: &str) -> Structure {
    let mut out = Vec::new();
    let mut current = 0;

    for line in doc.lines() {
        if line.starts_with('#') {
            let hashes = line.chars().take_while(|c| *c == '#').count();
            if hashes == 1 {
                current = 0;
                continue;
            }
            current = hashes - 1;
            out.push((current, normalize(&line[hashes..])));
        } else if let Some(rest) = line.strip_prefix("**") {
            if let Some((key, _)) = rest.split_once(":**") {
                out.push((current + 1, normalize(key)));
            }
        }
    }
    out
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn expected_entries(map: &Map<String, Value>, depth: usize, out: &mut Structure) {
    for (key, _) in map.iter().filter(|(_, v)| is_scalar(v)) {
        out.push((depth, key.clone()));
    }
    for (key, value) in map.iter().filter(|(_, v)| !is_scalar(v)) {
        expected_section(key, value, depth, out);
    }
}

fn expected_section(key: &str, value: &Value, depth: usize, out: &mut Structure) {
    out.push((depth, key.to_string()));
    match value {
        Value::Object(map) => expected_entries(map, depth + 1, out),
        Value::Array(items) => {
            for item in items.iter().filter(|v| !is_scalar(v)) {
                expected_section("", item, depth + 1, out);
            }
        }
        _ => {}
    }
}

fn expected_structure(value: &Value) -> Structure {
    let mut out = Vec::new();
    expected_entries(value.as_object().unwrap(), 1, &mut out);
    out
}

// =============================================================================
// Analysis Reports
// =============================================================================

#[test]
fn analysis_report_round_trips() {
    let data = json!({
        "values": [{"name": "Honesty"}, {"name": "Quality"}],
        "life_events": [{"year": 2019}, {"year": 2016}],
        "businesses": [{"name": "Merch Store", "annual_revenue": 1500}]
    });
    let value = Analyzer::for_year(2024).analyze(&data).unwrap().to_value().unwrap();

    let doc = render_markdown(&value);
    let structure = parse_structure(&doc);

    assert_eq!(structure, expected_structure(&value));
    assert_eq!(
        structure
            .iter()
            .filter(|(depth, _)| *depth == 1)
            .map(|(_, key)| key.as_str())
            .collect::<Vec<_>>(),
        ["basic_stats", "business_analysis", "values_assessment", "timeline_analysis"]
    );
    assert!(structure.contains(&(2, "milestone_frequency".to_string())));
    assert!(structure.contains(&(2, "core_values".to_string())));
}

#[test]
fn report_starts_with_title() {
    let doc = render(&json!({}), ReportFormat::Markdown).unwrap();
    assert_eq!(doc, format!("# {}\n", REPORT_TITLE));
}

#[test]
fn json_format_reparses_to_same_value() {
    let value = Analyzer::for_year(2024).analyze(&json!({})).unwrap().to_value().unwrap();
    let doc = render(&value, ReportFormat::Json).unwrap();
    let parsed: Value = serde_json::from_str(&doc).unwrap();
    assert_eq!(parsed, value);
}

#[test]
fn trailing_scalar_stays_with_its_mapping() {
    // A scalar listed after a nested section must not attach to that section
    let value = json!({
        "outer": {
            "inner": {"deep": 1},
            "after": 2
        }
    });
    let structure = parse_structure(&render_markdown(&value));
    assert_eq!(
        structure,
        vec![
            (1, "outer".to_string()),
            (2, "after".to_string()),
            (2, "inner".to_string()),
            (3, "deep".to_string()),
        ]
    );
}

// =============================================================================
// Arbitrary Structures
// =============================================================================

fn key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(_[a-z]{1,6}){0,2}"
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z ]{0,10}".prop_map(Value::String),
    ]
}

fn nested() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(key(), inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn report_root() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key(), nested(), 0..5).prop_map(|m| Value::Object(m.into_iter().collect()))
}

proptest! {
    #[test]
    fn heading_structure_recovers_keys_and_depth(value in report_root()) {
        let doc = render_markdown(&value);
        prop_assert_eq!(parse_structure(&doc), expected_structure(&value));
    }

    #[test]
    fn document_has_single_title(value in report_root()) {
        let doc = render_markdown(&value);
        let titles = doc.lines().filter(|l| l.starts_with("# ")).count();
        prop_assert_eq!(titles, 1);
        prop_assert!(doc.ends_with('\n'));
    }
}
