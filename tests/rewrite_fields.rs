#![allow(clippy::unwrap_used, clippy::expect_used)]

use insta::assert_snapshot;
use serde_json::json;
use timefields::document::Document;
use timefields::formatter::{DEFAULT_PATTERN, Formatter, INVALID_DATE, format_timestamp_fields};
use timefields::types::{ClassName, Zone};

fn utc_formatter() -> Formatter {
    Formatter::new(Zone::Utc, DEFAULT_PATTERN).expect("default pattern is valid")
}

fn document(value: serde_json::Value) -> Document {
    serde_json::from_value(value).expect("valid document")
}

#[test]
fn valid_fields_render_the_fixed_shape() {
    let mut doc = document(json!([
        {"tag": "span", "class": "ts", "text": "0"},
        {"tag": "span", "class": "ts", "text": "1700000000"}
    ]));

    utc_formatter().apply(&mut doc, &ClassName::from("ts"));

    assert_snapshot!(doc.elements()[0].text(), @"00:00 Thu, 01.01.1970");
    assert_snapshot!(doc.elements()[1].text(), @"22:13 Tue, 14.11.2023");
}

#[test]
fn non_numeric_text_becomes_the_placeholder() {
    let mut doc = document(json!([{"class": "ts", "text": "abc"}]));

    let stats = utc_formatter().apply(&mut doc, &ClassName::from("ts"));

    assert_eq!(stats.rewritten, 1);
    assert_eq!(stats.invalid, 1);
    assert_eq!(doc.elements()[0].text(), INVALID_DATE);
}

#[test]
fn second_invocation_writes_the_placeholder() {
    let mut doc = document(json!([{"class": "ts", "text": "0"}]));
    let formatter = utc_formatter();
    let class = ClassName::from("ts");

    formatter.apply(&mut doc, &class);
    assert_eq!(doc.elements()[0].text(), "00:00 Thu, 01.01.1970");

    let stats = formatter.apply(&mut doc, &class);
    assert_eq!(stats.invalid, 1);
    assert_eq!(doc.elements()[0].text(), INVALID_DATE);
}

#[test]
fn elements_without_the_class_are_untouched() {
    let mut doc = document(json!([
        {"id": "h1", "class": "header", "text": "Outage report"},
        {"class": "ts", "text": "86400"},
        {"class": "footer", "text": "1700000000"}
    ]));

    utc_formatter().apply(&mut doc, &ClassName::from("ts"));

    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!([
            {"id": "h1", "class": "header", "text": "Outage report"},
            {"class": "ts", "text": "00:00 Fri, 02.01.1970"},
            {"class": "footer", "text": "1700000000"}
        ])
    );
}

#[test]
fn missing_class_is_a_silent_no_op() {
    let original = document(json!([{"class": "other", "text": "123"}]));
    let mut doc = original.clone();

    let stats = utc_formatter().apply(&mut doc, &ClassName::from("ts"));

    assert_eq!(stats.rewritten, 0);
    assert_eq!(doc, original);
}

#[test]
fn entry_point_uses_the_original_defaults() {
    // Fuseau local: seul le remplacement est déterministe ici.
    let mut doc = document(json!([
        {"class": "ts", "text": "not a stamp"},
        {"class": "other", "text": "kept"}
    ]));

    format_timestamp_fields(&mut doc, "ts");

    assert_eq!(doc.elements()[0].text(), INVALID_DATE);
    assert_eq!(doc.elements()[1].text(), "kept");
}

#[test]
fn fixed_offset_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("outage.json");
    std::fs::write(
        &path,
        r#"[{"tag":"td","class":"ts created","text":"0"}]"#,
    )
    .unwrap();

    let mut doc = timefields::document::load(Some(&path)).unwrap();
    let zone = Zone::Fixed("+01:00".parse().unwrap());
    Formatter::new(zone, DEFAULT_PATTERN)
        .unwrap()
        .apply(&mut doc, &ClassName::from("ts"));
    timefields::document::save(&doc, Some(&path), false).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_snapshot!(
        written.trim_end(),
        @r#"[{"tag":"td","class":"ts created","text":"01:00 Thu, 01.01.1970"}]"#
    );
}
