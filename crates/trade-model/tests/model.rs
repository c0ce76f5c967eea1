//! Tests for trade-model types.

use trade_model::{Code, CodeMapping, ExtractedRow, ItemKind, MatchCandidate};

#[test]
fn item_kind_labels() {
    assert_eq!(ItemKind::Country.to_string(), "country");
    assert_eq!(ItemKind::Product.plural(), "products");
    assert_eq!(ItemKind::Country.title(), "Country");
}

#[test]
fn item_kind_serializes_lowercase() {
    let json = serde_json::to_string(&ItemKind::Product).expect("serialize kind");
    assert_eq!(json, "\"product\"");
}

#[test]
fn candidate_serializes_code_transparently() {
    let candidate = MatchCandidate::new(Code::new(36), "Australia", 0.8);
    let json = serde_json::to_value(&candidate).expect("serialize candidate");
    assert_eq!(json["code"], 36);
    assert_eq!(json["name"], "Australia");
}

#[test]
fn extracted_row_uses_export_column_names() {
    let row = ExtractedRow {
        date: "2024-12-01".to_string(),
        flow_type: "Import".to_string(),
        reporter_code: "792".to_string(),
        partner: "643".to_string(),
        cmd_code: "8401".to_string(),
        qty: Some(2.0),
        primary_value: Some(1500.5),
        reporter_name: "Turkey".to_string(),
        product_description: "Nuclear reactors".to_string(),
        partner_name: "Russian Federation".to_string(),
    };
    let json = serde_json::to_value(&row).expect("serialize row");
    for column in trade_model::EXPORT_COLUMNS {
        assert!(json.get(column).is_some(), "missing {column}");
    }
}

#[test]
fn mapping_lookup_by_code() {
    let mapping = CodeMapping::from_entries([(Code::new(8401), "Nuclear reactors")])
        .expect("valid mapping");
    assert_eq!(mapping.get(Code::new(8401)), Some("Nuclear reactors"));
    assert_eq!(mapping.get(Code::new(1)), None);
}
