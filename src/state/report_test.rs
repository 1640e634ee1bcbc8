use serde_json::json;

use super::*;

// =============================================================
// Default field-sets
// =============================================================

#[test]
fn default_fieldsets_in_submission_order() {
    let names: Vec<&str> = default_fieldsets().iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec![
            "crew",
            "routes",
            "target_ships",
            "target_names",
            "booty",
            "last_hit"
        ]
    );
}

#[test]
fn target_names_is_local() {
    let fieldsets = default_fieldsets();
    let target_names = fieldsets.iter().find(|f| f.name == "target_names").unwrap();
    assert_eq!(target_names.kind, FieldSetKind::Local);
}

#[test]
fn booty_is_split_search_over_resources() {
    let fieldsets = default_fieldsets();
    let booty = fieldsets.iter().find(|f| f.name == "booty").unwrap();
    assert_eq!(
        booty.kind,
        FieldSetKind::SplitSearch {
            collection: "resources",
            display_key: "name",
        }
    );
}

#[test]
fn ship_display_key_matches_csv_casing() {
    let fieldsets = default_fieldsets();
    let ships = fieldsets.iter().find(|f| f.name == "target_ships").unwrap();
    assert_eq!(
        ships.kind,
        FieldSetKind::Search {
            collection: "ships",
            display_key: "Name",
        }
    );
}

// =============================================================
// Document assembly
// =============================================================

#[test]
fn two_fieldsets_one_empty_no_screenshot() {
    let mut buy = FieldSetState::new("buy", "Buy", FieldSetKind::Local, DEFAULT_TRIGGERS);
    let sell = FieldSetState::new("sell", "Sell", FieldSetKind::Local, DEFAULT_TRIGGERS);

    buy.push_document(&json!({"name": "Gold"}), "name");
    buy.push_document(&json!({"name": "Laranite"}), "name");

    let body = build_document(&[buy, sell], "").unwrap();
    assert_eq!(
        body,
        json!({
            "buy": [{"name": "Gold"}, {"name": "Laranite"}],
            "sell": [],
            "screenshot_url": "",
        })
    );
}

#[test]
fn screenshot_url_is_passed_through() {
    let body = build_document(&[], "https://img.example/abc.png").unwrap();
    assert_eq!(body, json!({"screenshot_url": "https://img.example/abc.png"}));
}

#[test]
fn entry_order_is_preserved() {
    let mut booty = FieldSetState::new(
        "booty",
        "Booty",
        FieldSetKind::SplitSearch {
            collection: "resources",
            display_key: "name",
        },
        DEFAULT_TRIGGERS,
    );
    booty.push_quantified(&json!({"name": "Quantanium"}), "name", 50);
    booty.push_quantified(&json!({"name": "Gold"}), "name", 12);

    let body = build_document(&[booty], "").unwrap();
    assert_eq!(
        body["booty"],
        json!([
            {"resource": {"name": "Quantanium"}, "amount": 50},
            {"resource": {"name": "Gold"}, "amount": 12},
        ])
    );
}

// =============================================================
// Reset after submission
// =============================================================

#[test]
fn clear_entries_empties_every_fieldset() {
    let mut report = ReportState::default();
    report.fieldsets[0].push_literal("someone");
    report.fieldsets[3].push_literal("TargetName");
    report.fieldsets[3].error = Some("boom".to_owned());

    report.clear_entries();

    assert!(report.fieldsets.iter().all(|f| f.entries.is_empty()));
    assert!(report.fieldsets.iter().all(|f| f.error.is_none()));
}

#[test]
fn default_report_is_idle() {
    let report = ReportState::default();
    assert!(!report.submitting);
    assert!(report.error.is_none());
    assert!(report.fieldsets.iter().all(|f| f.entries.is_empty()));
}
