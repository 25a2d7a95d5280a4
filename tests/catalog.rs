use like_counter::catalog::{like_catalog, CatalogError, LIKE_GROUP};

#[test]
fn group_is_named_after_the_widget() {
    let group = like_catalog();
    assert_eq!(group.title, LIKE_GROUP);
    assert_eq!(group.title, "Like");
    assert_eq!(group.names(), vec!["0", "1"]);
}

#[test]
fn entry_zero_renders_zero_and_noop_click_is_harmless() {
    let group = like_catalog();
    let entry = group.find("0").unwrap();
    assert_eq!(entry.count, 0);
    assert_eq!(entry.snapshot(8), "♡0");

    let mut button = entry.button();
    button.click();
    assert_eq!(button.count(), 0);
    assert_eq!(entry.snapshot(8), "♡0");
}

#[test]
fn entry_one_renders_one() {
    let group = like_catalog();
    let entry = group.find("1").unwrap();
    assert_eq!(entry.count, 1);
    assert_eq!(entry.snapshot(8), "♡1");
}

#[test]
fn snapshots_are_deterministic() {
    let group = like_catalog();
    for entry in &group.entries {
        assert_eq!(entry.snapshot(8), entry.snapshot(8));
    }
}

#[test]
fn unknown_entry() {
    let group = like_catalog();
    let err = group.find("2").unwrap_err();
    assert_eq!(
        err,
        CatalogError::UnknownEntry {
            group: "Like",
            name: "2".to_string()
        }
    );
    assert_eq!(err.to_string(), "Entry '2' not found in catalog group 'Like'");
}

#[test]
fn json_export_lists_entries() {
    let json = like_catalog().to_json(8).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["group"], "Like");
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "0");
    assert_eq!(entries[0]["count"], 0);
    assert_eq!(entries[0]["rendered"], "♡0");
    assert_eq!(entries[1]["rendered"], "♡1");
}
