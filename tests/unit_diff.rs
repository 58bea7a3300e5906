use gdc_parity::diff::diff;
use gdc_parity::record::normalize;
use serde_json::json;

mod support;

#[test]
fn identical_records_produce_an_empty_diff() {
    let left = normalize(support::wcmp2_record("abc", "observations"));
    let right = left.clone();
    assert!(diff(&left, &right).is_empty());
}

#[test]
fn changed_property_is_identified_by_path() {
    let left = normalize(support::wcmp2_record("abc", "observations"));
    let mut right = left.clone();
    right["properties"]["title"] = json!("Daily surface observations");

    let result = diff(&left, &right);
    assert!(!result.is_empty());
    let change = result
        .changed
        .get("properties.title")
        .expect("changed title");
    assert_eq!(change.from, json!("Hourly surface observations"));
    assert_eq!(change.to, json!("Daily surface observations"));
}

#[test]
fn added_and_removed_keys_are_reported_separately() {
    let left = json!({"properties": {"only_left": 1, "shared": true}});
    let right = json!({"properties": {"only_right": 2, "shared": true}});

    let result = diff(&left, &right);
    assert_eq!(result.removed.get("properties.only_left"), Some(&json!(1)));
    assert_eq!(result.added.get("properties.only_right"), Some(&json!(2)));
    assert!(result.changed.is_empty());
}

#[test]
fn arrays_compare_wholesale() {
    let left = json!({"links": [{"rel": "license", "href": "a"}]});
    let right = json!({"links": [{"rel": "license", "href": "b"}]});

    let result = diff(&left, &right);
    assert!(result.changed.contains_key("links"));
    assert!(result.added.is_empty());
    assert!(result.removed.is_empty());
}

#[test]
fn serialization_omits_empty_sections() {
    let left = json!({"a": 1});
    let right = json!({"a": 2});
    let rendered = serde_json::to_string(&diff(&left, &right)).expect("serialize diff");
    assert!(rendered.contains("\"changed\""));
    assert!(!rendered.contains("\"added\""));
    assert!(!rendered.contains("\"removed\""));
}
