//! Station search against the bundled dataset.

use irail_mcp::stations::{StationIndex, StationRecord, normalize};

fn names(records: &[&StationRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

#[test]
fn normalizes_belgian_names() {
    assert_eq!(normalize("Liège"), "liege");
    assert_eq!(normalize("Bruxelles-Schérbéek"), "bruxelles-scherbeek");
    assert_eq!(normalize("Brussels"), "brussels");
    assert_eq!(normalize(""), "");
}

#[test]
fn blank_queries_return_nothing() {
    let index = StationIndex::shared().unwrap();
    assert!(index.search("").is_empty());
    assert!(index.search("   ").is_empty());
}

#[test]
fn case_insensitive() {
    let index = StationIndex::shared().unwrap();
    let lower = index.search("aalst");
    let upper = index.search("Aalst");
    assert!(!lower.is_empty());
    assert_eq!(names(&lower), names(&upper));
    assert!(lower.iter().any(|r| r.name == "Aalst"));
}

#[test]
fn accent_insensitive() {
    let index = StationIndex::shared().unwrap();
    let results = index.search("Liege");
    assert!(results.iter().any(|r| r.name.contains("Liège")));
}

#[test]
fn alternative_names_match() {
    let index = StationIndex::shared().unwrap();
    let results = index.search("Alost");
    assert!(results.iter().any(|r| r.name == "Aalst"));

    let results = index.search("Brussels");
    assert!(!results.is_empty());
}

#[test]
fn no_false_positives() {
    let index = StationIndex::shared().unwrap();
    assert!(index.search("xyznonexistent12345").is_empty());
}

#[test]
fn broad_query_is_substring_search() {
    let index = StationIndex::shared().unwrap();
    assert!(index.search("a").len() > 50);
}

#[test]
fn results_carry_only_dataset_fields() {
    let index = StationIndex::shared().unwrap();
    let expected = [
        "alternative_de",
        "alternative_en",
        "alternative_fr",
        "alternative_nl",
        "country_code",
        "latitude",
        "longitude",
        "name",
        "uri",
    ];
    for record in index.search("gent") {
        let value = serde_json::to_value(record).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, expected);
    }
}

#[test]
fn bundled_records_all_have_names() {
    let index = StationIndex::shared().unwrap();
    assert!(!index.is_empty());
    assert!(index.records().all(|r| !r.name.is_empty()));
}
