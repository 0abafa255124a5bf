//! CSV export escaping tests

mod helpers;

use fairhub::utils::csv;

#[test]
fn test_fields_with_commas_round_trip() {
    helpers::init_test_env();

    let rows = vec![vec![
        "1".to_string(),
        "Acme, Inc.".to_string(),
        "jobs@acme.example".to_string(),
    ]];
    let doc = csv::write_document(&["id", "name", "email"], &rows);

    let parsed = csv::parse_document(&doc);
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1], rows[0]);
}

#[test]
fn test_fields_with_quotes_round_trip() {
    helpers::init_test_env();

    let rows = vec![vec![
        "2".to_string(),
        "The \"Best\" Fair".to_string(),
        "quote at end\"".to_string(),
    ]];
    let doc = csv::write_document(&["id", "title", "note"], &rows);

    assert!(doc.contains("\"The \"\"Best\"\" Fair\""));
    let parsed = csv::parse_document(&doc);
    assert_eq!(parsed[1], rows[0]);
}

#[test]
fn test_multiline_fields_round_trip() {
    helpers::init_test_env();

    let rows = vec![
        vec!["3".to_string(), "line one\nline two".to_string()],
        vec!["4".to_string(), "plain".to_string()],
    ];
    let doc = csv::write_document(&["id", "text"], &rows);

    let parsed = csv::parse_document(&doc);
    assert_eq!(parsed[1], rows[0]);
    assert_eq!(parsed[2], rows[1]);
}

#[test]
fn test_empty_document_has_only_header() {
    helpers::init_test_env();

    let doc = csv::write_document(&["id", "name"], &[]);
    assert_eq!(doc, "id,name\n");

    let parsed = csv::parse_document(&doc);
    assert_eq!(parsed.len(), 1);
}
