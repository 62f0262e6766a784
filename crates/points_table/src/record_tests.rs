use super::*;
use crate::error::TableError;
use serde_json::json;

#[test]
fn test_outcome_from_str() {
    assert_eq!(MatchOutcome::from("win"), MatchOutcome::Win);
    assert_eq!(MatchOutcome::from("tie"), MatchOutcome::Tie);
    assert_eq!(MatchOutcome::from("no_result"), MatchOutcome::NoResult);
}

#[test]
fn test_unknown_outcome_is_no_result() {
    assert_eq!(MatchOutcome::from("washout"), MatchOutcome::NoResult);
    assert_eq!(MatchOutcome::from("WIN"), MatchOutcome::NoResult);
    assert_eq!(MatchOutcome::from(""), MatchOutcome::NoResult);
}

#[test]
fn test_from_value_full_record() {
    let value = json!({ "team1": "CSK", "team2": "MI", "result": "win", "winner": "CSK" });
    let record = MatchRecord::from_value(&value);

    assert_eq!(record, MatchRecord::win("CSK", "MI", "CSK"));
}

#[test]
fn test_from_value_missing_fields() {
    let value = json!({ "team1": "CSK" });
    let record = MatchRecord::from_value(&value);

    assert_eq!(record.team1, "CSK");
    assert_eq!(record.team2, "");
    assert_eq!(record.result, MatchOutcome::NoResult);
    assert!(record.winner.is_none());
}

#[test]
fn test_from_value_non_object() {
    let record = MatchRecord::from_value(&json!(42));

    assert_eq!(record.team1, "");
    assert_eq!(record.team2, "");
    assert_eq!(record.result, MatchOutcome::NoResult);
}

#[test]
fn test_from_value_non_string_team() {
    let value = json!({ "team1": 7, "team2": "MI", "result": "tie" });
    let record = MatchRecord::from_value(&value);

    assert_eq!(record.team1, "7");
    assert_eq!(record.team2, "MI");
    assert_eq!(record.result, MatchOutcome::Tie);
}

#[test]
fn test_from_value_scalar_ids() {
    let value = json!({ "team1": true, "team2": null, "result": "win", "winner": 8 });
    let record = MatchRecord::from_value(&value);

    assert_eq!(record.team1, "true");
    assert_eq!(record.team2, "null");
    assert_eq!(record.winner.as_deref(), Some("8"));
}

#[test]
fn test_parse_matches() {
    let json = r#"[
        { "team1": "CSK", "team2": "MI", "result": "win", "winner": "CSK" },
        { "team1": "RCB", "team2": "CSK", "result": "tie" },
        { "team1": "KKR", "team2": "DC", "result": "abandoned" }
    ]"#;
    let matches = parse_matches(json).unwrap();

    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].winner.as_deref(), Some("CSK"));
    assert!(matches[1].winner.is_none());
    assert_eq!(matches[2].result, MatchOutcome::NoResult);
}

#[test]
fn test_parse_matches_rejects_missing_team() {
    let err = parse_matches(r#"[{ "team1": "CSK", "result": "tie" }]"#).unwrap_err();
    assert!(matches!(err, TableError::Json(_)));
}

#[test]
fn test_serialize_outcome_snake_case() {
    let json = serde_json::to_value(MatchRecord::no_result("X", "Y")).unwrap();
    assert_eq!(json["result"], "no_result");
    assert!(json.get("winner").is_none());
}
