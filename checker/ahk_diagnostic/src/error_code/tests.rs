use super::*;

#[test]
fn display_matches_as_str() {
    assert_eq!(ErrorCode::E0001.to_string(), "E0001");
    assert_eq!(ErrorCode::E0004.as_str(), "E0004");
}

#[test]
fn parse_round_trips_all_codes() {
    for code in [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
    ] {
        assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
    }
}

#[test]
fn parse_is_case_insensitive_and_trims() {
    assert_eq!(ErrorCode::parse(" e0003 "), Some(ErrorCode::E0003));
}

#[test]
fn parse_rejects_unknown_codes() {
    assert_eq!(ErrorCode::parse("E9999"), None);
    assert_eq!(ErrorCode::parse(""), None);
    assert_eq!(ErrorCode::parse("0004"), None);
}

#[test]
fn every_code_has_a_description() {
    for code in [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
    ] {
        assert!(!code.description().is_empty());
    }
}
