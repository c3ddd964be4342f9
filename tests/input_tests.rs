use pointage::core::input::{TimeField, accept_time_point, normalize_time_input};
use pointage::utils::time::parse_time;

#[test]
fn four_digits_get_a_colon() {
    assert_eq!(normalize_time_input("0800"), "08:00");
    assert_eq!(normalize_time_input("1618"), "16:18");
}

#[test]
fn three_digits_get_a_colon_after_two() {
    assert_eq!(normalize_time_input("080"), "08:0");
}

#[test]
fn short_input_passes_through() {
    assert_eq!(normalize_time_input(""), "");
    assert_eq!(normalize_time_input("8"), "8");
    assert_eq!(normalize_time_input("08"), "08");
}

#[test]
fn non_digits_are_stripped() {
    assert_eq!(normalize_time_input("08:00"), "08:00");
    assert_eq!(normalize_time_input("0a8b0c0"), "08:00");
}

#[test]
fn overlong_input_is_returned_unchanged() {
    assert_eq!(normalize_time_input("080099"), "080099");
    assert_eq!(normalize_time_input("08:00:99"), "08:00:99");
}

#[test]
fn acceptance_gate_needs_a_complete_valid_time() {
    assert_eq!(accept_time_point("08:00"), parse_time("08:00"));
    assert_eq!(accept_time_point("23:59"), parse_time("23:59"));
    assert_eq!(accept_time_point("8:00"), None); // not 5 chars
    assert_eq!(accept_time_point("24:00"), None); // hour out of range
    assert_eq!(accept_time_point("12:60"), None); // minute out of range
    assert_eq!(accept_time_point("12:3"), None);
    assert_eq!(accept_time_point("ab:cd"), None);
}

#[test]
fn time_field_keeps_raw_and_parsed_in_sync() {
    let complete = TimeField::from_raw("0800");
    assert_eq!(complete.raw, "08:00");
    assert_eq!(complete.parsed, parse_time("08:00"));
    assert!(!complete.is_pending());

    let partial = TimeField::from_raw("08");
    assert_eq!(partial.raw, "08");
    assert_eq!(partial.parsed, None);
    assert!(partial.is_pending());

    let invalid = TimeField::from_raw("2500");
    assert_eq!(invalid.raw, "25:00");
    assert_eq!(invalid.parsed, None);
    assert!(invalid.is_pending());
}
