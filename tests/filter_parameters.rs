use quickcheck_macros::quickcheck;
use replay_viewer_wasm::domain::replay::{
    FilterForm, FilterValidationService, datetime_local_to_wire, parse_wire_datetime,
    split_symbols,
};

#[quickcheck]
fn one_symbol_per_comma_separated_entry(input: String) -> bool {
    split_symbols(&input).len() == input.matches(',').count() + 1
}

#[quickcheck]
fn symbol_entries_carry_no_outer_whitespace(input: String) -> bool {
    split_symbols(&input).iter().all(|s| s.trim() == s.as_str())
}

#[quickcheck]
fn symbols_keep_order_and_case(parts: Vec<String>) -> bool {
    let parts: Vec<String> = parts
        .into_iter()
        .map(|p| p.replace(',', "").trim().to_string())
        .collect();
    if parts.is_empty() {
        return true;
    }
    split_symbols(&parts.join(" , ")) == parts
}

#[quickcheck]
fn every_valid_minute_survives_the_wire_conversion(day: u8, hour: u8, minute: u8) -> bool {
    let local = format!(
        "2024-01-{:02}T{:02}:{:02}",
        day % 28 + 1,
        hour % 24,
        minute % 60
    );
    parse_wire_datetime(&datetime_local_to_wire(&local)).is_some()
}

#[test]
fn default_style_form_passes_validation() {
    let form = FilterForm {
        exchange: "bitmex".into(),
        from_date: "2024-12-01T00:00".into(),
        to_date: "2024-12-01T00:10:00".into(),
        symbols: "XBTUSD, ETHUSD".into(),
        limit: " 50 ".into(),
    };
    let params = form.to_parameters().unwrap();
    assert_eq!(params.to_date, "2024-12-01 00:10:00");
    assert_eq!(params.limit, 50);
    assert!(FilterValidationService::new().validate(&params).is_ok());
}

#[test]
fn raw_datetime_local_value_is_not_a_wire_date() {
    assert!(parse_wire_datetime("2024-12-01T00:00").is_none());
    assert!(parse_wire_datetime("2024-12-01 00:00").is_some());
}
