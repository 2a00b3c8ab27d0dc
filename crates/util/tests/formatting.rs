//! End-to-end checks of the public helpers on payment-list data.

use applet_util::{
    is_empty, is_number, is_positive_integer, normalize_logged_timestamp, pad_two_decimals, reformat_timestamp,
    sort_by, sort_values, trim_trailing_zero_decimal, Amount, Separators, SortSpec, TimeMode, UtilError,
};
use applet_util::sort::to_number;
use serde_json::{json, Value};

fn bills() -> Vec<Value> {
    vec![
        json!({"name": "tuition", "amount": "1200.00", "paid_at": "2020-9-1 8:30:00"}),
        json!({"name": "books", "amount": "86.5", "paid_at": "2020-09-03T10:02:44.120"}),
        json!({"name": "lunch", "amount": 300, "paid_at": "2020-9-2 12:5:9"}),
    ]
}

#[test]
fn predicates_on_sample_values() {
    assert!(is_number(&json!(1.5)));
    assert!(is_positive_integer(&json!(5)));
    assert!(!is_positive_integer(&json!(-1)));
    assert!(!is_positive_integer(&json!(5.5)));
    assert!(is_empty(&json!([])));
    assert!(is_empty(&json!({})));
    assert!(!is_empty(&json!([1])));
}

#[test]
fn bills_sorted_by_amount_descending() {
    // Amounts mix strings and numbers; coerce so "1200.00" is not compared
    // character by character against "86.5".
    let spec = SortSpec::new()
        .key("amount")
        .descending()
        .transform(|v| json!(to_number(v)));
    let sorted = sort_by(&bills(), &spec);
    let names: Vec<&str> = sorted.iter().map(|b| b["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["tuition", "lunch", "books"]);
}

#[test]
fn bills_sorted_by_name() {
    let sorted = sort_values(&Value::Array(bills()), &SortSpec::new().key("name")).unwrap();
    let names: Vec<&str> = sorted.iter().map(|b| b["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["books", "lunch", "tuition"]);
}

#[test]
fn sort_rejects_object_input() {
    assert_eq!(sort_values(&json!({"a": 1}), &SortSpec::new()), Err(UtilError::NotArray));
}

#[test]
fn bill_timestamps_render_in_every_shape() {
    let sep = Separators::default();
    let raw = "2020-9-2 12:5:9";
    assert_eq!(reformat_timestamp(raw, TimeMode::Full, &sep), "2020-09-02 12:05:09");
    assert_eq!(reformat_timestamp(raw, TimeMode::from_index(1), &sep), "09-02 12:05");
    assert_eq!(reformat_timestamp(raw, TimeMode::from_index(2), &sep), "2020:09:02");
    assert_eq!(reformat_timestamp(raw, TimeMode::from_index(3), &sep), "12:05:09");
    assert_eq!(reformat_timestamp(raw, TimeMode::from_index(4), &sep), "09-02");
    assert_eq!(reformat_timestamp(raw, TimeMode::from_index(5), &sep), "12:05");
}

#[test]
fn logged_timestamp_then_reformat() {
    let clean = normalize_logged_timestamp("2020-09-03T10:02:44.120");
    assert_eq!(clean, "2020-09-03 10:02:44");
    assert_eq!(
        reformat_timestamp(&clean, TimeMode::MonthDayHourMinute, &Separators::default()),
        "09-03 10:02"
    );
}

#[test]
fn bill_amounts_formatted_from_json() {
    let shown: Vec<String> = bills()
        .iter()
        .map(|b| Amount::try_from(&b["amount"]).map(|a| pad_two_decimals(a, true)))
        .map(|r| r.and_then(|inner| inner).unwrap())
        .collect();
    assert_eq!(shown, vec!["1200.00", "86.50", "300.00"]);

    let trimmed: Vec<String> = bills()
        .iter()
        .map(|b| trim_trailing_zero_decimal(Amount::try_from(&b["amount"]).unwrap()))
        .collect();
    assert_eq!(trimmed, vec!["1200", "86.5", "300"]);
}

#[test]
fn money_examples() {
    assert_eq!(trim_trailing_zero_decimal("12.00"), "12");
    assert_eq!(trim_trailing_zero_decimal("12.09"), "12.09");
    assert_eq!(pad_two_decimals("0.98999", true).unwrap(), "0.99");
    assert_eq!(pad_two_decimals("12.3456", false).unwrap(), "12.34");
}
