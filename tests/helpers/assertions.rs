// Test Assertion Helpers
//
// Assertions over JSON response bodies.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Read a decimal string field from a JSON body
///
/// # Panics
/// If the value is missing or is not a decimal string
pub fn decimal_at(body: &Value, pointer: &str) -> Decimal {
    let text = body
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("Expected decimal string at {}, body: {}", pointer, body));

    Decimal::from_str(text)
        .unwrap_or_else(|e| panic!("Value at {} is not a decimal ({}): {}", pointer, text, e))
}

/// Assert a money field renders with exactly two decimal places
pub fn assert_money(body: &Value, pointer: &str, expected: &str) {
    let actual = body.pointer(pointer).and_then(Value::as_str);
    assert_eq!(
        actual,
        Some(expected),
        "Unexpected amount at {}, body: {}",
        pointer,
        body
    );
}

/// Assert the body is the standard error envelope with the given code
pub fn assert_error_envelope(body: &Value, code: u16) {
    assert_eq!(
        body["error"]["code"].as_u64(),
        Some(u64::from(code)),
        "Expected error envelope with code {}, body: {}",
        code,
        body
    );
    assert!(
        body["error"]["message"].is_string(),
        "Error envelope is missing a message: {}",
        body
    );
}
