// Property-based tests for fee schedule charge parsing
//
// Covers:
// - Thousands separators are ignored
// - Parsing a clean integer string gives the same integer back
// - Arbitrary text never panics and non-numeric text reads as 0
// - Raw rows from JSON and YAML map onto canonical records

use proptest::prelude::*;

use visafee::schedules::repositories::{parse_schedule_document, ScheduleFormat};
use visafee::schedules::services::{parse_charge, try_parse_charge};

/// Render an amount the way schedule exports do, e.g. 1234567 -> "1,234,567"
fn with_separators(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::new();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

proptest! {
    #[test]
    fn test_clean_integers_parse_to_themselves(amount in 0u64..10_000_000_000u64) {
        let parsed = parse_charge(&amount.to_string());
        prop_assert_eq!(parsed, amount);
        prop_assert_eq!(parse_charge(&parsed.to_string()), parsed, "Parsing must be idempotent");
    }

    #[test]
    fn test_separated_amounts_parse(amount in 0u64..10_000_000_000u64) {
        prop_assert_eq!(parse_charge(&with_separators(amount)), amount);
        prop_assert_eq!(parse_charge(&format!("${}", with_separators(amount))), amount);
    }

    #[test]
    fn test_arbitrary_text_never_panics(text in ".*") {
        let _ = parse_charge(&text);
    }

    #[test]
    fn test_alphabetic_text_is_zero(text in "[a-zA-Z ]*") {
        prop_assert_eq!(parse_charge(&text), 0);
        prop_assert_eq!(try_parse_charge(&text), None);
    }
}

#[test]
fn test_reference_values() {
    assert_eq!(parse_charge("1,420"), 1420);
    assert_eq!(parse_charge(""), 0);
    assert_eq!(parse_charge("abc"), 0);
}

#[test]
fn test_json_document_maps_to_records() {
    let raw = parse_schedule_document(
        r#"[
            {"visaName": "Student visa (subclass 500)", "baseFee": "1,650", "subsequentFee": "790",
             "nonInternetFee": "135", "additionalAdultFee": "1,240", "additionalChildFee": "415"},
            {"code": 600, "name": "Visitor", "base_fee": 195, "non_internet_fee": "n/a"}
        ]"#,
        ScheduleFormat::Json,
    )
    .unwrap();

    let records: Vec<_> = raw.into_iter().filter_map(|r| r.into_record()).collect();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].subclass_code, "500");
    assert_eq!(records[0].base_fee, 1650);
    assert_eq!(records[0].additional_adult_fee, 1240);

    assert_eq!(records[1].subclass_code, "600");
    assert_eq!(records[1].base_fee, 195);
    assert_eq!(records[1].non_internet_fee, 0);
}

#[test]
fn test_yaml_document_maps_to_records() {
    let yaml = r#"
records:
  - subclass_code: "485"
    visa_name: Temporary Graduate visa (subclass 485)
    base_application_charge: "1,985"
    subsequent_temporary_application_charge: 700
    additional_applicant_18_plus: "990"
    additional_applicant_under_18: "500"
"#;

    let raw = parse_schedule_document(yaml, ScheduleFormat::Yaml).unwrap();
    let record = raw.into_iter().next().and_then(|r| r.into_record()).unwrap();

    assert_eq!(record.subclass_code, "485");
    assert_eq!(record.base_fee, 1985);
    assert_eq!(record.subsequent_fee, 700);
    assert_eq!(record.non_internet_fee, 0);
    assert_eq!(record.additional_adult_fee, 990);
    assert_eq!(record.additional_child_fee, 500);
}
