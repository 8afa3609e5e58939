// Integration tests for file-backed fee schedule loading
//
// Writes schedule documents to a scratch directory, loads them through
// `FileScheduleRepository` and `ScheduleCatalog`, and checks the snapshot the
// calculator would see.

use std::path::PathBuf;
use std::sync::Arc;

use rust_decimal_macros::dec;
use uuid::Uuid;

use visafee::applicants::{ApplicantCategory, ApplicantComposition, PriorVisa};
use visafee::calculations::{FeeCalculationInput, LodgementMode};
use visafee::core::AppError;
use visafee::payments::PaymentMethod;
use visafee::schedules::{FileScheduleRepository, ScheduleCatalog};

/// Scratch file removed when dropped
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn write(extension: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("visafee-{}.{}", Uuid::new_v4(), extension));
        std::fs::write(&path, contents).expect("write scratch schedule");
        Self(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

async fn load(path: PathBuf) -> Result<ScheduleCatalog, AppError> {
    let repository = FileScheduleRepository::new(path)?;
    ScheduleCatalog::load(Arc::new(repository)).await
}

#[actix_web::test]
async fn test_bundled_schedule_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/fee_schedules.yaml");
    let catalog = load(path).await.unwrap();
    let schedules = catalog.snapshot();

    assert!(schedules.len() >= 5);
    let student = schedules.get("500").unwrap();
    assert_eq!(student.base_fee, 1600);
    assert_eq!(student.non_internet_fee, 0);

    // Code derived from the visa name when the row has none
    assert!(schedules.get("482").is_some());
}

#[actix_web::test]
async fn test_json_schedule_with_mixed_field_names() {
    let file = ScratchFile::write(
        "json",
        r#"{
            "records": [
                {"visaName": "Student visa (subclass 500)", "baseFee": "1,650", "subsequentFee": "790",
                 "nonInternetFee": "135", "additionalAdultFee": "1,240", "additionalChildFee": "415"},
                {"subclass": "600", "visa_name": "Visitor", "base_fee": "??"}
            ]
        }"#,
    );

    let catalog = load(file.0.clone()).await.unwrap();
    let schedules = catalog.snapshot();
    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules.get("600").map(|r| r.base_fee), Some(0));

    let composition = ApplicantComposition::new()
        .with_count(ApplicantCategory::Secondary, 1)
        .with_onshore(ApplicantCategory::Secondary, PriorVisa::Student)
        .with_count(ApplicantCategory::Dependent, 1);

    let calculation = FeeCalculationInput::new("500")
        .with_composition(composition)
        .with_lodgement(LodgementMode::Online)
        .with_payment_method(PaymentMethod::Mastercard)
        .calculate(&schedules);

    assert!(calculation.record_found);
    assert_eq!(calculation.breakdown.subtotal, dec!(4095));
    assert_eq!(calculation.breakdown.total, dec!(4152.33));
}

#[actix_web::test]
async fn test_yaml_list_schedule() {
    let file = ScratchFile::write(
        "yml",
        "- code: 485\n  name: Temporary Graduate\n  base_fee: 1985\n  additional_adult_fee: \"990\"\n",
    );

    let catalog = load(file.0.clone()).await.unwrap();
    let record = catalog.snapshot().get("485").cloned().unwrap();
    assert_eq!(record.base_fee, 1985);
    assert_eq!(record.additional_adult_fee, 990);
}

#[actix_web::test]
async fn test_invalid_fee_values_keep_the_rest_of_the_schedule() {
    let file = ScratchFile::write(
        "yaml",
        r#"records:
  - code: 500
    name: Student visa (subclass 500)
    visa_name: Student visa (subclass 500)
    base_fee: "1,650"
    additional_adult_fee: [1240]
  - code: 600
    base_fee: true
    subsequent_fee:
      amount: 5
    non_internet_fee: "80"
"#,
    );

    let catalog = load(file.0.clone()).await.unwrap();
    let schedules = catalog.snapshot();
    assert_eq!(schedules.len(), 2);

    let student = schedules.get("500").unwrap();
    assert_eq!(student.base_fee, 1650);
    assert_eq!(student.additional_adult_fee, 0);

    let visitor = schedules.get("600").unwrap();
    assert_eq!(visitor.base_fee, 0);
    assert_eq!(visitor.subsequent_fee, 0);
    assert_eq!(visitor.non_internet_fee, 80);
}

#[actix_web::test]
async fn test_missing_file_is_schedule_load_error() {
    let path = std::env::temp_dir().join(format!("visafee-missing-{}.json", Uuid::new_v4()));
    let result = load(path).await;
    assert!(matches!(result, Err(AppError::ScheduleLoad(_))));
}

#[actix_web::test]
async fn test_malformed_file_is_decode_error() {
    let file = ScratchFile::write("yaml", "records: [unterminated");
    let result = load(file.0.clone()).await;
    assert!(matches!(result, Err(AppError::Yaml(_))));
}

#[actix_web::test]
async fn test_unsupported_extension_is_configuration_error() {
    let result = load(PathBuf::from("fees.toml")).await;
    assert!(matches!(result, Err(AppError::Configuration(_))));
}
