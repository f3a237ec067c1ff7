mod common;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use common::*;
use legal_docgen::documents::{DocumentForm, DocumentType, EmploymentRequest, Template};
use legal_docgen::{render, validate_date, validate_number, DocError, FormSession, RenderConfig};

fn made_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

#[test]
fn test_validation_examples() {
    assert!(validate_date("2024-01-15"));
    assert!(!validate_date("2024-1-15"));
    assert!(validate_date("2024-13-01"));
    assert!(validate_date("2024-02-31"));

    assert!(validate_number("12345"));
    assert!(!validate_number("123.45"));
    assert!(!validate_number("-5"));
}

#[test]
fn test_employment_request_deserialization() {
    let json = r#"{
        "employer": "Acme Corp",
        "employee": "Jane Roe",
        "start_date": "2024-02-01",
        "position": "Engineer",
        "salary": "85000"
    }"#;
    let request: EmploymentRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.position, "Engineer");
    assert!(request.subject().ends_with("Employment Contract"));
}

#[test]
fn test_every_type_renders_when_complete() {
    for doc_type in DocumentType::ALL {
        let values: BTreeMap<String, String> = doc_type
            .fields()
            .iter()
            .map(|f| {
                let value = match f.kind {
                    legal_docgen::documents::FieldKind::Text => "Sample".to_string(),
                    legal_docgen::documents::FieldKind::Date => "2024-06-30".to_string(),
                    legal_docgen::documents::FieldKind::Number => "12".to_string(),
                };
                (f.key.to_string(), value)
            })
            .collect();

        let form = DocumentForm::from_values(doc_type, &values).unwrap();
        let request = form.to_render_request(made_on()).unwrap();
        assert_eq!(request.subject, doc_type.subject());
        assert!(request.body.starts_with('\n'));
        assert!(request.body.contains("made on 2024-01-15."));

        let config = RenderConfig::default().without_default_logo();
        let pdf = render(&request, &config).unwrap();
        let pages = page_operations(&pdf);
        assert_eq!(pages.len(), 1, "{}", doc_type);
    }
}

#[test]
fn test_incomplete_form_blocks_generation() {
    let form = DocumentForm::from_json(DocumentType::Lease, r#"{"landlord": "Alice"}"#).unwrap();
    let errors = form.to_render_request(made_on()).unwrap_err();
    assert!(errors.messages().contains(&"All fields are required!".to_string()));

    let err: DocError = errors.into();
    assert!(err.to_string().contains("All fields are required!"));
}

#[test]
fn test_session_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut session = FormSession::new(DocumentType::Marriage);
    session.save_input("party1", "Ravi");
    session.set_file_name("marriage.pdf");
    session.save_json(&path).unwrap();

    let restored = FormSession::load_json(&path).unwrap();
    assert_eq!(restored.document_type, DocumentType::Marriage);
    assert_eq!(restored.get("party1"), Some("Ravi"));
    assert_eq!(restored.output_file_name(), "marriage.pdf");
}

#[test]
fn test_session_submit_then_build() {
    let mut inputs = BTreeMap::new();
    inputs.insert("disclosing_party".to_string(), "Acme".to_string());
    inputs.insert("receiving_party".to_string(), "Globex".to_string());
    inputs.insert("nda_start_date".to_string(), "2024-03-01".to_string());
    inputs.insert("confidentiality_period".to_string(), "".to_string());

    let mut session = FormSession::new(DocumentType::Nda);
    session.submit(&inputs);
    assert_eq!(session.warnings.len(), 1);

    // a later round fills the gap; earlier values persist
    let mut more = BTreeMap::new();
    more.insert("confidentiality_period".to_string(), "18".to_string());
    session.submit(&more);
    let form = session.build_document().unwrap();
    assert!(form.validate().is_ok());
    assert!(form.body(made_on()).contains("Confidentiality Period: 18 months"));
}

#[test]
fn test_missing_session_file_is_io_error() {
    let err = FormSession::load_json("/nonexistent/session.json").unwrap_err();
    assert!(matches!(err, DocError::Io(_)));
}
