//! Document types, their form fields and body templates
//!
//! Each document type lives in its own module with a typed request struct
//! that knows how to validate itself and render its body prose:
//! - `LastWillRequest` - Last Will and Testament
//! - `EmploymentRequest` - Employment Contract
//! - `NdaRequest` - Non-Disclosure Agreement (NDA)
//! - `LeaseRequest` - Lease Agreement
//! - `MarriageRequest` - Marriage Agreement

pub mod employment;
pub mod last_will;
pub mod lease;
pub mod marriage;
pub mod nda;
pub mod traits;

pub use employment::EmploymentRequest;
pub use last_will::LastWillRequest;
pub use lease::LeaseRequest;
pub use marriage::MarriageRequest;
pub use nda::NdaRequest;
pub use traits::{Template, Validator};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{RenderRequest, SignatureSlot};
use crate::validation::{
    validate_date_field, validate_number_field, validate_required, ValidationError,
    ValidationErrors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Last Will and Testament")]
    LastWill,
    #[serde(rename = "Employment Contract")]
    Employment,
    #[serde(rename = "Non-Disclosure Agreement (NDA)")]
    Nda,
    #[serde(rename = "Lease Agreement")]
    Lease,
    #[serde(rename = "Marriage Agreement")]
    Marriage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// YYYY-MM-DD
    Date,
    /// Decimal digits only
    Number,
}

/// One input on a document form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Form key, also the JSON key of the request struct
    pub key: &'static str,
    /// Prompt shown to the user
    pub label: &'static str,
    /// Short name used in numeric error messages
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn text(key: &'static str, label: &'static str, name: &'static str) -> FieldSpec {
    FieldSpec { key, label, name, kind: FieldKind::Text }
}

const fn date(key: &'static str, label: &'static str, name: &'static str) -> FieldSpec {
    FieldSpec { key, label, name, kind: FieldKind::Date }
}

const fn number(key: &'static str, label: &'static str, name: &'static str) -> FieldSpec {
    FieldSpec { key, label, name, kind: FieldKind::Number }
}

const LAST_WILL_FIELDS: &[FieldSpec] = &[
    text("testator", "Enter the name of the testator:", "Testator"),
    text("executor", "Enter the name of the executor:", "Executor"),
    text("beneficiary", "Enter the name of the beneficiary:", "Beneficiary"),
    date("will_date", "Enter the date of the will (YYYY-MM-DD):", "Will date"),
];

const EMPLOYMENT_FIELDS: &[FieldSpec] = &[
    text("employer", "Enter the employer's name:", "Employer"),
    text("employee", "Enter the employee's name:", "Employee"),
    date("start_date", "Enter the start date (YYYY-MM-DD):", "Start date"),
    text("position", "Enter the job position:", "Position"),
    number("salary", "Enter the salary (numeric value):", "Salary"),
];

const NDA_FIELDS: &[FieldSpec] = &[
    text("disclosing_party", "Enter the name of the disclosing party:", "Disclosing party"),
    text("receiving_party", "Enter the name of the receiving party:", "Receiving party"),
    date("nda_start_date", "Enter the start date of the NDA (YYYY-MM-DD):", "Start date"),
    number(
        "confidentiality_period",
        "Enter the confidentiality period (in months):",
        "Confidentiality period",
    ),
];

const LEASE_FIELDS: &[FieldSpec] = &[
    text("landlord", "Enter the name of the landlord:", "Landlord"),
    text("tenant", "Enter the name of the tenant:", "Tenant"),
    date("lease_start_date", "Enter the start date of the lease (YYYY-MM-DD):", "Lease start date"),
    date("lease_end_date", "Enter the end date of the lease (YYYY-MM-DD):", "Lease end date"),
    number("rent_amount", "Enter the monthly rent amount (numeric value):", "Rent amount"),
];

const MARRIAGE_FIELDS: &[FieldSpec] = &[
    text("party1", "Enter the full name of the first party:", "First party"),
    text("father1", "Enter the father name of the first party:", "Father of the first party"),
    text("mother1", "Enter the mother name of the first party:", "Mother of the first party"),
    text("party2", "Enter the full name of the second party:", "Second party"),
    text("father2", "Enter the father name of the second party:", "Father of the second party"),
    text("mother2", "Enter the mother name of the second party:", "Mother of the second party"),
    text("place_of_marriage", "Enter the place of marriage:", "Place of marriage"),
    date("marriage_date", "Enter the marriage date (YYYY-MM-DD):", "Marriage date"),
];

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::LastWill,
        DocumentType::Employment,
        DocumentType::Nda,
        DocumentType::Lease,
        DocumentType::Marriage,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::LastWill => "Last Will and Testament",
            DocumentType::Employment => "Employment Contract",
            DocumentType::Nda => "Non-Disclosure Agreement (NDA)",
            DocumentType::Lease => "Lease Agreement",
            DocumentType::Marriage => "Marriage Agreement",
        }
    }

    /// Short name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentType::LastWill => "will",
            DocumentType::Employment => "employment",
            DocumentType::Nda => "nda",
            DocumentType::Lease => "lease",
            DocumentType::Marriage => "marriage",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            DocumentType::LastWill => LAST_WILL_FIELDS,
            DocumentType::Employment => EMPLOYMENT_FIELDS,
            DocumentType::Nda => NDA_FIELDS,
            DocumentType::Lease => LEASE_FIELDS,
            DocumentType::Marriage => MARRIAGE_FIELDS,
        }
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.key == key)
    }

    /// Upload prompts for the signature slots this form offers. Only the
    /// marriage agreement has a guarantor.
    pub fn signature_labels(&self) -> &'static [(SignatureSlot, &'static str)] {
        match self {
            DocumentType::LastWill => &[
                (SignatureSlot::Party1, "Upload Signature of Testator"),
                (SignatureSlot::Party2, "Upload Signature of Executor"),
            ],
            DocumentType::Employment => &[
                (SignatureSlot::Party1, "Upload Signature of Employer"),
                (SignatureSlot::Party2, "Upload Signature of Employee"),
            ],
            DocumentType::Nda => &[
                (SignatureSlot::Party1, "Upload Signature of Disclosing Party"),
                (SignatureSlot::Party2, "Upload Signature of Receiving Party"),
            ],
            DocumentType::Lease => &[
                (SignatureSlot::Party1, "Upload Signature of Landlord"),
                (SignatureSlot::Party2, "Upload Signature of Tenant"),
            ],
            DocumentType::Marriage => &[
                (SignatureSlot::Party1, "Upload Signature of Party 1"),
                (SignatureSlot::Party2, "Upload Signature of Party 2"),
                (SignatureSlot::Guarantor, "Upload Signature of Guarantor"),
            ],
        }
    }

    pub fn accepts_signature(&self, slot: SignatureSlot) -> bool {
        self.signature_labels().iter().any(|(s, _)| *s == slot)
    }

    pub fn subject(&self) -> String {
        format!("Subject: {}", self.display_name())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DocumentType::ALL
            .into_iter()
            .find(|t| {
                t.slug().eq_ignore_ascii_case(wanted) || t.display_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| wanted.to_string())
    }
}

/// Check a set of form values against a type's field list.
///
/// Every empty field gets its own "is required" error and the form as a
/// whole gets "All fields are required!". Date and number checks only run on
/// non-empty values.
pub fn validate_fields<'a>(
    fields: &[FieldSpec],
    value_of: impl Fn(&str) -> &'a str,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut missing = false;

    for field in fields {
        let value = value_of(field.key);
        if !validate_required(value, field.key, field.label, &mut errors) {
            missing = true;
            continue;
        }
        match field.kind {
            FieldKind::Text => {}
            FieldKind::Date => validate_date_field(value, field.key, &mut errors),
            FieldKind::Number => validate_number_field(value, field.key, field.name, &mut errors),
        }
    }

    if missing {
        errors.add(ValidationError::all_required());
    }
    errors.into_result()
}

/// A filled-in form of any document type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentForm {
    LastWill(LastWillRequest),
    Employment(EmploymentRequest),
    Nda(NdaRequest),
    Lease(LeaseRequest),
    Marriage(MarriageRequest),
}

impl DocumentForm {
    /// Parse a JSON object of field values for the given type. Missing keys
    /// become empty values and are reported by `validate`.
    pub fn from_json(doc_type: DocumentType, json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(doc_type, value)
    }

    pub fn from_value(
        doc_type: DocumentType,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match doc_type {
            DocumentType::LastWill => DocumentForm::LastWill(serde_json::from_value(value)?),
            DocumentType::Employment => DocumentForm::Employment(serde_json::from_value(value)?),
            DocumentType::Nda => DocumentForm::Nda(serde_json::from_value(value)?),
            DocumentType::Lease => DocumentForm::Lease(serde_json::from_value(value)?),
            DocumentType::Marriage => DocumentForm::Marriage(serde_json::from_value(value)?),
        })
    }

    pub fn from_values(
        doc_type: DocumentType,
        values: &BTreeMap<String, String>,
    ) -> Result<Self, serde_json::Error> {
        Self::from_value(doc_type, serde_json::to_value(values)?)
    }

    fn validator(&self) -> &dyn Validator {
        match self {
            DocumentForm::LastWill(r) => r,
            DocumentForm::Employment(r) => r,
            DocumentForm::Nda(r) => r,
            DocumentForm::Lease(r) => r,
            DocumentForm::Marriage(r) => r,
        }
    }

    fn template(&self) -> &dyn Template {
        match self {
            DocumentForm::LastWill(r) => r,
            DocumentForm::Employment(r) => r,
            DocumentForm::Nda(r) => r,
            DocumentForm::Lease(r) => r,
            DocumentForm::Marriage(r) => r,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        self.template().document_type()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.validator().validate()
    }

    pub fn body(&self, made_on: NaiveDate) -> String {
        self.template().body(made_on)
    }

    pub fn subject(&self) -> String {
        self.template().subject()
    }

    /// Validate, then build the request the renderer consumes. Signatures
    /// and logo are attached by the caller.
    pub fn to_render_request(&self, made_on: NaiveDate) -> Result<RenderRequest, ValidationErrors> {
        self.validate()?;
        Ok(RenderRequest::new(self.body(made_on), self.subject()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slug_and_display_name() {
        assert_eq!("nda".parse::<DocumentType>(), Ok(DocumentType::Nda));
        assert_eq!(
            "Marriage Agreement".parse::<DocumentType>(),
            Ok(DocumentType::Marriage)
        );
        assert_eq!(" Lease ".parse::<DocumentType>(), Ok(DocumentType::Lease));
        assert_eq!("deed".parse::<DocumentType>(), Err("deed".to_string()));
    }

    #[test]
    fn test_subject_line() {
        assert_eq!(
            DocumentType::Nda.subject(),
            "Subject: Non-Disclosure Agreement (NDA)"
        );
    }

    #[test]
    fn test_only_marriage_has_guarantor() {
        for doc_type in DocumentType::ALL {
            assert_eq!(
                doc_type.accepts_signature(SignatureSlot::Guarantor),
                doc_type == DocumentType::Marriage
            );
            assert!(doc_type.accepts_signature(SignatureSlot::Party1));
        }
    }

    #[test]
    fn test_field_keys_unique() {
        for doc_type in DocumentType::ALL {
            let fields = doc_type.fields();
            for (i, a) in fields.iter().enumerate() {
                assert!(fields[i + 1..].iter().all(|b| b.key != a.key));
            }
        }
    }

    #[test]
    fn test_validate_fields_reports_missing_and_format() {
        let values: BTreeMap<&str, &str> = [("employer", "Acme"), ("start_date", "2024/01/01"), ("salary", "lots")]
            .into_iter()
            .collect();
        let errors = validate_fields(EMPLOYMENT_FIELDS, |k| values.get(k).copied().unwrap_or(""))
            .unwrap_err();
        let messages = errors.messages();
        assert!(messages.contains(&"Enter the employee's name: is required.".to_string()));
        assert!(messages.contains(&crate::validation::INVALID_DATE.to_string()));
        assert!(messages.contains(&"Salary must be a numeric value!".to_string()));
        assert_eq!(messages.last().map(String::as_str), Some("All fields are required!"));
    }

    #[test]
    fn test_form_from_values_round_trips_type() {
        let mut values = BTreeMap::new();
        values.insert("landlord".to_string(), "L".to_string());
        let form = DocumentForm::from_values(DocumentType::Lease, &values).unwrap();
        assert_eq!(form.document_type(), DocumentType::Lease);
        assert!(form.validate().is_err());
    }
}
