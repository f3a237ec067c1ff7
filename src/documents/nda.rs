//! Non-Disclosure Agreement

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::traits::{Template, Validator};
use super::{validate_fields, DocumentType};
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NdaRequest {
    pub disclosing_party: String,
    pub receiving_party: String,
    pub nda_start_date: String,
    /// Whole months
    pub confidentiality_period: String,
}

impl NdaRequest {
    fn value(&self, key: &str) -> &str {
        match key {
            "disclosing_party" => &self.disclosing_party,
            "receiving_party" => &self.receiving_party,
            "nda_start_date" => &self.nda_start_date,
            "confidentiality_period" => &self.confidentiality_period,
            _ => "",
        }
    }
}

impl Validator for NdaRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(DocumentType::Nda.fields(), |key| self.value(key))
    }
}

impl Template for NdaRequest {
    fn document_type(&self) -> DocumentType {
        DocumentType::Nda
    }

    fn body(&self, made_on: NaiveDate) -> String {
        format!(
            "
NON-DISCLOSURE AGREEMENT (NDA)

This Non-Disclosure Agreement is made on {made_on}.

BETWEEN

1. Disclosing Party: {}
2. Receiving Party: {}

Start Date: {}
Confidentiality Period: {} months
",
            self.disclosing_party,
            self.receiving_party,
            self.nda_start_date,
            self.confidentiality_period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NdaRequest {
        NdaRequest {
            disclosing_party: "Acme".into(),
            receiving_party: "Globex".into(),
            nda_start_date: "2024-03-01".into(),
            confidentiality_period: "24".into(),
        }
    }

    #[test]
    fn test_body_appends_months() {
        let made_on = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let body = sample().body(made_on);
        assert!(body.starts_with("\nNON-DISCLOSURE AGREEMENT (NDA)\n"));
        assert!(body.contains("1. Disclosing Party: Acme\n2. Receiving Party: Globex\n"));
        assert!(body.ends_with("Start Date: 2024-03-01\nConfidentiality Period: 24 months\n"));
    }

    #[test]
    fn test_period_must_be_numeric() {
        let mut form = sample();
        form.confidentiality_period = "two years".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["Confidentiality period must be a numeric value!"]
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut form = sample();
        form.disclosing_party = "{receiving_party}".into();
        let made_on = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(form
            .body(made_on)
            .contains("1. Disclosing Party: {receiving_party}\n"));
    }
}
