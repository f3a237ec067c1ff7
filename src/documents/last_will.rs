//! Last Will and Testament

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::traits::{Template, Validator};
use super::{validate_fields, DocumentType};
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastWillRequest {
    pub testator: String,
    pub executor: String,
    pub beneficiary: String,
    /// YYYY-MM-DD
    pub will_date: String,
}

impl LastWillRequest {
    fn value(&self, key: &str) -> &str {
        match key {
            "testator" => &self.testator,
            "executor" => &self.executor,
            "beneficiary" => &self.beneficiary,
            "will_date" => &self.will_date,
            _ => "",
        }
    }
}

impl Validator for LastWillRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(DocumentType::LastWill.fields(), |key| self.value(key))
    }
}

impl Template for LastWillRequest {
    fn document_type(&self) -> DocumentType {
        DocumentType::LastWill
    }

    fn body(&self, made_on: NaiveDate) -> String {
        format!(
            "
LAST WILL AND TESTAMENT

This Last Will and Testament is made on {made_on}.

BY

Testator: {}
Executor: {}
Beneficiary: {}

Will Date: {}
",
            self.testator, self.executor, self.beneficiary, self.will_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LastWillRequest {
        LastWillRequest {
            testator: "John Doe".into(),
            executor: "Jane Doe".into(),
            beneficiary: "Jimmy Doe".into(),
            will_date: "2024-01-10".into(),
        }
    }

    #[test]
    fn test_body() {
        let made_on = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let body = sample().body(made_on);
        assert!(body.starts_with("\nLAST WILL AND TESTAMENT\n\n"));
        assert!(body.contains("This Last Will and Testament is made on 2024-01-15.\n\nBY\n\n"));
        assert!(body.contains("Testator: John Doe\nExecutor: Jane Doe\nBeneficiary: Jimmy Doe\n"));
        assert!(body.ends_with("\nWill Date: 2024-01-10\n"));
    }

    #[test]
    fn test_valid_form() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_bad_will_date() {
        let mut form = sample();
        form.will_date = "10-01-2024".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("will_date"));
    }
}
