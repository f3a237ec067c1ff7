//! Employment Contract

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::traits::{Template, Validator};
use super::{validate_fields, DocumentType};
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentRequest {
    pub employer: String,
    pub employee: String,
    pub start_date: String,
    pub position: String,
    /// Digits only
    pub salary: String,
}

impl EmploymentRequest {
    fn value(&self, key: &str) -> &str {
        match key {
            "employer" => &self.employer,
            "employee" => &self.employee,
            "start_date" => &self.start_date,
            "position" => &self.position,
            "salary" => &self.salary,
            _ => "",
        }
    }
}

impl Validator for EmploymentRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(DocumentType::Employment.fields(), |key| self.value(key))
    }
}

impl Template for EmploymentRequest {
    fn document_type(&self) -> DocumentType {
        DocumentType::Employment
    }

    fn body(&self, made_on: NaiveDate) -> String {
        format!(
            "
EMPLOYMENT CONTRACT

This Employment Contract is made on {made_on}.

BETWEEN

1. Employer: {}
2. Employee: {}

Start Date: {}
Position: {}
Salary: {}
",
            self.employer, self.employee, self.start_date, self.position, self.salary
        )
    }
}
