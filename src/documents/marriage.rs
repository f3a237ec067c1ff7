//! Marriage Agreement
//!
//! The only document type with a guarantor signature.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::traits::{Template, Validator};
use super::{validate_fields, DocumentType};
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarriageRequest {
    pub party1: String,
    pub father1: String,
    pub mother1: String,
    pub party2: String,
    pub father2: String,
    pub mother2: String,
    pub place_of_marriage: String,
    pub marriage_date: String,
}

impl MarriageRequest {
    fn value(&self, key: &str) -> &str {
        match key {
            "party1" => &self.party1,
            "father1" => &self.father1,
            "mother1" => &self.mother1,
            "party2" => &self.party2,
            "father2" => &self.father2,
            "mother2" => &self.mother2,
            "place_of_marriage" => &self.place_of_marriage,
            "marriage_date" => &self.marriage_date,
            _ => "",
        }
    }
}

impl Validator for MarriageRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(DocumentType::Marriage.fields(), |key| self.value(key))
    }
}

impl Template for MarriageRequest {
    fn document_type(&self) -> DocumentType {
        DocumentType::Marriage
    }

    fn body(&self, made_on: NaiveDate) -> String {
        format!(
            "
MARRIAGE AGREEMENT

This Marriage Agreement is made on {made_on}.

BETWEEN

1. {}, son/daughter of {} and {}.
2. {}, son/daughter of {} and {}.

Marriage Date: {}
Location: {}
",
            self.party1,
            self.father1,
            self.mother1,
            self.party2,
            self.father2,
            self.mother2,
            self.marriage_date,
            self.place_of_marriage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MarriageRequest {
        MarriageRequest {
            party1: "Ravi".into(),
            father1: "Mohan".into(),
            mother1: "Sita".into(),
            party2: "Priya".into(),
            father2: "Arjun".into(),
            mother2: "Gita".into(),
            place_of_marriage: "Pune".into(),
            marriage_date: "2024-05-20".into(),
        }
    }

    #[test]
    fn test_body() {
        let made_on = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let body = sample().body(made_on);
        assert!(body.contains("1. Ravi, son/daughter of Mohan and Sita.\n"));
        assert!(body.contains("2. Priya, son/daughter of Arjun and Gita.\n"));
        assert!(body.ends_with("\nMarriage Date: 2024-05-20\nLocation: Pune\n"));
    }

    #[test]
    fn test_all_eight_fields_required() {
        let errors = MarriageRequest::default().validate().unwrap_err();
        assert_eq!(errors.len(), 9);
        assert_eq!(
            errors.messages().last().map(String::as_str),
            Some("All fields are required!")
        );
    }
}
