//! Form input validation
//!
//! Every check appends to a `ValidationErrors` collection instead of
//! returning early, so one pass reports every problem with a submission.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required!";
pub const INVALID_DATE: &str = "Invalid date format! Please enter in YYYY-MM-DD format.";

lazy_static! {
    static ref DATE_PATTERN: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles");
}

/// Shape check only: `2024-13-45` passes
pub fn validate_date(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

/// Non-empty, ASCII decimal digits only
pub fn validate_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// A single failed check with a user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Form key of the field, empty for form-level errors
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn required(field: &str, label: &str) -> Self {
        Self::new(field, format!("{} is required.", label))
    }

    pub fn all_required() -> Self {
        Self::new("", ALL_FIELDS_REQUIRED)
    }

    pub fn invalid_date(field: &str) -> Self {
        Self::new(field, INVALID_DATE)
    }

    pub fn not_numeric(field: &str, name: &str) -> Self {
        Self::new(field, format!("{} must be a numeric value!", name))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Ok if nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages = self.messages();
        write!(f, "{}", messages.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Field checks
// ============================================================================

/// Missing (empty) value; whitespace counts as a value
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) -> bool {
    if value.is_empty() {
        errors.add(ValidationError::required(field, label));
        return false;
    }
    true
}

/// Date shape check, skipped for empty values (reported as missing instead)
pub fn validate_date_field(value: &str, field: &str, errors: &mut ValidationErrors) {
    if !value.is_empty() && !validate_date(value) {
        errors.add(ValidationError::invalid_date(field));
    }
}

/// Numeric check, skipped for empty values
pub fn validate_number_field(value: &str, field: &str, name: &str, errors: &mut ValidationErrors) {
    if !value.is_empty() && !validate_number(value) {
        errors.add(ValidationError::not_numeric(field, name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_pattern_compiles() {
        lazy_static::initialize(&DATE_PATTERN);
        assert_eq!(DATE_PATTERN.as_str(), r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$");
    }

    #[test]
    fn test_date_shape_only() {
        assert!(validate_date("2024-01-15"));
        assert!(validate_date("2024-13-01"));
        assert!(!validate_date("2024-1-15"));
        assert!(!validate_date("15/01/2024"));
        assert!(!validate_date("2024-01-15 "));
        assert!(!validate_date(""));
    }

    #[test]
    fn test_number_digits_only() {
        assert!(validate_number("5000"));
        assert!(validate_number("007"));
        assert!(!validate_number("50.5"));
        assert!(!validate_number("-3"));
        assert!(!validate_number(""));
        assert!(!validate_number("١٢"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::required("salary", "Salary").message,
            "Salary is required."
        );
        assert_eq!(
            ValidationError::not_numeric("salary", "Salary").to_string(),
            "Salary must be a numeric value!"
        );
    }

    #[test]
    fn test_collects_every_error() {
        let mut errors = ValidationErrors::new();
        validate_required("", "employer", "Employer", &mut errors);
        validate_date_field("tomorrow", "start_date", &mut errors);
        validate_number_field("ten", "salary", "Salary", &mut errors);
        validate_date_field("", "other", &mut errors);
        assert_eq!(errors.len(), 3);
        assert!(errors.has_field("start_date"));
        assert!(!errors.has_field("other"));
        assert!(errors.clone().into_result().is_err());
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
