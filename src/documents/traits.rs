//! Traits shared by every document type

use chrono::NaiveDate;

use super::DocumentType;
use crate::validation::ValidationErrors;

/// Validate a filled-in form before any rendering happens
pub trait Validator {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Assemble the body text of a document
pub trait Template {
    fn document_type(&self) -> DocumentType;

    /// Body prose with every value interpolated verbatim
    fn body(&self, made_on: NaiveDate) -> String;

    fn subject(&self) -> String {
        self.document_type().subject()
    }
}
