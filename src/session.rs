//! Form session
//!
//! Holds the values typed so far for one user, the selected document type
//! and the output file name. A session is a plain value passed around
//! explicitly and can be saved to and restored from JSON.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::documents::{DocumentForm, DocumentType};
use crate::error::DocError;
use crate::validation::ValidationError;

pub const DEFAULT_FILE_NAME: &str = "legal_document.pdf";

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSession {
    pub document_type: DocumentType,
    /// Field key → last non-empty value entered
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Warnings raised by the last round of input, not persisted
    #[serde(skip)]
    pub warnings: Vec<ValidationError>,
}

impl FormSession {
    pub fn new(document_type: DocumentType) -> Self {
        Self {
            document_type,
            values: BTreeMap::new(),
            file_name: default_file_name(),
            warnings: Vec::new(),
        }
    }

    /// Switch type; values typed for shared keys are kept
    pub fn select(&mut self, document_type: DocumentType) {
        self.document_type = document_type;
        self.warnings.clear();
    }

    pub fn save_input(&mut self, key: &str, value: &str) -> String {
        self.values.insert(key.to_string(), value.to_string());
        value.to_string()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Record one field's input.
    ///
    /// A non-empty value is stored and returned. An empty value keeps the
    /// previously stored one untouched; for a required field it also records
    /// a warning and yields `None`.
    pub fn text_input(&mut self, key: &str, label: &str, value: &str, optional: bool) -> Option<String> {
        if !value.is_empty() {
            return Some(self.save_input(key, value));
        }
        if !optional {
            warn!("{} is required.", label);
            self.warnings.push(ValidationError::required(key, label));
            return None;
        }
        Some(String::new())
    }

    /// Feed a whole submission through `text_input` using the selected
    /// type's field list
    pub fn submit(&mut self, inputs: &BTreeMap<String, String>) {
        self.warnings.clear();
        for field in self.document_type.fields() {
            let value = inputs.get(field.key).map(String::as_str).unwrap_or("");
            self.text_input(field.key, field.label, value, false);
        }
    }

    /// Typed form built from the stored values of the selected type
    pub fn build_document(&self) -> Result<DocumentForm, DocError> {
        let values: BTreeMap<String, String> = self
            .document_type
            .fields()
            .iter()
            .filter_map(|f| self.values.get(f.key).map(|v| (f.key.to_string(), v.clone())))
            .collect();
        debug!(
            "building {} from {} stored values",
            self.document_type,
            values.len()
        );
        Ok(DocumentForm::from_values(self.document_type, &values)?)
    }

    pub fn set_file_name(&mut self, name: &str) {
        if name.trim().is_empty() {
            self.file_name = default_file_name();
        } else {
            self.file_name = name.trim().to_string();
        }
    }

    pub fn output_file_name(&self) -> &str {
        &self.file_name
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, DocError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Accept either a saved session or a flat object of field values. Only
    /// an object with a `document_type` key is read as a session, so a broken
    /// session reports its own error.
    pub fn from_form_json(document_type: DocumentType, json: &str) -> Result<Self, DocError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("document_type").is_some() {
            let mut session: FormSession = serde_json::from_value(value)?;
            if session.document_type != document_type {
                warn!(
                    "session was saved for {}, switching to {}",
                    session.document_type, document_type
                );
                session.select(document_type);
            }
            return Ok(session);
        }

        let inputs: BTreeMap<String, String> = serde_json::from_value(value)?;
        let mut session = FormSession::new(document_type);
        session.submit(&inputs);
        Ok(session)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), DocError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_keeps_previous_value() {
        let mut session = FormSession::new(DocumentType::Lease);
        assert_eq!(
            session.text_input("landlord", "Landlord", "Alice", false),
            Some("Alice".to_string())
        );
        assert_eq!(session.text_input("landlord", "Landlord", "", false), None);
        assert_eq!(session.get("landlord"), Some("Alice"));
        assert_eq!(session.warnings.len(), DocumentType::Lease.fields().len() - 1);
        assert_eq!(session.warnings[0].message, "Landlord is required.");
    }

    #[test]
    fn test_optional_empty_is_not_a_warning() {
        let mut session = FormSession::new(DocumentType::Lease);
        assert_eq!(session.text_input("note", "Note", "", true), Some(String::new()));
        assert!(session.warnings.is_empty());
    }

    #[test]
    fn test_build_document_uses_selected_type() {
        let mut session = FormSession::new(DocumentType::Nda);
        session.save_input("disclosing_party", "Acme");
        session.save_input("landlord", "ignored");
        let form = session.build_document().unwrap();
        assert_eq!(form.document_type(), DocumentType::Nda);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_file_name_default() {
        let mut session = FormSession::new(DocumentType::LastWill);
        assert_eq!(session.output_file_name(), "legal_document.pdf");
        session.set_file_name("  ");
        assert_eq!(session.output_file_name(), "legal_document.pdf");
        session.set_file_name("will.pdf");
        assert_eq!(session.output_file_name(), "will.pdf");
    }

    #[test]
    fn test_form_json_flat_values() {
        let json = r#"{"landlord": "Alice", "tenant": ""}"#;
        let session = FormSession::from_form_json(DocumentType::Lease, json).unwrap();
        assert_eq!(session.document_type, DocumentType::Lease);
        assert_eq!(session.get("landlord"), Some("Alice"));
        assert_eq!(session.warnings.len(), DocumentType::Lease.fields().len() - 1);
    }

    #[test]
    fn test_form_json_saved_session_switches_type() {
        let json = r#"{"document_type":"Lease Agreement","values":{"tenant":"Bob"}}"#;
        let session = FormSession::from_form_json(DocumentType::Nda, json).unwrap();
        assert_eq!(session.document_type, DocumentType::Nda);
        assert_eq!(session.get("tenant"), Some("Bob"));
    }

    #[test]
    fn test_form_json_broken_session_is_reported() {
        let json = r#"{"document_type":"Leese Agreement","values":{"tenant":"Bob"}}"#;
        let err = FormSession::from_form_json(DocumentType::Lease, json).unwrap_err();
        assert!(matches!(err, DocError::Json(_)));
        assert!(err.to_string().contains("Leese Agreement"));
    }

    #[test]
    fn test_missing_file_name_in_json_defaults() {
        let json = r#"{"document_type":"Lease Agreement","values":{"tenant":"Bob"}}"#;
        let session: FormSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.file_name, DEFAULT_FILE_NAME);
        assert_eq!(session.get("tenant"), Some("Bob"));
    }
}
