//! Error types for the document generator
//!
//! `RendererError` covers everything that can go wrong while composing the
//! PDF. `DocError` is what the front end sees: input validation failures,
//! render failures and the file handling around them.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Custom error type for PDF renderer operations
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("Image error: {0}")]
    ImageError(String),

    #[error("QR code error: {0}")]
    QrError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("PDF generation error: {0}")]
    PdfError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for renderer operations
pub type RendererResult<T> = Result<T, RendererError>;

impl From<image::ImageError> for RendererError {
    fn from(err: image::ImageError) -> Self {
        RendererError::ImageError(err.to_string())
    }
}

impl From<serde_json::Error> for RendererError {
    fn from(err: serde_json::Error) -> Self {
        RendererError::ConfigError(err.to_string())
    }
}

/// Errors surfaced to whoever drives the form (CLI, tests, embedding apps)
#[derive(Error, Debug)]
pub enum DocError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Error generating PDF: {0}")]
    Render(#[from] RendererError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("Renderer produced an empty document")]
    EmptyOutput,
}
